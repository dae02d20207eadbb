//! # Settings Module
//!
//! ## Purpose
//! User-facing view of the configuration: every option has a display name and a
//! text value, so the terminal menu can list and edit options without knowing the
//! `AppConfig` fields.
//!
//! ## Setting Mappings
//! | Display Name | Field | Accepted values |
//! |--------------|-------|-----------------|
//! | "Knowledge Base File" | knowledge_base_file | existing path, or "builtin" |
//! | "Default Categories" | default_categories | comma separated category ids |
//! | "Show Properties" | show_properties | yes/no, true/false, on/off |
//! | "Show Mechanisms" | show_mechanisms | yes/no, true/false, on/off |
//! | "Log Level" | log_level | off, error, warn, info, debug, trace |
//! | "Card Width" | card_width | 20 to 120 |
use crate::config_manager::{AppConfig, ConfigManager, with_config, with_config_mut};

pub const SETTING_NAMES: [&str; 6] = [
    "Knowledge Base File",
    "Default Categories",
    "Show Properties",
    "Show Mechanisms",
    "Log Level",
    "Card Width",
];

const BUILTIN_MARKER: &str = "builtin";

fn parse_flag(value: &str) -> Result<bool, String> {
    match value.trim().to_lowercase().as_str() {
        "yes" | "y" | "true" | "on" | "1" => Ok(true),
        "no" | "n" | "false" | "off" | "0" => Ok(false),
        other => Err(format!("Expected yes or no, got '{}'", other)),
    }
}

fn flag_text(flag: bool) -> String {
    if flag { "yes".to_string() } else { "no".to_string() }
}

/// (display name, value) pairs in menu order
fn display_values(config: &AppConfig) -> Vec<(String, String)> {
    vec![
        (
            SETTING_NAMES[0].to_string(),
            config
                .knowledge_base_file
                .clone()
                .unwrap_or_else(|| BUILTIN_MARKER.to_string()),
        ),
        (SETTING_NAMES[1].to_string(), config.default_categories.join(", ")),
        (SETTING_NAMES[2].to_string(), flag_text(config.show_properties)),
        (SETTING_NAMES[3].to_string(), flag_text(config.show_mechanisms)),
        (SETTING_NAMES[4].to_string(), config.log_level.clone()),
        (SETTING_NAMES[5].to_string(), config.card_width.to_string()),
    ]
}

#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// cached display values, in `SETTING_NAMES` order
    pub values: Vec<(String, String)>,
}

impl Settings {
    /// snapshot of the process-wide configuration
    pub fn new() -> Self {
        with_config(Self::from_manager)
    }

    pub fn from_manager(manager: &ConfigManager) -> Self {
        Self {
            values: display_values(manager.get_config()),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn names(&self) -> Vec<&str> {
        self.values.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// changes one option of the process-wide configuration
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), String> {
        with_config_mut(|manager| self.set_in(manager, name, value))
    }

    /// changes one option of `manager` and refreshes the cache
    pub fn set_in(&mut self, manager: &mut ConfigManager, name: &str, value: &str) -> Result<(), String> {
        let value = value.trim();
        let result = match name {
            "Knowledge Base File" => {
                if value.is_empty() || value.eq_ignore_ascii_case(BUILTIN_MARKER) {
                    manager.set_knowledge_base_file(None)
                } else {
                    manager.set_knowledge_base_file(Some(value))
                }
            }
            "Default Categories" => {
                manager.set_default_categories(value.split(',').map(|c| c.to_string()).collect())
            }
            "Show Properties" => manager.set_show_properties(parse_flag(value)?),
            "Show Mechanisms" => manager.set_show_mechanisms(parse_flag(value)?),
            "Log Level" => manager.set_log_level(value),
            "Card Width" => {
                let width: usize = value
                    .parse()
                    .map_err(|_| format!("Expected a whole number, got '{}'", value))?;
                manager.set_card_width(width)
            }
            _ => return Err(format!("Unknown setting: {}", name)),
        };
        result.map_err(|e| e.to_string())?;
        self.values = display_values(manager.get_config());
        Ok(())
    }

    pub fn reset_to_defaults(&mut self) -> Result<(), String> {
        with_config_mut(|manager| {
            manager.reset_to_defaults().map_err(|e| e.to_string())?;
            self.values = display_values(manager.get_config());
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn temp_manager(file: &NamedTempFile) -> ConfigManager {
        ConfigManager::with_config_file(file.path().to_str().unwrap())
    }

    #[test]
    fn test_settings_from_defaults() {
        let file = NamedTempFile::new().unwrap();
        let settings = Settings::from_manager(&temp_manager(&file));
        assert_eq!(settings.names(), SETTING_NAMES.to_vec());
        assert_eq!(settings.get("Knowledge Base File"), Some("builtin"));
        assert_eq!(settings.get("Default Categories"), Some("oxidation"));
        assert_eq!(settings.get("Show Properties"), Some("yes"));
        assert_eq!(settings.get("Card Width"), Some("40"));
        assert_eq!(settings.get("Colour"), None);
    }

    #[test]
    fn test_set_values() {
        let file = NamedTempFile::new().unwrap();
        let mut manager = temp_manager(&file);
        let mut settings = Settings::from_manager(&manager);
        settings
            .set_in(&mut manager, "Default Categories", "reduction, nitration")
            .unwrap();
        settings.set_in(&mut manager, "Show Mechanisms", "off").unwrap();
        settings.set_in(&mut manager, "Card Width", " 72 ").unwrap();
        assert_eq!(settings.get("Default Categories"), Some("reduction, nitration"));
        assert_eq!(settings.get("Show Mechanisms"), Some("no"));
        assert_eq!(manager.get_config().card_width, 72);
        assert_eq!(
            manager.get_config().default_categories,
            vec!["reduction", "nitration"]
        );
    }

    #[test]
    fn test_knowledge_base_file_setting() {
        let file = NamedTempFile::new().unwrap();
        let kb_file = NamedTempFile::new().unwrap();
        let mut manager = temp_manager(&file);
        let mut settings = Settings::from_manager(&manager);
        let kb_path = kb_file.path().to_str().unwrap();
        settings
            .set_in(&mut manager, "Knowledge Base File", kb_path)
            .unwrap();
        assert_eq!(settings.get("Knowledge Base File"), Some(kb_path));
        settings
            .set_in(&mut manager, "Knowledge Base File", "BUILTIN")
            .unwrap();
        assert_eq!(manager.get_config().knowledge_base_file, None);
    }

    #[test]
    fn test_rejected_values_keep_cache() {
        let file = NamedTempFile::new().unwrap();
        let mut manager = temp_manager(&file);
        let mut settings = Settings::from_manager(&manager);
        assert!(settings.set_in(&mut manager, "Show Properties", "maybe").is_err());
        assert!(settings.set_in(&mut manager, "Card Width", "wide").is_err());
        assert!(settings.set_in(&mut manager, "Card Width", "500").is_err());
        assert!(settings.set_in(&mut manager, "Log Level", "chatty").is_err());
        assert!(settings.set_in(&mut manager, "Colour", "red").is_err());
        assert_eq!(settings.get("Show Properties"), Some("yes"));
        assert_eq!(settings.get("Card Width"), Some("40"));
    }
}
