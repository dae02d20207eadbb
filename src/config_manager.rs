//! # Configuration Manager Module
//!
//! ## Purpose
//! Keeps the user-adjustable options of the application in one JSON file
//! (`orgsynth_config.json`) and hands them out through a process-wide manager.
//! A missing file means defaults; a broken file is reported and replaced by defaults.
//!
//! ## Architecture
//! - **AppConfig**: serializable options
//! - **ConfigManager**: loading, validated updates and persistence
//! - **Global Access**: `OnceLock<Mutex<ConfigManager>>` behind `with_config`/`with_config_mut`
//!
//! ## Configuration Format
//! ```json
//! {
//!   "knowledge_base_file": null,
//!   "default_categories": ["oxidation"],
//!   "show_properties": true,
//!   "show_mechanisms": true,
//!   "log_level": "info",
//!   "card_width": 40
//! }
//! ```
//!
//! ## Usage Pattern
//! ```rust
//! use OrgSynth::config_manager::with_config;
//! let categories = with_config(|manager| manager.get_config().default_categories.clone());
//! assert!(!categories.is_empty());
//! ```
use crate::Structure::structure_api::{MAX_CARD_WIDTH, MIN_CARD_WIDTH};
use log::{LevelFilter, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard, OnceLock};
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "orgsynth_config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("File does not exist: {0}")]
    MissingFile(String),
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
    #[error("At least one non-empty default category is required")]
    EmptyCategories,
    #[error("Card width {0} is outside {MIN_CARD_WIDTH}..={MAX_CARD_WIDTH}")]
    InvalidCardWidth(usize),
    #[error("Failed to access configuration file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// JSON knowledge base replacing the built-in one, if set
    pub knowledge_base_file: Option<String>,
    /// categories the solver resolves when the user does not pick any
    pub default_categories: Vec<String>,
    pub show_properties: bool,
    pub show_mechanisms: bool,
    pub log_level: String,
    /// width of rendered structure cards, in characters
    pub card_width: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            knowledge_base_file: None,
            default_categories: vec!["oxidation".to_string()],
            show_properties: true,
            show_mechanisms: true,
            log_level: "info".to_string(),
            card_width: 40,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: AppConfig,
    config_file: String,
}

impl ConfigManager {
    /// manager over `orgsynth_config.json` in the working directory
    pub fn new() -> Self {
        Self::with_config_file(DEFAULT_CONFIG_FILE)
    }

    pub fn with_config_file(config_file: &str) -> Self {
        let config = match Self::load_config(config_file) {
            Ok(config) => config,
            Err(e) => {
                warn!("{}; using default configuration", e);
                AppConfig::default()
            }
        };
        Self {
            config,
            config_file: config_file.to_string(),
        }
    }

    fn load_config(config_file: &str) -> Result<AppConfig, ConfigError> {
        if Path::new(config_file).exists() {
            let content = fs::read_to_string(config_file)?;
            let config: AppConfig = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(AppConfig::default())
        }
    }

    pub fn save_config(&self) -> Result<(), ConfigError> {
        self.write_config(&self.config)
    }

    fn write_config(&self, config: &AppConfig) -> Result<(), ConfigError> {
        // unit tests never write the working-directory file
        if cfg!(test) && self.config_file == DEFAULT_CONFIG_FILE {
            return Ok(());
        }
        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.config_file, content)?;
        Ok(())
    }

    /// saves `candidate` and only then makes it current, so a failed write leaves
    /// the in-memory configuration as it was
    fn commit(&mut self, candidate: AppConfig) -> Result<(), ConfigError> {
        self.write_config(&candidate)?;
        self.config = candidate;
        Ok(())
    }

    pub fn get_config(&self) -> &AppConfig {
        &self.config
    }
    pub fn config_file(&self) -> &str {
        &self.config_file
    }

    /// configured log level; unparsable values fall back to `Info`
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.config.log_level).unwrap_or(LevelFilter::Info)
    }

    /// `None` switches back to the built-in knowledge base
    pub fn set_knowledge_base_file(&mut self, path: Option<&str>) -> Result<(), ConfigError> {
        if let Some(path) = path {
            if !Path::new(path).exists() {
                return Err(ConfigError::MissingFile(path.to_string()));
            }
        }
        let candidate = AppConfig {
            knowledge_base_file: path.map(str::to_string),
            ..self.config.clone()
        };
        self.commit(candidate)
    }

    pub fn set_default_categories(&mut self, categories: Vec<String>) -> Result<(), ConfigError> {
        let categories: Vec<String> = categories
            .into_iter()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();
        if categories.is_empty() {
            return Err(ConfigError::EmptyCategories);
        }
        let candidate = AppConfig {
            default_categories: categories,
            ..self.config.clone()
        };
        self.commit(candidate)
    }

    pub fn set_show_properties(&mut self, show: bool) -> Result<(), ConfigError> {
        let candidate = AppConfig {
            show_properties: show,
            ..self.config.clone()
        };
        self.commit(candidate)
    }

    pub fn set_show_mechanisms(&mut self, show: bool) -> Result<(), ConfigError> {
        let candidate = AppConfig {
            show_mechanisms: show,
            ..self.config.clone()
        };
        self.commit(candidate)
    }

    pub fn set_log_level(&mut self, level: &str) -> Result<(), ConfigError> {
        let parsed = LevelFilter::from_str(level.trim())
            .map_err(|_| ConfigError::InvalidLogLevel(level.to_string()))?;
        let candidate = AppConfig {
            log_level: parsed.to_string().to_lowercase(),
            ..self.config.clone()
        };
        self.commit(candidate)
    }

    pub fn set_card_width(&mut self, width: usize) -> Result<(), ConfigError> {
        if !(MIN_CARD_WIDTH..=MAX_CARD_WIDTH).contains(&width) {
            return Err(ConfigError::InvalidCardWidth(width));
        }
        let candidate = AppConfig {
            card_width: width,
            ..self.config.clone()
        };
        self.commit(candidate)
    }

    pub fn reset_to_defaults(&mut self) -> Result<(), ConfigError> {
        self.commit(AppConfig::default())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_CONFIG_MANAGER: OnceLock<Mutex<ConfigManager>> = OnceLock::new();

/// guard over the process-wide manager; a poisoned lock still yields the last state
pub fn get_config_manager() -> MutexGuard<'static, ConfigManager> {
    GLOBAL_CONFIG_MANAGER
        .get_or_init(|| Mutex::new(ConfigManager::new()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub fn with_config<F, R>(f: F) -> R
where
    F: FnOnce(&ConfigManager) -> R,
{
    let manager = get_config_manager();
    f(&manager)
}

pub fn with_config_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut ConfigManager) -> R,
{
    let mut manager = get_config_manager();
    f(&mut manager)
}
