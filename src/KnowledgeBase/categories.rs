//! Registry of reaction categories (oxidation, reduction, ...) and the keyword
//! stems used to detect them in problem text. Registration order is the order
//! in which categories are reported by the recognizer.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactionCategory {
    pub id: String,
    /// lowercase stems, e.g. "oxid" matches oxidation, oxidized, oxidizing
    pub stems: Vec<String>,
}

impl ReactionCategory {
    pub fn new(id: &str, stems: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            stems: stems.iter().map(|s| s.to_lowercase()).collect(),
        }
    }
    /// Trims and lowercases the stems and drops blank ones. Stems read from JSON
    /// arrive as written, so the knowledge base runs this before validation.
    pub fn normalize_stems(&mut self) {
        self.stems = self
            .stems
            .iter()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
    }
    /// true if any stem occurs in already case-folded text
    pub fn is_mentioned_in(&self, folded_text: &str) -> bool {
        self.stems
            .iter()
            .any(|stem| !stem.is_empty() && folded_text.contains(stem.as_str()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryRegistry {
    categories: Vec<ReactionCategory>,
}

impl CategoryRegistry {
    pub fn new() -> Self {
        Self {
            categories: Vec::new(),
        }
    }
    pub fn from_categories(categories: Vec<ReactionCategory>) -> Self {
        Self { categories }
    }
    pub fn push(&mut self, category: ReactionCategory) {
        self.categories.push(category);
    }
    pub fn get(&self, id: &str) -> Option<&ReactionCategory> {
        self.categories.iter().find(|c| c.id == id)
    }
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, ReactionCategory> {
        self.categories.iter()
    }
    pub fn normalize_stems(&mut self) {
        self.categories
            .iter_mut()
            .for_each(ReactionCategory::normalize_stems);
    }
    pub fn ids(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.id.as_str()).collect()
    }
    pub fn len(&self) -> usize {
        self.categories.len()
    }
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stems_are_folded_and_matched() {
        let halogenation = ReactionCategory::new("halogenation", &["Halogenat", "bromin", "chlorin"]);
        assert_eq!(halogenation.stems[0], "halogenat");
        assert!(halogenation.is_mentioned_in("benzene is brominated"));
        assert!(!halogenation.is_mentioned_in("benzene is nitrated"));
    }

    #[test]
    fn test_normalize_stems() {
        let mut registry = CategoryRegistry::from_categories(vec![ReactionCategory {
            id: "oxidation".to_string(),
            stems: vec!["Oxid".to_string(), " ".to_string(), " OXY ".to_string(), String::new()],
        }]);
        registry.normalize_stems();
        let oxidation = registry.get("oxidation").unwrap();
        assert_eq!(oxidation.stems, vec!["oxid", "oxy"]);
        assert!(oxidation.is_mentioned_in("toluene oxidation"));
        assert!(!oxidation.is_mentioned_in("no chemistry terms here"));
    }

    #[test]
    fn test_registry_keeps_registration_order() {
        let registry = CategoryRegistry::from_categories(vec![
            ReactionCategory::new("reduction", &["reduc"]),
            ReactionCategory::new("oxidation", &["oxid"]),
        ]);
        assert_eq!(registry.ids(), vec!["reduction", "oxidation"]);
        assert!(registry.contains("oxidation"));
        assert!(!registry.contains("Oxidation"));
        assert_eq!(registry.len(), 2);
    }
}
