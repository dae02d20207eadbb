//! # Entity Recognizer Module
//!
//! ## Purpose
//! Reads free-form problem text ("Benzene on nitration gives Compound A ...") and
//! reports which compounds and which reaction categories it mentions.
//!
//! ## Key Logic Implementation
//! 1. **Case folding**: the text is lowercased once, the input is never modified
//! 2. **Named compounds**: every dictionary name is tested as a substring of the folded
//!    text, in dictionary order. No word boundaries: "ethanol" also matches inside
//!    "methanol", and both are reported
//! 3. **Placeholders**: "Compound A", "compound B" ... give single-letter entries with
//!    `CompoundStructure::Unknown`, in order of first occurrence
//! 4. **Categories**: a category is reported once if any of its stems occurs in the
//!    folded text; categories come out in registry order, not text order
//!
//! The result depends only on the text and the knowledge base.
use crate::KnowledgeBase::kb_api::KnowledgeBase;
use crate::KnowledgeBase::records::CompoundStructure;
use log::debug;
use regex::Regex;
use std::sync::OnceLock;

/// "compound" + whitespace + one uppercase letter that is not the start of a longer word
fn placeholder_regex() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| {
        Regex::new(r"\b(?i:compound)\s+([A-Z])(?:[^A-Za-z]|$)").expect("valid placeholder pattern")
    })
}

/// compounds found in text, in the order they were recorded
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecognizedCompounds {
    entries: Vec<(String, CompoundStructure)>,
}

impl RecognizedCompounds {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
    /// adds an entry unless the label is already present; returns whether it was added
    pub fn insert(&mut self, label: &str, structure: CompoundStructure) -> bool {
        if self.contains(label) {
            return false;
        }
        self.entries.push((label.to_string(), structure));
        true
    }
    pub fn get(&self, label: &str) -> Option<&CompoundStructure> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, structure)| structure)
    }
    pub fn contains(&self, label: &str) -> bool {
        self.get(label).is_some()
    }
    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|(l, _)| l.as_str()).collect()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CompoundStructure)> {
        self.entries.iter().map(|(l, s)| (l.as_str(), s))
    }
    pub fn known(&self) -> impl Iterator<Item = (&str, &CompoundStructure)> {
        self.iter().filter(|(_, s)| s.is_known())
    }
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.iter()
            .filter(|(_, s)| !s.is_known())
            .map(|(label, _)| label)
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// output of `EntityRecognizer::recognize`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recognition {
    pub compounds: RecognizedCompounds,
    pub categories: Vec<String>,
}

impl Recognition {
    pub fn is_empty(&self) -> bool {
        self.compounds.is_empty() && self.categories.is_empty()
    }
}

pub struct EntityRecognizer<'a> {
    kb: &'a KnowledgeBase,
}

impl<'a> EntityRecognizer<'a> {
    pub fn new(kb: &'a KnowledgeBase) -> Self {
        Self { kb }
    }

    pub fn recognize(&self, text: &str) -> Recognition {
        let folded = text.to_lowercase();
        let mut compounds = self.named_compounds(&folded);
        for letter in placeholder_letters(text) {
            if !compounds.insert(&letter, CompoundStructure::Unknown) {
                debug!("placeholder '{}' shadowed by a named compound", letter);
            }
        }
        let categories = self.categories(&folded);
        debug!(
            "recognized compounds {:?}, categories {:?}",
            compounds.labels(),
            categories
        );
        Recognition {
            compounds,
            categories,
        }
    }

    fn named_compounds(&self, folded: &str) -> RecognizedCompounds {
        let mut found = RecognizedCompounds::new();
        for entry in self.kb.all_compounds() {
            if folded.contains(entry.name.to_lowercase().as_str()) {
                found.insert(&entry.name, CompoundStructure::Known(entry.notation.clone()));
            }
        }
        found
    }

    fn categories(&self, folded: &str) -> Vec<String> {
        self.kb
            .categories()
            .iter()
            .filter(|category| category.is_mentioned_in(folded))
            .map(|category| category.id.clone())
            .collect()
    }
}

/// distinct placeholder letters in order of first occurrence
pub fn placeholder_letters(text: &str) -> Vec<String> {
    let mut letters: Vec<String> = Vec::new();
    for cap in placeholder_regex().captures_iter(text) {
        let letter = cap[1].to_string();
        if !letters.contains(&letter) {
            letters.push(letter);
        }
    }
    letters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KnowledgeBase::categories::{CategoryRegistry, ReactionCategory};
    use crate::KnowledgeBase::kb_api::KnowledgeBaseData;
    use crate::KnowledgeBase::records::{CompoundEntry, Notation, PathwayRecord};

    fn minimal_kb() -> KnowledgeBase {
        KnowledgeBase::new(KnowledgeBaseData {
            reactions: Vec::new(),
            compounds: vec![CompoundEntry::smiles("aniline", "Nc1ccccc1")],
            common_names: Vec::new(),
            categories: CategoryRegistry::from_categories(vec![
                ReactionCategory::new("oxidation", &["oxid"]),
                ReactionCategory::new("reduction", &["reduc"]),
            ]),
            pathways: vec![PathwayRecord::new(
                "oxidation",
                "Primary Alcohol Oxidation",
                "Primary alcohol → Aldehyde",
                &["c1ccccc1CO", "c1ccccc1C=O"],
                &["KMnO₄"],
                "",
            )],
        })
        .unwrap()
    }

    #[test]
    fn test_placeholders_and_named_compound() {
        let kb = minimal_kb();
        let recognizer = EntityRecognizer::new(&kb);
        let result = recognizer.recognize("Compound A on oxidation gives Compound B, aniline.");
        assert_eq!(result.compounds.len(), 3);
        assert_eq!(result.compounds.get("A"), Some(&CompoundStructure::Unknown));
        assert_eq!(result.compounds.get("B"), Some(&CompoundStructure::Unknown));
        assert_eq!(
            result.compounds.get("aniline"),
            Some(&CompoundStructure::Known(Notation::Smiles("Nc1ccccc1".to_string())))
        );
        assert_eq!(result.categories, vec!["oxidation".to_string()]);
        // named compounds first, in dictionary order, then placeholders in text order
        assert_eq!(result.compounds.labels(), vec!["aniline", "A", "B"]);
    }

    #[test]
    fn test_no_chemistry_terms() {
        let kb = minimal_kb();
        let result = EntityRecognizer::new(&kb).recognize("no chemistry terms here");
        assert!(result.compounds.is_empty());
        assert!(result.categories.is_empty());
        assert!(result.is_empty());
        assert!(EntityRecognizer::new(&kb).recognize("").is_empty());
    }

    #[test]
    fn test_categories_in_registry_order_without_duplicates() {
        let kb = KnowledgeBase::builtin().unwrap();
        let recognizer = EntityRecognizer::new(&kb);
        let result = recognizer.recognize(
            "Reduce it, then oxidize, then brominate and chlorinate; oxidation again.",
        );
        assert_eq!(result.categories, vec!["oxidation", "reduction", "halogenation"]);
    }

    #[test]
    fn test_placeholder_letters() {
        assert_eq!(
            placeholder_letters("compound A gives COMPOUND B and then Compound A again"),
            vec!["A", "B"]
        );
        // lowercase letters, longer words and "compounds" are not placeholders
        assert!(placeholder_letters("compound a").is_empty());
        assert!(placeholder_letters("Compound Acetone").is_empty());
        assert!(placeholder_letters("two compounds X").is_empty());
        assert_eq!(placeholder_letters("... to give Compound C"), vec!["C"]);
        assert_eq!(placeholder_letters("Compound\tD."), vec!["D"]);
    }

    #[test]
    fn test_substring_matching_keeps_overlaps() {
        let kb = KnowledgeBase::builtin().unwrap();
        let result = EntityRecognizer::new(&kb).recognize("Methanol is added.");
        // "ethanol" is a substring of "methanol": both are reported
        assert!(result.compounds.contains("methanol"));
        assert!(result.compounds.contains("ethanol"));
        let labels = result.compounds.labels();
        let ethanol = labels.iter().position(|l| *l == "ethanol").unwrap();
        let methanol = labels.iter().position(|l| *l == "methanol").unwrap();
        assert!(ethanol < methanol);
    }

    #[test]
    fn test_placeholder_does_not_overwrite_named_compound() {
        let kb = KnowledgeBase::new(KnowledgeBaseData {
            reactions: Vec::new(),
            compounds: vec![CompoundEntry::smiles("X", "C")],
            common_names: Vec::new(),
            categories: CategoryRegistry::from_categories(vec![ReactionCategory::new(
                "oxidation",
                &["oxid"],
            )]),
            pathways: Vec::new(),
        })
        .unwrap();
        let result = EntityRecognizer::new(&kb).recognize("Compound X");
        assert_eq!(result.compounds.len(), 1);
        assert!(result.compounds.get("X").unwrap().is_known());
    }

    #[test]
    fn test_builtin_example_problem() {
        let kb = KnowledgeBase::builtin().unwrap();
        let result = EntityRecognizer::new(&kb).recognize(
            "Benzene on nitration gives Compound A which on reduction gives Compound B, aniline.",
        );
        assert_eq!(result.compounds.labels(), vec!["benzene", "aniline", "A", "B"]);
        assert_eq!(result.categories, vec!["reduction", "nitration"]);
        assert_eq!(result.compounds.placeholders().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(result.compounds.known().count(), 2);
    }
}
