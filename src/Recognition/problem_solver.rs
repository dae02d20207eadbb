//! # Problem Solver Module
//!
//! ## Purpose
//! Glue between recognition and pathway lookup for a single worded problem:
//! the text is scanned once, the chosen reaction categories are resolved into
//! pathways and the problem gets a rough classification for display.
//!
//! ## Category selection
//! - `solve(text, None)` resolves the categories recognized in the text
//! - `solve(text, Some(list))` resolves exactly `list`, in the given order
//!   (the recognition is still reported, so callers can show both)
//!
//! ## Classification
//! Labels accumulate: a text mentioning benzoic acid is a carboxylic acid
//! synthesis, one mentioning aniline an amine synthesis, and every problem is
//! additionally either multi-step (more than one recognized category) or a
//! single-step transformation.
use super::entity_recognizer::{EntityRecognizer, Recognition};
use super::pathway_resolver::PathwayResolver;
use crate::KnowledgeBase::kb_api::KnowledgeBase;
use crate::KnowledgeBase::records::PathwayRecord;
use log::info;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemType {
    CarboxylicAcidSynthesis,
    AmineSynthesis,
    MultiStep,
    SingleStep,
}

impl ProblemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProblemType::CarboxylicAcidSynthesis => "Carboxylic acid synthesis",
            ProblemType::AmineSynthesis => "Amine synthesis",
            ProblemType::MultiStep => "Multi-step synthesis",
            ProblemType::SingleStep => "Single-step transformation",
        }
    }
}

impl fmt::Display for ProblemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// classification labels for a problem text and its recognized categories
pub fn classify_problem(text: &str, recognized_categories: &[String]) -> Vec<ProblemType> {
    let folded = text.to_lowercase();
    let mut types = Vec::new();
    if folded.contains("benzoic acid") {
        types.push(ProblemType::CarboxylicAcidSynthesis);
    }
    if folded.contains("aniline") {
        types.push(ProblemType::AmineSynthesis);
    }
    if recognized_categories.len() > 1 {
        types.push(ProblemType::MultiStep);
    } else {
        types.push(ProblemType::SingleStep);
    }
    types
}

#[derive(Debug, Clone)]
pub struct Solution<'a> {
    pub recognition: Recognition,
    /// categories that were actually resolved, in resolution order
    pub resolved_categories: Vec<String>,
    pub pathways: Vec<&'a PathwayRecord>,
    pub problem_types: Vec<ProblemType>,
    /// (category, number of pathways) per resolved category
    pub pathway_counts: Vec<(String, usize)>,
}

impl Solution<'_> {
    pub fn has_pathways(&self) -> bool {
        !self.pathways.is_empty()
    }
}

pub struct ProblemSolver<'a> {
    kb: &'a KnowledgeBase,
}

impl<'a> ProblemSolver<'a> {
    pub fn new(kb: &'a KnowledgeBase) -> Self {
        Self { kb }
    }

    pub fn solve(&self, text: &str, selected: Option<&[String]>) -> Solution<'a> {
        let recognition = EntityRecognizer::new(self.kb).recognize(text);
        let resolved_categories: Vec<String> = match selected {
            Some(categories) => categories.to_vec(),
            None => recognition.categories.clone(),
        };
        let resolver = PathwayResolver::new(self.kb);
        let pathways = resolver.resolve(&resolved_categories);
        let pathway_counts = resolver.pathway_counts(&resolved_categories);
        let problem_types = classify_problem(text, &recognition.categories);
        info!(
            "solved problem: {} compounds, categories {:?}, {} pathways",
            recognition.compounds.len(),
            resolved_categories,
            pathways.len()
        );
        Solution {
            recognition,
            resolved_categories,
            pathways,
            problem_types,
            pathway_counts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_with_recognized_categories() {
        let kb = KnowledgeBase::builtin().unwrap();
        let solution = ProblemSolver::new(&kb).solve(
            "Benzene on nitration gives Compound A which on reduction gives Compound B, aniline.",
            None,
        );
        assert_eq!(solution.resolved_categories, vec!["reduction", "nitration"]);
        let names: Vec<&str> = solution.pathways.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Nitro Reduction",
                "Carbonyl Reduction",
                "Carboxylic Acid Reduction",
                "Aromatic Nitration"
            ]
        );
        assert_eq!(
            solution.problem_types,
            vec![ProblemType::AmineSynthesis, ProblemType::MultiStep]
        );
        assert_eq!(
            solution.pathway_counts,
            vec![("reduction".to_string(), 3), ("nitration".to_string(), 1)]
        );
        assert!(solution.has_pathways());
    }

    #[test]
    fn test_solve_with_selected_categories() {
        let kb = KnowledgeBase::builtin().unwrap();
        let selected = vec!["esterification".to_string()];
        let solution =
            ProblemSolver::new(&kb).solve("Toluene is oxidized to benzoic acid.", Some(&selected));
        // recognition is still reported even though the selection wins
        assert_eq!(solution.recognition.categories, vec!["oxidation"]);
        assert_eq!(solution.resolved_categories, selected);
        assert_eq!(solution.pathways.len(), 2);
        assert!(solution.pathways.iter().all(|p| p.category == "esterification"));
        assert_eq!(
            solution.problem_types,
            vec![ProblemType::CarboxylicAcidSynthesis, ProblemType::SingleStep]
        );
    }

    #[test]
    fn test_solve_text_without_chemistry() {
        let kb = KnowledgeBase::builtin().unwrap();
        let solution = ProblemSolver::new(&kb).solve("what is for lunch", None);
        assert!(solution.recognition.is_empty());
        assert!(solution.resolved_categories.is_empty());
        assert!(!solution.has_pathways());
        assert_eq!(solution.problem_types, vec![ProblemType::SingleStep]);
    }

    #[test]
    fn test_classification_labels() {
        assert_eq!(
            ProblemType::CarboxylicAcidSynthesis.to_string(),
            "Carboxylic acid synthesis"
        );
        let two = vec!["oxidation".to_string(), "reduction".to_string()];
        assert_eq!(
            classify_problem("BENZOIC ACID and Aniline", &two),
            vec![
                ProblemType::CarboxylicAcidSynthesis,
                ProblemType::AmineSynthesis,
                ProblemType::MultiStep
            ]
        );
    }
}
