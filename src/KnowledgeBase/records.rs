//! # Knowledge Base Records
//!
//! ## Purpose
//! Plain data types stored in the knowledge base: named reactions, compound
//! dictionary entries and multi-step synthesis pathways. All of them are
//! immutable once the knowledge base is built.
//!
//! ## Main Data Structures
//! - `ReactionRecord`: a named reaction with formulas, mechanism, year and chemists
//! - `Notation`: molecular formula or SMILES structure encoding
//! - `CompoundEntry`: common name mapped to a `Notation`
//! - `CompoundStructure`: result of compound recognition, `Known` or `Unknown`
//! - `PathwayRecord` / `StepLabel`: 2–3 step synthesis sequences
use serde::{Deserialize, Serialize};
use std::fmt;

/// struct for a named reaction (Arndt-Eistert, Hofmann degradation, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactionRecord {
    pub name: String,
    pub reactants: String,
    pub products: String,
    pub description: String,
    pub mechanism: String,
    pub year: i32,
    pub chemists: Vec<String>,
}

impl ReactionRecord {
    /// chemist names joined the way they are displayed and searched
    pub fn chemists_joined(&self) -> String {
        self.chemists.join(", ")
    }
    /// century of publication, e.g. 1935 -> 1900
    pub fn century(&self) -> i32 {
        (self.year / 100) * 100
    }
}

/// the way a compound is written down
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Notation {
    /// molecular formula, possibly with generic groups (RCOOH, C6H5OH)
    Formula(String),
    /// SMILES structure encoding (c1ccccc1CO)
    Smiles(String),
}

impl Notation {
    pub fn as_str(&self) -> &str {
        match self {
            Notation::Formula(s) => s.as_str(),
            Notation::Smiles(s) => s.as_str(),
        }
    }
    pub fn kind(&self) -> &'static str {
        match self {
            Notation::Formula(_) => "Formula",
            Notation::Smiles(_) => "SMILES",
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// common name -> notation. The name keeps its stored case, matching is case-insensitive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundEntry {
    pub name: String,
    pub notation: Notation,
}

impl CompoundEntry {
    pub fn smiles(name: &str, smiles: &str) -> Self {
        Self {
            name: name.to_string(),
            notation: Notation::Smiles(smiles.to_string()),
        }
    }
    pub fn formula(name: &str, formula: &str) -> Self {
        Self {
            name: name.to_string(),
            notation: Notation::Formula(formula.to_string()),
        }
    }
}

/// what is known about a compound mentioned in problem text.
/// `Unknown` is a placeholder like "Compound A" with no structure bound to it yet;
/// it is never used for a structure that turned out to be invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompoundStructure {
    Known(Notation),
    Unknown,
}

impl CompoundStructure {
    pub fn is_known(&self) -> bool {
        matches!(self, CompoundStructure::Known(_))
    }
    pub fn notation(&self) -> Option<&Notation> {
        match self {
            CompoundStructure::Known(notation) => Some(notation),
            CompoundStructure::Unknown => None,
        }
    }
}

/// position of a step in a pathway: A -> B (-> C)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StepLabel {
    A,
    B,
    C,
}

impl StepLabel {
    pub const ALL: [StepLabel; 3] = [StepLabel::A, StepLabel::B, StepLabel::C];

    pub fn as_str(&self) -> &'static str {
        match self {
            StepLabel::A => "A",
            StepLabel::B => "B",
            StepLabel::C => "C",
        }
    }
}

impl fmt::Display for StepLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// struct for one synthesis pathway realizing a reaction category.
/// `steps` holds the SMILES of compounds A, B and optionally C, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathwayRecord {
    pub category: String,
    pub name: String,
    pub description: String,
    pub steps: Vec<String>,
    pub reagents: Vec<String>,
    pub mechanism: String,
}

impl PathwayRecord {
    pub fn new(
        category: &str,
        name: &str,
        description: &str,
        steps: &[&str],
        reagents: &[&str],
        mechanism: &str,
    ) -> Self {
        Self {
            category: category.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            steps: steps.iter().map(|s| s.to_string()).collect(),
            reagents: reagents.iter().map(|r| r.to_string()).collect(),
            mechanism: mechanism.to_string(),
        }
    }
    /// steps paired with their labels; a validated pathway has every step labeled
    pub fn labeled_steps(&self) -> impl Iterator<Item = (StepLabel, &str)> {
        StepLabel::ALL
            .into_iter()
            .zip(self.steps.iter().map(|s| s.as_str()))
    }
    pub fn step(&self, label: StepLabel) -> Option<&str> {
        self.labeled_steps()
            .find(|(l, _)| *l == label)
            .map(|(_, smiles)| smiles)
    }
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }
}
