//! # Knowledge Base API Module
//!
//! ## Purpose
//! Owns every collection the rest of the crate reads: named reactions, the
//! compound structure dictionary, the common-name formula glossary, the reaction
//! category registry and the synthesis pathways. The knowledge base is validated
//! once when it is built and never mutated afterwards, so it can be shared by
//! reference (or behind an `Arc`) between any number of readers.
//!
//! ## Main Data Structures
//! - `KnowledgeBaseData`: serde-friendly raw collections (built-in data or JSON file)
//! - `KnowledgeBase`: validated, read-only view over that data
//! - `KnowledgeBaseError`: data-integrity defects found while building
//!
//! ## Usage Pattern
//! ```rust
//! use OrgSynth::KnowledgeBase::kb_api::KnowledgeBase;
//! let kb = KnowledgeBase::builtin().unwrap();
//! println!("{} reactions", kb.all_reactions().len());
//! for pathway in kb.pathways_for("oxidation") {
//!     println!("{}: {}", pathway.name, pathway.description);
//! }
//! ```
use super::builtin_data;
use super::categories::{CategoryRegistry, ReactionCategory};
use super::records::{CompoundEntry, Notation, PathwayRecord, ReactionRecord};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// years outside this range are treated as typos in the data
pub const EARLIEST_YEAR: i32 = 1700;
pub const LATEST_YEAR: i32 = 2100;
pub const MIN_PATHWAY_STEPS: usize = 2;
pub const MAX_PATHWAY_STEPS: usize = 3;

/// error types for knowledge base construction
#[derive(Debug, Error)]
pub enum KnowledgeBaseError {
    #[error("Empty {0} name")]
    EmptyName(&'static str),
    #[error("Duplicate reaction: {0}")]
    DuplicateReaction(String),
    #[error("Reaction '{0}' has no chemists")]
    NoChemists(String),
    #[error("Reaction '{reaction}' has implausible year {year}")]
    ImplausibleYear { reaction: String, year: i32 },
    #[error("Duplicate compound name: {0}")]
    DuplicateCompound(String),
    #[error("Duplicate reaction category: {0}")]
    DuplicateCategory(String),
    #[error("Reaction category '{0}' has no keyword stems")]
    CategoryWithoutStems(String),
    #[error("Pathway '{pathway}' is filed under unregistered category '{category}'")]
    UnregisteredCategory { pathway: String, category: String },
    #[error(
        "Pathway '{pathway}' has {count} steps, expected {min} to {max}",
        min = MIN_PATHWAY_STEPS,
        max = MAX_PATHWAY_STEPS
    )]
    StepCount { pathway: String, count: usize },
    #[error("Failed to read knowledge base file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse knowledge base JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// raw collections in load order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeBaseData {
    pub reactions: Vec<ReactionRecord>,
    pub compounds: Vec<CompoundEntry>,
    #[serde(default)]
    pub common_names: Vec<CompoundEntry>,
    pub categories: CategoryRegistry,
    pub pathways: Vec<PathwayRecord>,
}

#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    reactions: Vec<ReactionRecord>,
    compounds: Vec<CompoundEntry>,
    common_names: Vec<CompoundEntry>,
    categories: CategoryRegistry,
    pathways: Vec<PathwayRecord>,
}

impl KnowledgeBase {
    /// normalizes category stems, validates the data and freezes it
    pub fn new(mut data: KnowledgeBaseData) -> Result<Self, KnowledgeBaseError> {
        data.categories.normalize_stems();
        validate_reactions(&data.reactions)?;
        validate_dictionary(&data.compounds)?;
        validate_dictionary(&data.common_names)?;
        validate_categories(&data.categories)?;
        validate_pathways(&data.pathways, &data.categories)?;
        for category in data.categories.iter() {
            if !data.pathways.iter().any(|p| p.category == category.id) {
                warn!(
                    "reaction category '{}' has keywords but no pathways",
                    category.id
                );
            }
        }
        info!(
            "knowledge base ready: {} reactions, {} compounds, {} common names, {} categories, {} pathways",
            data.reactions.len(),
            data.compounds.len(),
            data.common_names.len(),
            data.categories.len(),
            data.pathways.len()
        );
        Ok(Self {
            reactions: data.reactions,
            compounds: data.compounds,
            common_names: data.common_names,
            categories: data.categories,
            pathways: data.pathways,
        })
    }

    /// knowledge base shipped with the crate
    pub fn builtin() -> Result<Self, KnowledgeBaseError> {
        Self::new(builtin_data::builtin_data())
    }

    pub fn from_json_str(json: &str) -> Result<Self, KnowledgeBaseError> {
        let data: KnowledgeBaseData = serde_json::from_str(json)?;
        Self::new(data)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, KnowledgeBaseError> {
        let content = fs::read_to_string(path.as_ref())?;
        info!("loading knowledge base from {}", path.as_ref().display());
        Self::from_json_str(&content)
    }

    /// raw data, e.g. to export the knowledge base as JSON
    pub fn to_data(&self) -> KnowledgeBaseData {
        KnowledgeBaseData {
            reactions: self.reactions.clone(),
            compounds: self.compounds.clone(),
            common_names: self.common_names.clone(),
            categories: self.categories.clone(),
            pathways: self.pathways.clone(),
        }
    }

    pub fn all_reactions(&self) -> &[ReactionRecord] {
        &self.reactions
    }
    /// compound structure dictionary in insertion order
    pub fn all_compounds(&self) -> &[CompoundEntry] {
        &self.compounds
    }
    /// common-name formula glossary in insertion order
    pub fn common_names(&self) -> &[CompoundEntry] {
        &self.common_names
    }
    pub fn categories(&self) -> &CategoryRegistry {
        &self.categories
    }
    pub fn all_pathways(&self) -> &[PathwayRecord] {
        &self.pathways
    }

    /// pathways of one category in registration order; unknown category gives nothing
    pub fn pathways_for<'a>(&'a self, category: &str) -> impl Iterator<Item = &'a PathwayRecord> {
        self.pathways.iter().filter(move |p| p.category == category)
    }
    pub fn pathway_count(&self, category: &str) -> usize {
        self.pathways_for(category).count()
    }

    pub fn reaction(&self, name: &str) -> Option<&ReactionRecord> {
        self.reactions.iter().find(|r| r.name == name)
    }
    /// case-insensitive lookup in the structure dictionary
    pub fn compound(&self, name: &str) -> Option<&CompoundEntry> {
        let folded = name.to_lowercase();
        self.compounds
            .iter()
            .find(|c| c.name.to_lowercase() == folded)
    }
    /// reverse lookup: first dictionary or glossary entry written exactly as `encoding`
    pub fn compound_name_for(&self, notation: &Notation) -> Option<&str> {
        let dictionary = match notation {
            Notation::Smiles(_) => &self.compounds,
            Notation::Formula(_) => &self.common_names,
        };
        dictionary
            .iter()
            .find(|c| c.notation == *notation)
            .map(|c| c.name.as_str())
    }

    /// number of reactions per century, ascending by century
    pub fn reactions_by_century(&self) -> Vec<(i32, usize)> {
        let mut centuries: Vec<(i32, usize)> = Vec::new();
        for reaction in &self.reactions {
            let century = reaction.century();
            match centuries.iter_mut().find(|(c, _)| *c == century) {
                Some((_, count)) => *count += 1,
                None => centuries.push((century, 1)),
            }
        }
        centuries.sort_by_key(|(century, _)| *century);
        centuries
    }
}

fn validate_reactions(reactions: &[ReactionRecord]) -> Result<(), KnowledgeBaseError> {
    let mut seen = HashSet::new();
    for reaction in reactions {
        if reaction.name.trim().is_empty() {
            return Err(KnowledgeBaseError::EmptyName("reaction"));
        }
        if !seen.insert(reaction.name.as_str()) {
            return Err(KnowledgeBaseError::DuplicateReaction(reaction.name.clone()));
        }
        if reaction.chemists.iter().all(|c| c.trim().is_empty()) {
            return Err(KnowledgeBaseError::NoChemists(reaction.name.clone()));
        }
        if !(EARLIEST_YEAR..=LATEST_YEAR).contains(&reaction.year) {
            return Err(KnowledgeBaseError::ImplausibleYear {
                reaction: reaction.name.clone(),
                year: reaction.year,
            });
        }
    }
    Ok(())
}

// names are matched case-insensitively, so "Phenol" and "phenol" would collide
fn validate_dictionary(entries: &[CompoundEntry]) -> Result<(), KnowledgeBaseError> {
    let mut seen = HashSet::new();
    for entry in entries {
        if entry.name.trim().is_empty() {
            return Err(KnowledgeBaseError::EmptyName("compound"));
        }
        if !seen.insert(entry.name.to_lowercase()) {
            return Err(KnowledgeBaseError::DuplicateCompound(entry.name.clone()));
        }
    }
    Ok(())
}

fn validate_categories(categories: &CategoryRegistry) -> Result<(), KnowledgeBaseError> {
    let mut seen = HashSet::new();
    for ReactionCategory { id, stems } in categories.iter() {
        if id.trim().is_empty() {
            return Err(KnowledgeBaseError::EmptyName("category"));
        }
        if !seen.insert(id.as_str()) {
            return Err(KnowledgeBaseError::DuplicateCategory(id.clone()));
        }
        // stems are already trimmed and blank ones dropped
        if stems.is_empty() {
            return Err(KnowledgeBaseError::CategoryWithoutStems(id.clone()));
        }
    }
    Ok(())
}

fn validate_pathways(
    pathways: &[PathwayRecord],
    categories: &CategoryRegistry,
) -> Result<(), KnowledgeBaseError> {
    for pathway in pathways {
        if pathway.name.trim().is_empty() {
            return Err(KnowledgeBaseError::EmptyName("pathway"));
        }
        if !categories.contains(&pathway.category) {
            return Err(KnowledgeBaseError::UnregisteredCategory {
                pathway: pathway.name.clone(),
                category: pathway.category.clone(),
            });
        }
        let count = pathway.step_count();
        if !(MIN_PATHWAY_STEPS..=MAX_PATHWAY_STEPS).contains(&count) {
            return Err(KnowledgeBaseError::StepCount {
                pathway: pathway.name.clone(),
                count,
            });
        }
    }
    Ok(())
}
