//! # Structure Service API
//!
//! ## Purpose
//! Common interface to the structure backends. Every call is total: an invalid
//! or unknown encoding gives `false`, `None` or an empty list instead of an error,
//! so callers can show "unknown" and carry on.
//!
//! ## Main Data Structures
//! - `StructureService`: the four calls every backend answers
//! - `StructureBackend`: enum over the SMILES and formula backends, dispatched with `enum_dispatch`
//! - `StructureKind`: which backend to build
//!
//! ## Usage Pattern
//! ```rust
//! use std::sync::Arc;
//! use OrgSynth::KnowledgeBase::kb_api::KnowledgeBase;
//! use OrgSynth::Structure::structure_api::{create_backend, StructureKind, StructureService};
//! let kb = Arc::new(KnowledgeBase::builtin().unwrap());
//! let smiles = create_backend(StructureKind::Smiles, kb);
//! assert!(smiles.is_valid("CCO"));
//! assert_eq!(smiles.canonical_name("CCO").as_deref(), Some("Ethanol"));
//! ```
use super::formula::FormulaService;
use super::smiles::SmilesService;
use crate::KnowledgeBase::kb_api::KnowledgeBase;
use crate::KnowledgeBase::records::Notation;
use enum_dispatch::enum_dispatch;
use std::sync::Arc;

pub const MIN_CARD_WIDTH: usize = 20;
pub const MAX_CARD_WIDTH: usize = 120;

#[enum_dispatch]
pub trait StructureService {
    fn is_valid(&self, encoding: &str) -> bool;
    /// display name of a known structure, `None` when unknown
    fn canonical_name(&self, encoding: &str) -> Option<String>;
    /// (property, value) pairs, empty when the encoding cannot be read
    fn properties(&self, encoding: &str) -> Vec<(String, String)>;
    /// text depiction `size` characters wide, `None` when the encoding cannot be read
    fn render(&self, encoding: &str, size: usize) -> Option<String>;
}

#[derive(Debug, Clone)]
#[enum_dispatch(StructureService)]
pub enum StructureBackend {
    Smiles(SmilesService),
    Formula(FormulaService),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureKind {
    Smiles,
    Formula,
}

pub fn create_backend(kind: StructureKind, kb: Arc<KnowledgeBase>) -> StructureBackend {
    match kind {
        StructureKind::Smiles => StructureBackend::Smiles(SmilesService::new(kb)),
        StructureKind::Formula => StructureBackend::Formula(FormulaService::new(kb)),
    }
}

/// backend that understands `notation`
pub fn backend_for(notation: &Notation, kb: Arc<KnowledgeBase>) -> StructureBackend {
    match notation {
        Notation::Smiles(_) => create_backend(StructureKind::Smiles, kb),
        Notation::Formula(_) => create_backend(StructureKind::Formula, kb),
    }
}

/// Notation for a string typed by the user. Glossary formulas are formulas, anything
/// SMILES can read is SMILES, then plain formulas; unreadable text is handed to the
/// SMILES backend, which reports it as invalid.
pub fn guess_notation(kb: &KnowledgeBase, encoding: &str) -> Notation {
    let encoding = encoding.trim();
    let as_formula = Notation::Formula(encoding.to_string());
    if kb.compound_name_for(&as_formula).is_some() {
        return as_formula;
    }
    if super::smiles::parse_smiles(encoding).is_ok() {
        return Notation::Smiles(encoding.to_string());
    }
    if super::formula::parse_formula(encoding).is_ok() {
        return as_formula;
    }
    Notation::Smiles(encoding.to_string())
}

/// "benzoic acid" -> "Benzoic Acid"
pub fn title_case(name: &str) -> String {
    let mut titled = String::with_capacity(name.len());
    let mut start_of_word = true;
    for c in name.chars() {
        if c.is_alphabetic() {
            if start_of_word {
                titled.extend(c.to_uppercase());
            } else {
                titled.extend(c.to_lowercase());
            }
            start_of_word = false;
        } else {
            titled.push(c);
            start_of_word = true;
        }
    }
    titled
}

/// boxed text card, one line per entry; long lines are cut to fit
pub fn render_card(lines: &[String], size: usize) -> String {
    let width = size.clamp(MIN_CARD_WIDTH, MAX_CARD_WIDTH);
    let inner = width - 4;
    let border = format!("+{}+", "-".repeat(width - 2));
    let mut card = vec![border.clone()];
    for line in lines {
        let mut text: String = line.chars().take(inner).collect();
        let len = text.chars().count();
        text.push_str(&" ".repeat(inner - len));
        card.push(format!("| {} |", text));
    }
    card.push(border);
    card.join("\n")
}
