//! Substring search over the named-reaction catalogue and the compound lists.
//!
//! Matching is case-insensitive and keeps the original record order. An absent
//! or empty term returns everything; a term made only of spaces is not empty
//! and is matched as it is.
use crate::KnowledgeBase::kb_api::KnowledgeBase;
use crate::KnowledgeBase::records::{CompoundEntry, ReactionRecord};
use log::debug;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Name,
    Chemist,
    Reactants,
}

impl SearchField {
    pub const ALL: [SearchField; 3] = [SearchField::Name, SearchField::Chemist, SearchField::Reactants];

    pub fn label(&self) -> &'static str {
        match self {
            SearchField::Name => "Reaction Name",
            SearchField::Chemist => "Chemist",
            SearchField::Reactants => "Reactants",
        }
    }

    /// text of `record` this field is tested against
    fn haystack(&self, record: &ReactionRecord) -> String {
        match self {
            SearchField::Name => record.name.clone(),
            SearchField::Chemist => record.chemists_joined(),
            SearchField::Reactants => record.reactants.clone(),
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for SearchField {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" | "reaction name" => Ok(SearchField::Name),
            "chemist" | "chemists" => Ok(SearchField::Chemist),
            "reactants" | "reactant" => Ok(SearchField::Reactants),
            other => Err(format!("Unknown search field: {}", other)),
        }
    }
}

fn matches(haystack: &str, folded_term: &str) -> bool {
    haystack.to_lowercase().contains(folded_term)
}

/// reactions whose `field` contains `term`, case-insensitively, in input order
pub fn filter_reactions<'r>(
    records: &'r [ReactionRecord],
    field: SearchField,
    term: Option<&str>,
) -> Vec<&'r ReactionRecord> {
    let term = match term {
        Some(t) if !t.is_empty() => t.to_lowercase(),
        _ => return records.iter().collect(),
    };
    records
        .iter()
        .filter(|r| matches(&field.haystack(r), &term))
        .collect()
}

/// dictionary entries whose name contains `term`, case-insensitively
pub fn filter_compounds<'r>(entries: &'r [CompoundEntry], term: Option<&str>) -> Vec<&'r CompoundEntry> {
    let term = match term {
        Some(t) if !t.is_empty() => t.to_lowercase(),
        _ => return entries.iter().collect(),
    };
    entries.iter().filter(|c| matches(&c.name, &term)).collect()
}

/// read-only search facade over one knowledge base
pub struct SearchIndex<'a> {
    kb: &'a KnowledgeBase,
}

impl<'a> SearchIndex<'a> {
    pub fn new(kb: &'a KnowledgeBase) -> Self {
        Self { kb }
    }

    pub fn filter(&self, field: SearchField, term: Option<&str>) -> Vec<&'a ReactionRecord> {
        let found = filter_reactions(self.kb.all_reactions(), field, term);
        debug!("search {} for {:?}: {} reactions", field, term, found.len());
        found
    }

    pub fn filter_compounds(&self, term: Option<&str>) -> Vec<&'a CompoundEntry> {
        filter_compounds(self.kb.all_compounds(), term)
    }

    pub fn filter_common_names(&self, term: Option<&str>) -> Vec<&'a CompoundEntry> {
        filter_compounds(self.kb.common_names(), term)
    }
}
