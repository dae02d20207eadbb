//! Maps a list of reaction categories to the synthesis pathways filed under them.
//!
//! Categories are visited in the caller's order and each contributes its pathways
//! in registration order. A category that is not registered contributes nothing,
//! so user-supplied lists can be passed as they are. A category requested twice
//! yields its block of pathways twice; callers that want each category once
//! should deduplicate the request themselves.
use crate::KnowledgeBase::kb_api::KnowledgeBase;
use crate::KnowledgeBase::records::PathwayRecord;
use log::debug;

pub struct PathwayResolver<'a> {
    kb: &'a KnowledgeBase,
}

impl<'a> PathwayResolver<'a> {
    pub fn new(kb: &'a KnowledgeBase) -> Self {
        Self { kb }
    }

    pub fn resolve<S: AsRef<str>>(&self, categories: &[S]) -> Vec<&'a PathwayRecord> {
        let mut pathways = Vec::new();
        for category in categories {
            let category = category.as_ref();
            let before = pathways.len();
            pathways.extend(self.kb.pathways_for(category));
            if pathways.len() == before {
                debug!("no pathways for category '{}'", category);
            }
        }
        pathways
    }

    /// (category, number of pathways) for each requested category, in request order
    pub fn pathway_counts<S: AsRef<str>>(&self, categories: &[S]) -> Vec<(String, usize)> {
        categories
            .iter()
            .map(|c| (c.as_ref().to_string(), self.kb.pathway_count(c.as_ref())))
            .collect()
    }
}
