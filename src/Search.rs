/// Case-insensitive filtering of named reactions and compound dictionaries
///
///  # Examples
/// ```
/// use OrgSynth::KnowledgeBase::kb_api::KnowledgeBase;
/// use OrgSynth::Search::search_index::{SearchField, SearchIndex};
/// let kb = KnowledgeBase::builtin().unwrap();
/// let index = SearchIndex::new(&kb);
/// for reaction in index.filter(SearchField::Chemist, Some("fittig")) {
///     println!("{} ({})", reaction.name, reaction.year);
/// }
/// ```
pub mod search_index;
