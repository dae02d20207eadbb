/// Reaction, compound and pathway records stored in the knowledge base
pub mod records;
/// Ordered registry of reaction categories and the keyword stems that detect them
pub mod categories;
/// Validated, immutable knowledge base: construction from built-in data or JSON,
/// lookups by name and category, simple statistics
///
///  # Examples
/// ```
/// use OrgSynth::KnowledgeBase::kb_api::KnowledgeBase;
/// let kb = KnowledgeBase::builtin().unwrap();
/// let aniline = kb.compound("Aniline").unwrap();
/// println!("{} -> {}", aniline.name, aniline.notation);
/// for (century, count) in kb.reactions_by_century() {
///     println!("{}s: {} reactions", century, count);
/// }
/// ```
pub mod kb_api;
/// Named reactions, compounds, categories and pathways shipped with the crate
pub mod builtin_data;
