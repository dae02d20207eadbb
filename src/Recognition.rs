/// Finds dictionary compounds, "Compound X" placeholders and reaction categories in problem text
///
///  # Examples
/// ```
/// use OrgSynth::KnowledgeBase::kb_api::KnowledgeBase;
/// use OrgSynth::Recognition::entity_recognizer::EntityRecognizer;
/// let kb = KnowledgeBase::builtin().unwrap();
/// let found = EntityRecognizer::new(&kb).recognize("Aniline undergoes acetylation to give Compound A.");
/// assert_eq!(found.compounds.labels(), vec!["aniline", "A"]);
/// assert_eq!(found.categories, vec!["acetylation"]);
/// ```
pub mod entity_recognizer;
/// Reaction categories -> synthesis pathways, in caller order
pub mod pathway_resolver;
/// Recognition + pathway lookup + problem classification for one worded problem
pub mod problem_solver;
