#[allow(non_snake_case)]
pub mod KnowledgeBase;
#[allow(non_snake_case)]
pub mod Recognition;
#[allow(non_snake_case)]
pub mod Search;
#[allow(non_snake_case)]
pub mod Structure;
pub mod cli;
pub mod config_manager;
pub mod settings;
