use OrgSynth::KnowledgeBase::kb_api::{KnowledgeBase, KnowledgeBaseError};
use OrgSynth::cli::cli_main::run_interactive_menu;
use OrgSynth::config_manager::with_config;
use log::{LevelFilter, error, info};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::process::ExitCode;
use std::sync::Arc;

fn init_logger(level: LevelFilter) {
    if let Err(e) = TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto) {
        eprintln!("logger already initialized: {}", e);
    }
}

/// configured JSON knowledge base, or the built-in one if none is configured or it fails to load
fn load_knowledge_base(path: Option<&str>) -> Result<KnowledgeBase, KnowledgeBaseError> {
    match path {
        Some(path) => KnowledgeBase::from_json_file(path).or_else(|e| {
            error!("cannot load knowledge base from {}: {}", path, e);
            info!("falling back to the built-in knowledge base");
            KnowledgeBase::builtin()
        }),
        None => KnowledgeBase::builtin(),
    }
}

fn main() -> ExitCode {
    let (level, kb_file) = with_config(|manager| {
        (
            manager.level_filter(),
            manager.get_config().knowledge_base_file.clone(),
        )
    });
    init_logger(level);
    match load_knowledge_base(kb_file.as_deref()) {
        Ok(kb) => {
            run_interactive_menu(Arc::new(kb));
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
