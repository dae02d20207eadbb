use super::cli_catalogue::{
    browse_compounds_menu, list_all_reactions, pathway_library, search_reactions, show_statistics,
};
use super::cli_problems::{analyze_structure, problem_menu};
use super::cli_settings::settings_menu;
use crate::KnowledgeBase::kb_api::KnowledgeBase;
use std::io::{self, Write};
use std::sync::Arc;

pub fn run_interactive_menu(kb: Arc<KnowledgeBase>) {
    loop {
        show_main_menu();
        let Some(choice) = get_user_input() else {
            println!();
            break;
        };

        match choice.trim() {
            "1" => problem_menu(&kb),
            "2" => search_reactions(&kb),
            "3" => browse_compounds_menu(&kb),
            "4" => list_all_reactions(&kb),
            "5" => analyze_structure(&kb),
            "6" => show_statistics(&kb),
            "7" => pathway_library(&kb),
            "8" => settings_menu(),
            "0" => {
                println!("Goodbye!");
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}
/* colors
Blue (\x1b[34m) - header text
Yellow (\x1b[33m) - menu options
Cyan (\x1b[36m) - prompts
Reset (\x1b[0m) - back to normal after each colored section
*/
fn show_main_menu() {
    println!(
        "\x1b[34m\n OrgSynth: named organic reactions, compound structures\n
    and multi-step synthesis pathways \n \x1b[0m"
    );
    println!("\x1b[33m1. Solve a synthesis problem\x1b[0m");
    println!("\x1b[33m2. Search named reactions\x1b[0m");
    println!("\x1b[33m3. Browse compounds\x1b[0m");
    println!("\x1b[33m4. All named reactions\x1b[0m");
    println!("\x1b[33m5. Analyze a structure\x1b[0m");
    println!("\x1b[33m6. Database statistics\x1b[0m");
    println!("\x1b[33m7. Pathway library\x1b[0m");
    println!("\x1b[33m8. Settings\x1b[0m");
    println!("\x1b[33m0. Exit\x1b[0m");
    prompt("Enter your choice: ");
}

pub(crate) fn prompt(text: &str) {
    print!("\x1b[36m{}\x1b[0m", text);
    let _ = io::stdout().flush();
}

/// one line from stdin; `None` at end of input
pub(crate) fn get_user_input() -> Option<String> {
    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input),
    }
}

/// prompt, then read one trimmed line; end of input reads as empty
pub(crate) fn ask(text: &str) -> String {
    prompt(text);
    get_user_input()
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}
