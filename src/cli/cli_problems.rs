use super::cli_main::{ask, get_user_input, prompt};
use super::cli_tables::{
    category_counts_table, pathway_steps_table, pathways_table, properties_table, recognition_table,
};
use crate::KnowledgeBase::builtin_data::example_problems;
use crate::KnowledgeBase::categories::CategoryRegistry;
use crate::KnowledgeBase::kb_api::KnowledgeBase;
use crate::Recognition::problem_solver::{ProblemSolver, Solution};
use crate::Structure::smiles::SmilesService;
use crate::Structure::structure_api::{StructureService, backend_for, guess_notation};
use crate::config_manager::{AppConfig, with_config};
use log::warn;
use std::sync::Arc;

pub fn problem_menu(kb: &Arc<KnowledgeBase>) {
    loop {
        println!("\n=== Synthesis Problems ===");
        println!("\x1b[33m1. Enter a problem\x1b[0m");
        println!("\x1b[33m2. Choose an example problem\x1b[0m");
        println!("\x1b[33m0. Back to main menu\x1b[0m");
        prompt("Enter your choice: ");
        let Some(choice) = get_user_input() else {
            break;
        };
        match choice.trim() {
            "1" => {
                let text = ask("Problem text: ");
                if text.is_empty() {
                    println!("Please enter a problem.");
                } else {
                    solve_and_print(kb, &text);
                }
            }
            "2" => {
                if let Some(text) = choose_example() {
                    solve_and_print(kb, text);
                }
            }
            "0" => break,
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

fn choose_example() -> Option<&'static str> {
    let examples = example_problems();
    for (i, (title, text)) in examples.iter().enumerate() {
        println!("\x1b[33m{}. {}\x1b[0m\n   {}", i + 1, title, text);
    }
    let choice = ask("Example number: ");
    match choice.parse::<usize>() {
        Ok(n) if (1..=examples.len()).contains(&n) => Some(examples[n - 1].1),
        _ => {
            println!("Invalid choice.");
            None
        }
    }
}

/// Splits a comma separated category list into registered and unknown ids.
pub(crate) fn parse_selection(input: &str, registry: &CategoryRegistry) -> (Vec<String>, Vec<String>) {
    let mut known = Vec::new();
    let mut unknown = Vec::new();
    for id in input.split(',').map(str::trim).filter(|id| !id.is_empty()) {
        if registry.contains(id) {
            known.push(id.to_string());
        } else {
            unknown.push(id.to_string());
        }
    }
    (known, unknown)
}

/// Explicit selection wins; otherwise the recognized categories, and the configured
/// defaults when the text names none.
pub(crate) fn solve_with_fallback<'a>(
    solver: &ProblemSolver<'a>,
    text: &str,
    selection: &[String],
    defaults: &[String],
) -> Solution<'a> {
    if !selection.is_empty() {
        return solver.solve(text, Some(selection));
    }
    let solution = solver.solve(text, None);
    if solution.resolved_categories.is_empty() && !defaults.is_empty() {
        return solver.solve(text, Some(defaults));
    }
    solution
}

fn solve_and_print(kb: &Arc<KnowledgeBase>, text: &str) {
    let config: AppConfig = with_config(|m| m.get_config().clone());
    println!("Categories: {}", kb.categories().ids().join(", "));
    let input = ask("Reaction categories (comma separated, empty = detect from text): ");
    let (selection, unknown) = parse_selection(&input, kb.categories());
    for id in &unknown {
        warn!("ignoring unknown reaction category '{}'", id);
        println!("Unknown category '{}' ignored.", id);
    }

    let solver = ProblemSolver::new(kb);
    let solution = solve_with_fallback(&solver, text, &selection, &config.default_categories);

    println!("\n=== Problem Analysis ===");
    if solution.recognition.compounds.is_empty() {
        println!("No specific compounds identified.");
    } else {
        recognition_table(&solution.recognition).printstd();
    }
    if solution.recognition.categories.is_empty() {
        println!("No specific reactions identified.");
    } else {
        println!("Reactions found: {}", solution.recognition.categories.join(", "));
    }
    let types: Vec<String> = solution.problem_types.iter().map(|t| t.to_string()).collect();
    println!("Problem type: {}", types.join("; "));

    println!("\n=== Pathway Solutions ===");
    category_counts_table(&solution.pathway_counts).printstd();
    if !solution.has_pathways() {
        println!("No pathways found for the selected reaction types.");
        return;
    }
    pathways_table(&solution.pathways, config.show_mechanisms).printstd();
    if config.show_properties {
        let service = SmilesService::new(kb.clone());
        for pathway in &solution.pathways {
            println!("\n{}: {}", pathway.name, pathway.description);
            pathway_steps_table(pathway, &service).printstd();
        }
    }
}

pub fn analyze_structure(kb: &Arc<KnowledgeBase>) {
    println!("\n=== Analyze a Structure ===");
    let encoding = ask("SMILES or molecular formula: ");
    if encoding.is_empty() {
        println!("Nothing to analyze.");
        return;
    }
    let notation = guess_notation(kb, &encoding);
    let backend = backend_for(&notation, kb.clone());
    if !backend.is_valid(&encoding) {
        println!("Invalid structure encoding: {}", encoding);
        return;
    }
    let name = backend
        .canonical_name(&encoding)
        .unwrap_or_else(|| "Unknown compound".to_string());
    println!("{} ({}): {}", encoding, notation.kind(), name);
    let width = with_config(|m| m.get_config().card_width);
    if let Some(card) = backend.render(&encoding, width) {
        println!("{}", card);
    }
    let properties = backend.properties(&encoding);
    if properties.is_empty() {
        println!("Properties could not be computed.");
    } else {
        properties_table(&properties).printstd();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selection() {
        let kb = KnowledgeBase::builtin().unwrap();
        let (known, unknown) = parse_selection(" reduction, , Oxidation,grignard ", kb.categories());
        assert_eq!(known, vec!["reduction", "grignard"]);
        assert_eq!(unknown, vec!["Oxidation"]);
        let (known, unknown) = parse_selection("", kb.categories());
        assert!(known.is_empty() && unknown.is_empty());
    }

    #[test]
    fn test_fallback_order() {
        let kb = KnowledgeBase::builtin().unwrap();
        let solver = ProblemSolver::new(&kb);
        let defaults = vec!["oxidation".to_string()];

        // nothing recognized: configured defaults
        let fallback = solve_with_fallback(&solver, "make something nice", &[], &defaults);
        assert_eq!(fallback.resolved_categories, defaults);
        assert_eq!(fallback.pathways.len(), 3);

        // recognized categories beat defaults
        let recognized =
            solve_with_fallback(&solver, "Aniline undergoes acetylation.", &[], &defaults);
        assert_eq!(recognized.resolved_categories, vec!["acetylation"]);

        // explicit selection beats both
        let chosen = vec!["hydrolysis".to_string()];
        let selected =
            solve_with_fallback(&solver, "Aniline undergoes acetylation.", &chosen, &defaults);
        assert_eq!(selected.resolved_categories, chosen);
    }
}
