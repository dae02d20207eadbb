use super::cli_main::{ask, get_user_input, prompt};
use super::cli_tables::{
    category_counts_table, compounds_table, pathways_table, reactions_table, statistics_table,
};
use crate::KnowledgeBase::kb_api::KnowledgeBase;
use crate::Recognition::pathway_resolver::PathwayResolver;
use crate::Search::search_index::{SearchField, SearchIndex};
use crate::config_manager::with_config;

fn term_or_none(term: &str) -> Option<&str> {
    if term.is_empty() { None } else { Some(term) }
}

pub fn search_reactions(kb: &KnowledgeBase) {
    println!("\n=== Search Named Reactions ===");
    for (i, field) in SearchField::ALL.iter().enumerate() {
        println!("\x1b[33m{}. {}\x1b[0m", i + 1, field);
    }
    let field = match ask("Search by: ").as_str() {
        "1" | "" => SearchField::Name,
        "2" => SearchField::Chemist,
        "3" => SearchField::Reactants,
        other => match other.parse::<SearchField>() {
            Ok(field) => field,
            Err(e) => {
                println!("{}", e);
                return;
            }
        },
    };
    let term = ask("Search term (empty lists all): ");
    let found = SearchIndex::new(kb).filter(field, term_or_none(&term));
    if found.is_empty() {
        println!("No reactions found.");
        return;
    }
    println!("Found {} reaction(s):", found.len());
    let show_mechanisms = with_config(|m| m.get_config().show_mechanisms);
    reactions_table(&found, show_mechanisms).printstd();
}

pub fn list_all_reactions(kb: &KnowledgeBase) {
    let all: Vec<_> = kb.all_reactions().iter().collect();
    println!("\n=== All Named Reactions ({}) ===", all.len());
    let show_mechanisms = with_config(|m| m.get_config().show_mechanisms);
    reactions_table(&all, show_mechanisms).printstd();
}

pub fn browse_compounds_menu(kb: &KnowledgeBase) {
    let index = SearchIndex::new(kb);
    loop {
        println!("\n=== Browse Compounds ===");
        println!("\x1b[33m1. Common names (formulas)\x1b[0m");
        println!("\x1b[33m2. Compound structures (SMILES)\x1b[0m");
        println!("\x1b[33m0. Back to main menu\x1b[0m");
        prompt("Enter your choice: ");
        let Some(choice) = get_user_input() else {
            break;
        };
        let entries = match choice.trim() {
            "1" => index.filter_common_names(term_or_none(&ask("Filter (empty lists all): "))),
            "2" => index.filter_compounds(term_or_none(&ask("Filter (empty lists all): "))),
            "0" => break,
            _ => {
                println!("Invalid choice. Please try again.");
                continue;
            }
        };
        if entries.is_empty() {
            println!("No compounds found.");
        } else {
            compounds_table(&entries).printstd();
        }
    }
}

pub fn show_statistics(kb: &KnowledgeBase) {
    println!("\n=== Database Statistics ===");
    statistics_table(kb).printstd();
}

pub fn pathway_library(kb: &KnowledgeBase) {
    println!("\n=== Pathway Library ===");
    let resolver = PathwayResolver::new(kb);
    let ids = kb.categories().ids();
    category_counts_table(&resolver.pathway_counts(&ids)).printstd();
    let category = ask("Category to show (empty shows all): ");
    let pathways = if category.is_empty() {
        resolver.resolve(&ids)
    } else {
        resolver.resolve(&[category.as_str()])
    };
    if pathways.is_empty() {
        println!("No pathways for '{}'.", category);
        return;
    }
    let show_mechanisms = with_config(|m| m.get_config().show_mechanisms);
    pathways_table(&pathways, show_mechanisms).printstd();
}
