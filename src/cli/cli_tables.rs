//! prettytable builders for everything the terminal front end prints
use crate::KnowledgeBase::kb_api::KnowledgeBase;
use crate::KnowledgeBase::records::{CompoundEntry, CompoundStructure, PathwayRecord, ReactionRecord};
use crate::Recognition::entity_recognizer::Recognition;
use crate::Structure::structure_api::StructureService;
use crate::settings::Settings;
use prettytable::{Cell, Row, Table, row};

const UNKNOWN_COMPOUND: &str = "Unknown compound";

pub fn reactions_table(reactions: &[&ReactionRecord], show_mechanisms: bool) -> Table {
    let mut table = Table::new();
    let mut header = vec!["Reaction Name", "Year", "Chemist", "Reactants", "Products"];
    if show_mechanisms {
        header.push("Mechanism");
    }
    table.set_titles(Row::new(header.into_iter().map(Cell::new).collect()));
    for reaction in reactions {
        let mut cells = vec![
            Cell::new(&reaction.name),
            Cell::new(&reaction.year.to_string()),
            Cell::new(&reaction.chemists_joined()),
            Cell::new(&reaction.reactants),
            Cell::new(&reaction.products),
        ];
        if show_mechanisms {
            cells.push(Cell::new(&reaction.mechanism));
        }
        table.add_row(Row::new(cells));
    }
    table
}

pub fn compounds_table(entries: &[&CompoundEntry]) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["Compound", "Notation", "Structure"]);
    for entry in entries {
        table.add_row(row![entry.name, entry.notation.kind(), entry.notation.as_str()]);
    }
    table
}

pub fn recognition_table(recognition: &Recognition) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["Compound", "Structure"]);
    for (label, structure) in recognition.compounds.iter() {
        let shown = match structure {
            CompoundStructure::Known(notation) => notation.as_str().to_string(),
            CompoundStructure::Unknown => "unknown".to_string(),
        };
        table.add_row(row![label, shown]);
    }
    table
}

/// one row per pathway, steps A-C in their own columns
pub fn pathways_table(pathways: &[&PathwayRecord], show_mechanisms: bool) -> Table {
    let mut table = Table::new();
    let mut header = vec!["Category", "Pathway", "Description", "A", "B", "C", "Reagents"];
    if show_mechanisms {
        header.push("Mechanism");
    }
    table.set_titles(Row::new(header.into_iter().map(Cell::new).collect()));
    for pathway in pathways {
        let mut steps = vec![String::new(); 3];
        for (i, (_, smiles)) in pathway.labeled_steps().enumerate() {
            steps[i] = smiles.to_string();
        }
        let mut cells = vec![
            Cell::new(&pathway.category),
            Cell::new(&pathway.name),
            Cell::new(&pathway.description),
            Cell::new(&steps[0]),
            Cell::new(&steps[1]),
            Cell::new(&steps[2]),
            Cell::new(&pathway.reagents.join(", ")),
        ];
        if show_mechanisms {
            cells.push(Cell::new(&pathway.mechanism));
        }
        table.add_row(Row::new(cells));
    }
    table
}

/// structure details of every step of one pathway
pub fn pathway_steps_table<S: StructureService>(pathway: &PathwayRecord, service: &S) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["Step", "SMILES", "Compound", "Formula", "Molecular Weight"]);
    for (label, smiles) in pathway.labeled_steps() {
        let name = service
            .canonical_name(smiles)
            .unwrap_or_else(|| UNKNOWN_COMPOUND.to_string());
        let properties = service.properties(smiles);
        let lookup = |key: &str| {
            properties
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
                .unwrap_or_else(|| "-".to_string())
        };
        table.add_row(row![
            label,
            smiles,
            name,
            lookup("Formula"),
            lookup("Molecular Weight")
        ]);
    }
    table
}

pub fn properties_table(properties: &[(String, String)]) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["Property", "Value"]);
    for (key, value) in properties {
        table.add_row(row![key, value]);
    }
    table
}

/// (category, pathways) pairs
pub fn category_counts_table(counts: &[(String, usize)]) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["Reaction Category", "Pathways"]);
    for (category, count) in counts {
        table.add_row(row![category, count]);
    }
    table
}

pub fn statistics_table(kb: &KnowledgeBase) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["Statistic", "Value"]);
    table.add_row(row!["Named reactions", kb.all_reactions().len()]);
    table.add_row(row!["Compound structures", kb.all_compounds().len()]);
    table.add_row(row!["Common names", kb.common_names().len()]);
    table.add_row(row!["Reaction categories", kb.categories().len()]);
    table.add_row(row!["Synthesis pathways", kb.all_pathways().len()]);
    for (century, count) in kb.reactions_by_century() {
        table.add_row(row![format!("Reactions from the {}s", century), count]);
    }
    table
}

pub fn settings_table(settings: &Settings) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["#", "Setting", "Value"]);
    for (i, (name, value)) in settings.values.iter().enumerate() {
        table.add_row(row![i + 1, name, value]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Recognition::entity_recognizer::EntityRecognizer;
    use crate::Search::search_index::{SearchField, SearchIndex};
    use crate::Structure::smiles::SmilesService;
    use std::sync::Arc;

    fn cell(table: &Table, row: usize, column: usize) -> String {
        table
            .get_row(row)
            .and_then(|r| r.get_cell(column))
            .map(|c| c.get_content())
            .unwrap()
    }

    #[test]
    fn test_reactions_table() {
        let kb = KnowledgeBase::builtin().unwrap();
        let found = SearchIndex::new(&kb).filter(SearchField::Name, Some("arndt"));
        let table = reactions_table(&found, true);
        assert_eq!(table.len(), 1);
        assert_eq!(cell(&table, 0, 1), "1935");
        assert_eq!(cell(&table, 0, 2), "Fritz Arndt, Bernd Eistert");
        assert_eq!(table.get_row(0).unwrap().len(), 6);
        let short = reactions_table(&found, false);
        assert_eq!(short.get_row(0).unwrap().len(), 5);
    }

    #[test]
    fn test_recognition_table_marks_placeholders() {
        let kb = KnowledgeBase::builtin().unwrap();
        let recognition =
            EntityRecognizer::new(&kb).recognize("Aniline undergoes acetylation to give Compound A.");
        let table = recognition_table(&recognition);
        assert_eq!(table.len(), 2);
        assert_eq!(cell(&table, 0, 1), "Nc1ccccc1");
        assert_eq!(cell(&table, 1, 0), "A");
        assert_eq!(cell(&table, 1, 1), "unknown");
    }

    #[test]
    fn test_pathway_tables() {
        let kb = Arc::new(KnowledgeBase::builtin().unwrap());
        let oxidation: Vec<&PathwayRecord> = kb.pathways_for("oxidation").collect();
        let table = pathways_table(&oxidation, false);
        assert_eq!(table.len(), 3);
        assert_eq!(cell(&table, 0, 3), "c1ccccc1CO");
        assert_eq!(cell(&table, 0, 5), "c1ccccc1C(=O)O");

        let service = SmilesService::new(kb.clone());
        let steps = pathway_steps_table(oxidation[0], &service);
        assert_eq!(steps.len(), oxidation[0].step_count());
        assert_eq!(cell(&steps, 0, 0), "A");
        assert_eq!(cell(&steps, 0, 2), "Benzyl Alcohol");
        assert_eq!(cell(&steps, 2, 3), "C7H6O2");
    }

    #[test]
    fn test_statistics_table() {
        let kb = KnowledgeBase::builtin().unwrap();
        let table = statistics_table(&kb);
        // five totals and two centuries
        assert_eq!(table.len(), 7);
        assert_eq!(cell(&table, 0, 1), "23");
        assert_eq!(cell(&table, 5, 0), "Reactions from the 1800s");
        assert_eq!(cell(&table, 5, 1), "17");
    }
}
