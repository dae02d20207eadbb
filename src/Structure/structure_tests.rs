#[cfg(test)]
mod tests {
    use crate::KnowledgeBase::kb_api::KnowledgeBase;
    use crate::KnowledgeBase::records::Notation;
    use crate::Structure::smiles::{BondOrder, SmilesError, parse_smiles};
    use crate::Structure::structure_api::{
        StructureBackend, StructureKind, StructureService, backend_for, create_backend,
        guess_notation, render_card, title_case,
    };
    use approx::assert_relative_eq;
    use std::sync::Arc;

    fn kb() -> Arc<KnowledgeBase> {
        Arc::new(KnowledgeBase::builtin().unwrap())
    }

    fn property<'p>(props: &'p [(String, String)], key: &str) -> &'p str {
        props
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .unwrap()
    }

    ////////////////////////////////////// SMILES //////////////////////////////////////

    #[test]
    fn test_ethanol() {
        let molecule = parse_smiles("CCO").unwrap();
        assert_eq!(molecule.atoms.len(), 3);
        assert_eq!(molecule.formula(), "C2H6O");
        assert_relative_eq!(molecule.molecular_weight().unwrap(), 46.069, epsilon = 1e-3);
        assert_eq!(molecule.h_bond_donors(), 1);
        assert_eq!(molecule.h_bond_acceptors(), 1);
        assert_eq!(molecule.rotatable_bonds(), 0);
    }

    #[test]
    fn test_benzoic_acid() {
        let molecule = parse_smiles("c1ccccc1C(=O)O").unwrap();
        assert_eq!(molecule.formula(), "C7H6O2");
        assert_relative_eq!(molecule.molecular_weight().unwrap(), 122.123, epsilon = 1e-3);
        assert_eq!(molecule.ring_closures, 1);
        assert_eq!(molecule.heavy_atoms(), 9);
        assert_eq!(molecule.rotatable_bonds(), 1);
        assert_eq!(molecule.h_bond_donors(), 1);
        assert_eq!(molecule.h_bond_acceptors(), 2);
        // ring closure bond between two aromatic atoms
        assert!(
            molecule
                .bonds
                .iter()
                .any(|b| b.from == 0 && b.to == 5 && b.order == BondOrder::Aromatic)
        );
    }

    #[test]
    fn test_charged_bracket_atoms() {
        let molecule = parse_smiles("O=[N+]([O-])c1ccccc1").unwrap();
        assert_eq!(molecule.formula(), "C6H5NO2");
        assert_eq!(molecule.net_charge(), 0);
        assert_relative_eq!(molecule.molecular_weight().unwrap(), 123.111, epsilon = 1e-3);
        assert_eq!(molecule.h_bond_donors(), 0);
        assert_eq!(molecule.h_bond_acceptors(), 3);
        let ammonium = parse_smiles("[NH4+]").unwrap();
        assert_eq!(ammonium.formula(), "H4N+");
        let sulfate = parse_smiles("[O-]S(=O)(=O)[O-]").unwrap();
        assert_eq!(sulfate.formula(), "O4S-2");
    }

    #[test]
    fn test_halogens_and_fragments() {
        assert_eq!(parse_smiles("Brc1ccccc1").unwrap().formula(), "C6H5Br");
        assert_eq!(parse_smiles("CC(=O)Cl").unwrap().formula(), "C2H3ClO");
        let salt = parse_smiles("[Na+].[Cl-]").unwrap();
        assert!(salt.bonds.is_empty());
        assert_eq!(salt.formula(), "ClNa");
        assert_eq!(parse_smiles("C#C").unwrap().formula(), "C2H2");
        assert_eq!(parse_smiles("C1CC%10CC1.C%10").unwrap().ring_closures, 2);
    }

    #[test]
    fn test_invalid_smiles() {
        assert_eq!(parse_smiles(""), Err(SmilesError::Empty));
        assert_eq!(parse_smiles("c1cccc"), Err(SmilesError::UnclosedRing(1)));
        assert_eq!(parse_smiles("C(C"), Err(SmilesError::UnclosedBranch));
        assert_eq!(parse_smiles("CC)"), Err(SmilesError::UnmatchedBranch(2)));
        assert_eq!(parse_smiles("CC="), Err(SmilesError::DanglingBond(2)));
        assert_eq!(parse_smiles("(C)"), Err(SmilesError::NoPrecedingAtom(0)));
        assert!(matches!(
            parse_smiles("CXC"),
            Err(SmilesError::UnknownAtom { .. })
        ));
        assert_eq!(parse_smiles("[NH4+"), Err(SmilesError::UnclosedBracket(0)));
        assert!(parse_smiles("RCOOH").is_err());
    }

    #[test]
    fn test_bracket_numbers_are_bounded() {
        assert_eq!(
            parse_smiles("[CH99999999999]"),
            Err(SmilesError::NumberTooLarge(3))
        );
        assert_eq!(
            parse_smiles("[N+4294967296]"),
            Err(SmilesError::NumberTooLarge(3))
        );
        assert_eq!(
            parse_smiles("[99999999999C]"),
            Err(SmilesError::NumberTooLarge(1))
        );
        let many_plus = format!("[N{}]", "+".repeat(5000));
        assert!(matches!(
            parse_smiles(&many_plus),
            Err(SmilesError::NumberTooLarge(_))
        ));
        // isotopes and charges within range still read
        let ammonium = parse_smiles("[15NH4+]").unwrap();
        assert_eq!(ammonium.net_charge(), 1);

        let kb = kb();
        let smiles = create_backend(StructureKind::Smiles, kb.clone());
        assert!(!smiles.is_valid("[CH99999999999]"));
        assert!(smiles.properties("[CH99999999999]").is_empty());
        assert!(smiles.render("[CH99999999999]", 40).is_none());
        // user-typed input goes through the guessing path without panicking
        let notation = guess_notation(&kb, "[CH99999999999]");
        assert!(!backend_for(&notation, kb.clone()).is_valid(notation.as_str()));
        let notation = guess_notation(&kb, &"(".repeat(200_000));
        assert!(!backend_for(&notation, kb).is_valid(notation.as_str()));
    }

    #[test]
    fn test_whole_dictionary_is_readable() {
        let kb = kb();
        for entry in kb.all_compounds() {
            assert!(
                parse_smiles(entry.notation.as_str()).is_ok(),
                "{} does not parse",
                entry.name
            );
        }
    }

    ////////////////////////////////////// SERVICE //////////////////////////////////////

    #[test]
    fn test_smiles_service() {
        let backend = create_backend(StructureKind::Smiles, kb());
        assert!(matches!(backend, StructureBackend::Smiles(_)));
        assert!(backend.is_valid("c1ccccc1C(=O)O"));
        assert!(!backend.is_valid("c1cc"));
        assert_eq!(
            backend.canonical_name("c1ccccc1C(=O)O").as_deref(),
            Some("Benzoic Acid")
        );
        assert_eq!(backend.canonical_name("CCCCCCCC"), None);
        let props = backend.properties("c1ccccc1C(=O)O");
        assert_eq!(props[0].0, "Molecular Weight");
        assert_eq!(property(&props, "Molecular Weight"), "122.12 g/mol");
        assert_eq!(property(&props, "Formula"), "C7H6O2");
        assert_eq!(property(&props, "Heavy Atoms"), "9");
        assert!(backend.properties("not smiles").is_empty());
    }

    #[test]
    fn test_backend_for_notation() {
        let kb = kb();
        let formula = backend_for(&Notation::Formula("NaCN".to_string()), kb.clone());
        assert!(matches!(formula, StructureBackend::Formula(_)));
        assert_eq!(formula.canonical_name("NaCN").as_deref(), Some("Sodium Cyanide"));
        let smiles = backend_for(&Notation::Smiles("Nc1ccccc1".to_string()), kb);
        assert_eq!(smiles.canonical_name("Nc1ccccc1").as_deref(), Some("Aniline"));
        assert_eq!(
            property(&smiles.properties("Nc1ccccc1"), "Molecular Weight"),
            "93.13 g/mol"
        );
    }

    #[test]
    fn test_guess_notation() {
        let kb = kb();
        assert_eq!(
            guess_notation(&kb, "C6H5OH"),
            Notation::Formula("C6H5OH".to_string())
        );
        assert_eq!(guess_notation(&kb, " CCO "), Notation::Smiles("CCO".to_string()));
        assert_eq!(
            guess_notation(&kb, "Ca(OH)2"),
            Notation::Formula("Ca(OH)2".to_string())
        );
        assert_eq!(guess_notation(&kb, "???"), Notation::Smiles("???".to_string()));
    }

    #[test]
    fn test_render() {
        let backend = create_backend(StructureKind::Smiles, kb());
        let card = backend.render("CCO", 24).unwrap();
        let lines: Vec<&str> = card.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|l| l.chars().count() == 24));
        assert!(lines[1].contains("Ethanol"));
        assert!(lines[3].contains("C2H6O"));
        assert!(backend.render("C(", 24).is_none());
        // width is clamped
        let tiny = render_card(&["a very long compound name indeed".to_string()], 1);
        assert!(tiny.lines().all(|l| l.chars().count() == 20));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("benzoic acid"), "Benzoic Acid");
        assert_eq!(title_case("N-methyl amine"), "N-Methyl Amine");
        assert_eq!(title_case(""), "");
    }
}
