//! # Molecular Formula Backend
//!
//! ## Purpose
//! Reads molecular formulas such as `C6H5OH`, `Ag2O` or `Ca(OH)2` into an element
//! composition and serves the `StructureService` calls for the common-name glossary.
//!
//! ## Key Logic Implementation
//! 1. Element symbols are an uppercase letter plus an optional lowercase letter and
//!    must be in the element table; generic groups (`R`, `X`, `Ar`) are rejected
//! 2. Counts may be ASCII or subscript digits (`CH₂N₂`)
//! 3. Parenthesized groups nest and multiply by the count after the closing bracket
use super::elements::{hill_formula, is_element, molar_mass};
use super::structure_api::{StructureService, render_card, title_case};
use crate::KnowledgeBase::kb_api::KnowledgeBase;
use crate::KnowledgeBase::records::Notation;
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum FormulaError {
    #[error("Empty formula")]
    Empty,
    #[error("Unknown element '{symbol}' at position {position}")]
    UnknownElement { symbol: String, position: usize },
    #[error("Unexpected character '{0}' in formula")]
    UnexpectedChar(char),
    #[error("Unbalanced parentheses in formula")]
    UnbalancedParentheses,
    #[error("Atom count at position {0} is too large")]
    CountTooLarge(usize),
    #[error("Groups nested deeper than {max} levels", max = MAX_NESTING)]
    TooDeep,
}

/// deepest accepted bracket nesting, e.g. `K4[Fe(CN)6]` is 2
pub const MAX_NESTING: usize = 64;

fn digit_value(c: char) -> Option<usize> {
    match c {
        '0'..='9' => Some(c as usize - '0' as usize),
        '₀'..='₉' => Some(c as usize - '₀' as usize),
        _ => None,
    }
}

struct FormulaParser {
    chars: Vec<char>,
    pos: usize,
}

impl FormulaParser {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// count after an element or group, 1 when absent
    fn count(&mut self) -> Result<usize, FormulaError> {
        let start = self.pos;
        let mut value: Option<usize> = None;
        while let Some(d) = self.peek().and_then(digit_value) {
            value = value
                .unwrap_or(0)
                .checked_mul(10)
                .and_then(|v| v.checked_add(d))
                .map(Some)
                .ok_or(FormulaError::CountTooLarge(start))?;
            self.pos += 1;
        }
        Ok(value.unwrap_or(1))
    }

    fn add(
        counts: &mut BTreeMap<String, usize>,
        symbol: String,
        n: usize,
        position: usize,
    ) -> Result<(), FormulaError> {
        let total = counts.entry(symbol).or_insert(0);
        *total = total
            .checked_add(n)
            .ok_or(FormulaError::CountTooLarge(position))?;
        Ok(())
    }

    fn group(&mut self, depth: usize) -> Result<BTreeMap<String, usize>, FormulaError> {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        while let Some(c) = self.peek() {
            match c {
                '(' | '[' => {
                    if depth >= MAX_NESTING {
                        return Err(FormulaError::TooDeep);
                    }
                    self.pos += 1;
                    let inner = self.group(depth + 1)?;
                    match self.peek() {
                        Some(')') | Some(']') => self.pos += 1,
                        _ => return Err(FormulaError::UnbalancedParentheses),
                    }
                    let position = self.pos;
                    let n = self.count()?;
                    for (symbol, k) in inner {
                        let atoms = k
                            .checked_mul(n)
                            .ok_or(FormulaError::CountTooLarge(position))?;
                        Self::add(&mut counts, symbol, atoms, position)?;
                    }
                }
                ')' | ']' => {
                    if depth == 0 {
                        return Err(FormulaError::UnbalancedParentheses);
                    }
                    return Ok(counts);
                }
                c if c.is_ascii_uppercase() => {
                    let position = self.pos;
                    let mut symbol = c.to_string();
                    self.pos += 1;
                    if let Some(next) = self.peek().filter(|n| n.is_ascii_lowercase()) {
                        symbol.push(next);
                        self.pos += 1;
                    }
                    if !is_element(&symbol) {
                        return Err(FormulaError::UnknownElement { symbol, position });
                    }
                    let n = self.count()?;
                    Self::add(&mut counts, symbol, n, position)?;
                }
                other => return Err(FormulaError::UnexpectedChar(other)),
            }
        }
        if depth > 0 {
            return Err(FormulaError::UnbalancedParentheses);
        }
        Ok(counts)
    }
}

/// element -> number of atoms
pub fn parse_formula(formula: &str) -> Result<BTreeMap<String, usize>, FormulaError> {
    let compact: Vec<char> = formula.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Err(FormulaError::Empty);
    }
    let mut parser = FormulaParser {
        chars: compact,
        pos: 0,
    };
    let counts = parser.group(0)?;
    if counts.values().all(|n| *n == 0) {
        return Err(FormulaError::Empty);
    }
    // the total atom count has to fit as well
    if counts
        .values()
        .try_fold(0usize, |total, n| total.checked_add(*n))
        .is_none()
    {
        return Err(FormulaError::CountTooLarge(0));
    }
    Ok(counts)
}

/// `StructureService` for molecular formulas; names come from the formula glossary
#[derive(Debug, Clone)]
pub struct FormulaService {
    kb: Arc<KnowledgeBase>,
}

impl FormulaService {
    pub fn new(kb: Arc<KnowledgeBase>) -> Self {
        Self { kb }
    }
}

impl StructureService for FormulaService {
    fn is_valid(&self, encoding: &str) -> bool {
        parse_formula(encoding).is_ok()
    }

    fn canonical_name(&self, encoding: &str) -> Option<String> {
        self.kb
            .compound_name_for(&Notation::Formula(encoding.to_string()))
            .map(title_case)
    }

    fn properties(&self, encoding: &str) -> Vec<(String, String)> {
        let Ok(composition) = parse_formula(encoding) else {
            return Vec::new();
        };
        let Some(mass) = molar_mass(&composition) else {
            return Vec::new();
        };
        let atoms: usize = composition.values().sum();
        let mass_fractions = composition
            .iter()
            .filter_map(|(symbol, n)| {
                super::elements::atomic_mass(symbol)
                    .map(|m| format!("{} {:.1}%", symbol, 100.0 * m * *n as f64 / mass))
            })
            .collect::<Vec<_>>()
            .join(", ");
        vec![
            ("Formula".to_string(), hill_formula(&composition)),
            ("Molar Mass".to_string(), format!("{:.2} g/mol", mass)),
            ("Atoms".to_string(), atoms.to_string()),
            ("Mass Fractions".to_string(), mass_fractions),
        ]
    }

    fn render(&self, encoding: &str, size: usize) -> Option<String> {
        let composition = parse_formula(encoding).ok()?;
        let name = self
            .canonical_name(encoding)
            .unwrap_or_else(|| "Unknown compound".to_string());
        Some(render_card(
            &[name, encoding.to_string(), hill_formula(&composition)],
            size,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn service() -> FormulaService {
        FormulaService::new(Arc::new(KnowledgeBase::builtin().unwrap()))
    }

    #[test]
    fn test_parse_simple_and_grouped() {
        let phenol = parse_formula("C6H5OH").unwrap();
        assert_eq!(phenol["C"], 6);
        assert_eq!(phenol["H"], 6);
        assert_eq!(phenol["O"], 1);
        let lime = parse_formula("Ca(OH)2").unwrap();
        assert_eq!(lime["O"], 2);
        assert_eq!(lime["H"], 2);
        let nested = parse_formula("K4[Fe(CN)6]").unwrap();
        assert_eq!(nested["C"], 6);
        assert_eq!(nested["N"], 6);
        assert_eq!(nested["Fe"], 1);
        let subscripts = parse_formula("CH₂N₂").unwrap();
        assert_eq!(subscripts["N"], 2);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_formula("  "), Err(FormulaError::Empty));
        assert!(matches!(
            parse_formula("RCOOH"),
            Err(FormulaError::UnknownElement { .. })
        ));
        assert_eq!(
            parse_formula("Ca(OH2"),
            Err(FormulaError::UnbalancedParentheses)
        );
        assert_eq!(parse_formula("OH)"), Err(FormulaError::UnbalancedParentheses));
        assert!(parse_formula("R2C=CR2").is_err());
        assert_eq!(parse_formula("H2O+"), Err(FormulaError::UnexpectedChar('+')));
    }

    #[test]
    fn test_huge_counts_are_errors() {
        assert_eq!(
            parse_formula("C99999999999999999999999"),
            Err(FormulaError::CountTooLarge(1))
        );
        let half = (usize::MAX / 2 + 1).to_string();
        assert!(matches!(
            parse_formula(&format!("(C{})2", half)),
            Err(FormulaError::CountTooLarge(_))
        ));
        assert!(matches!(
            parse_formula(&format!("C{}H{}", half, half)),
            Err(FormulaError::CountTooLarge(_))
        ));
        let service = service();
        assert!(!service.is_valid("C99999999999999999999999"));
        assert!(service.properties("C99999999999999999999999").is_empty());
    }

    #[test]
    fn test_nesting_depth_is_limited() {
        let ok = format!("{}H{}", "(".repeat(MAX_NESTING), ")".repeat(MAX_NESTING));
        assert_eq!(parse_formula(&ok).unwrap()["H"], 1);
        let deep = format!(
            "{}H{}",
            "(".repeat(MAX_NESTING + 1),
            ")".repeat(MAX_NESTING + 1)
        );
        assert_eq!(parse_formula(&deep), Err(FormulaError::TooDeep));
        let runaway = "(".repeat(200_000);
        assert_eq!(parse_formula(&runaway), Err(FormulaError::TooDeep));
        assert!(!service().is_valid(&runaway));
    }

    #[test]
    fn test_service_on_glossary() {
        let service = service();
        assert!(service.is_valid("CH2N2"));
        assert!(!service.is_valid("ArX"));
        assert_eq!(service.canonical_name("CH2N2").as_deref(), Some("Diazomethane"));
        assert_eq!(service.canonical_name("H2O"), None);
        let props = service.properties("NaCN");
        assert_eq!(props[0], ("Formula".to_string(), "CNNa".to_string()));
        assert_eq!(props[1].1, "49.01 g/mol");
        assert_eq!(props[2].1, "3");
        assert!(service.properties("RNH2").is_empty());
    }

    #[test]
    fn test_render_card() {
        let service = service();
        let card = service.render("C6H5OH", 30).unwrap();
        assert!(card.contains("Phenol"));
        assert!(card.contains("C6H6O"));
        assert!(service.render("RX", 30).is_none());
        let mass = molar_mass(&parse_formula("C6H5OH").unwrap()).unwrap();
        assert_relative_eq!(mass, 94.113, epsilon = 1e-2);
    }
}
