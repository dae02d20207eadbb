//! # SMILES Backend
//!
//! ## Purpose
//! Lightweight reader for SMILES line notation, enough to validate the
//! structures in the compound dictionary and to derive simple descriptors
//! from them without a cheminformatics toolkit.
//!
//! ## Supported Syntax
//! - organic subset atoms `B C N O P S F Cl Br I` and aromatic `b c n o p s`
//! - bracket atoms with isotope, chirality marks, hydrogen count, charge and class
//! - bonds `- = # :` and the directional `/ \` (read as single bonds)
//! - branches `( )`, ring closures `1`..`9` and `%nn`, fragments separated by `.`
//!
//! ## Key Logic Implementation
//! 1. **Default bonds**: two aromatic atoms written side by side (or closing a
//!    ring) share an aromatic bond worth 1.5, everything else is single
//! 2. **Implicit hydrogens**: organic-subset atoms get hydrogens up to the smallest
//!    standard valence not below their bond sum (rounded down); bracket atoms get
//!    exactly the hydrogens written inside the bracket
//! 3. **Rotatable bonds**: single, acyclic, between two atoms that each have at
//!    least two heavy neighbours
use super::elements::{hill_formula, is_element, molar_mass};
use super::structure_api::{StructureService, render_card, title_case};
use crate::KnowledgeBase::kb_api::KnowledgeBase;
use crate::KnowledgeBase::records::Notation;
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SmilesError {
    #[error("Empty SMILES string")]
    Empty,
    #[error("Unexpected character '{ch}' at position {position}")]
    UnexpectedChar { ch: char, position: usize },
    #[error("Unknown atom '{symbol}' at position {position}")]
    UnknownAtom { symbol: String, position: usize },
    #[error("Bracket atom opened at position {0} is not closed")]
    UnclosedBracket(usize),
    #[error("Branch or bond at position {0} has no preceding atom")]
    NoPrecedingAtom(usize),
    #[error("Closing parenthesis at position {0} without an open branch")]
    UnmatchedBranch(usize),
    #[error("Branch left open at the end of the string")]
    UnclosedBranch,
    #[error("Ring bond {0} is never closed")]
    UnclosedRing(u32),
    #[error("Ring bond {0} is closed inconsistently")]
    InvalidRingClosure(u32),
    #[error("Bond symbol at position {0} is not followed by an atom")]
    DanglingBond(usize),
    #[error("Number at position {0} is too large")]
    NumberTooLarge(usize),
}

/// largest isotope, hydrogen count, charge or atom class accepted in a bracket atom
pub const MAX_BRACKET_NUMBER: u32 = 999;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BondOrder {
    Single,
    Double,
    Triple,
    Aromatic,
}

impl BondOrder {
    fn from_symbol(c: char) -> Option<Self> {
        match c {
            '-' | '/' | '\\' => Some(BondOrder::Single),
            '=' => Some(BondOrder::Double),
            '#' => Some(BondOrder::Triple),
            ':' => Some(BondOrder::Aromatic),
            _ => None,
        }
    }
    /// contribution to the valence of each end
    pub fn valence(&self) -> f64 {
        match self {
            BondOrder::Single => 1.0,
            BondOrder::Double => 2.0,
            BondOrder::Triple => 3.0,
            BondOrder::Aromatic => 1.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub symbol: String,
    pub aromatic: bool,
    pub bracket: bool,
    /// hydrogens written inside a bracket atom
    pub explicit_h: u32,
    pub charge: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bond {
    pub from: usize,
    pub to: usize,
    pub order: BondOrder,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Molecule {
    pub atoms: Vec<Atom>,
    pub bonds: Vec<Bond>,
    pub ring_closures: usize,
}

fn standard_valences(symbol: &str) -> &'static [u32] {
    match symbol {
        "B" => &[3],
        "C" => &[4],
        "N" => &[3, 5],
        "O" => &[2],
        "P" => &[3, 5],
        "S" => &[2, 4, 6],
        "F" | "Cl" | "Br" | "I" => &[1],
        _ => &[],
    }
}

fn is_heavy(atom: &Atom) -> bool {
    atom.symbol != "H"
}

fn is_hetero_donor_site(atom: &Atom) -> bool {
    atom.symbol == "N" || atom.symbol == "O"
}

impl Molecule {
    fn bond_sum(&self, atom: usize) -> f64 {
        self.bonds
            .iter()
            .filter(|b| b.from == atom || b.to == atom)
            .map(|b| b.order.valence())
            .sum()
    }

    fn neighbours(&self, atom: usize) -> impl Iterator<Item = usize> + '_ {
        self.bonds.iter().filter_map(move |b| {
            if b.from == atom {
                Some(b.to)
            } else if b.to == atom {
                Some(b.from)
            } else {
                None
            }
        })
    }

    fn heavy_degree(&self, atom: usize) -> usize {
        self.neighbours(atom)
            .filter(|n| is_heavy(&self.atoms[*n]))
            .count()
    }

    /// hydrogens attached to `atom`, implicit or written in a bracket
    pub fn hydrogen_count(&self, atom: usize) -> u32 {
        let a = &self.atoms[atom];
        if a.bracket {
            return a.explicit_h;
        }
        let sum = self.bond_sum(atom).floor() as u32;
        standard_valences(&a.symbol)
            .iter()
            .find(|v| **v >= sum)
            .map(|v| v - sum)
            .unwrap_or(0)
    }

    /// element -> atom count, hydrogens included
    pub fn composition(&self) -> BTreeMap<String, usize> {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for (i, atom) in self.atoms.iter().enumerate() {
            *counts.entry(atom.symbol.clone()).or_insert(0) += 1;
            let h = self.hydrogen_count(i) as usize;
            if h > 0 {
                *counts.entry("H".to_string()).or_insert(0) += h;
            }
        }
        counts
    }

    pub fn net_charge(&self) -> i32 {
        self.atoms
            .iter()
            .fold(0i32, |total, a| total.saturating_add(a.charge))
    }

    /// Hill formula with the net charge appended (`+`, `-`, `+2` ...)
    pub fn formula(&self) -> String {
        let mut formula = hill_formula(&self.composition());
        match self.net_charge() {
            0 => {}
            1 => formula.push('+'),
            -1 => formula.push('-'),
            q if q > 0 => formula.push_str(&format!("+{}", q)),
            q => formula.push_str(&q.to_string()),
        }
        formula
    }

    pub fn molecular_weight(&self) -> Option<f64> {
        molar_mass(&self.composition())
    }

    pub fn heavy_atoms(&self) -> usize {
        self.atoms.iter().filter(|a| is_heavy(a)).count()
    }

    pub fn h_bond_donors(&self) -> usize {
        (0..self.atoms.len())
            .filter(|i| is_hetero_donor_site(&self.atoms[*i]) && self.hydrogen_count(*i) > 0)
            .count()
    }

    pub fn h_bond_acceptors(&self) -> usize {
        self.atoms.iter().filter(|a| is_hetero_donor_site(a)).count()
    }

    /// true if the ends of bond `index` stay connected without it
    fn bond_in_ring(&self, index: usize) -> bool {
        let Bond { from, to, .. } = self.bonds[index];
        let mut visited = vec![false; self.atoms.len()];
        let mut stack = vec![from];
        visited[from] = true;
        while let Some(current) = stack.pop() {
            for (i, bond) in self.bonds.iter().enumerate() {
                if i == index {
                    continue;
                }
                let next = if bond.from == current {
                    bond.to
                } else if bond.to == current {
                    bond.from
                } else {
                    continue;
                };
                if next == to {
                    return true;
                }
                if !visited[next] {
                    visited[next] = true;
                    stack.push(next);
                }
            }
        }
        false
    }

    pub fn rotatable_bonds(&self) -> usize {
        (0..self.bonds.len())
            .filter(|i| {
                let bond = &self.bonds[*i];
                bond.order == BondOrder::Single
                    && is_heavy(&self.atoms[bond.from])
                    && is_heavy(&self.atoms[bond.to])
                    && self.heavy_degree(bond.from) >= 2
                    && self.heavy_degree(bond.to) >= 2
                    && !self.bond_in_ring(*i)
            })
            .count()
    }
}

struct SmilesParser {
    chars: Vec<char>,
    pos: usize,
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
    prev: Option<usize>,
    pending: Option<(BondOrder, usize)>,
    branches: Vec<usize>,
    open_rings: Vec<(u32, usize, Option<BondOrder>)>,
    ring_closures: usize,
}

impl SmilesParser {
    fn new(smiles: &str) -> Self {
        Self {
            chars: smiles.chars().collect(),
            pos: 0,
            atoms: Vec::new(),
            bonds: Vec::new(),
            prev: None,
            pending: None,
            branches: Vec::new(),
            open_rings: Vec::new(),
            ring_closures: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn default_order(&self, a: usize, b: usize) -> BondOrder {
        if self.atoms[a].aromatic && self.atoms[b].aromatic {
            BondOrder::Aromatic
        } else {
            BondOrder::Single
        }
    }

    fn add_atom(&mut self, atom: Atom) {
        let index = self.atoms.len();
        self.atoms.push(atom);
        if let Some(prev) = self.prev {
            let order = match self.pending.take() {
                Some((order, _)) => order,
                None => self.default_order(prev, index),
            };
            self.bonds.push(Bond {
                from: prev,
                to: index,
                order,
            });
        }
        self.prev = Some(index);
    }

    fn parse(mut self) -> Result<Molecule, SmilesError> {
        if self.chars.iter().all(|c| c.is_whitespace()) {
            return Err(SmilesError::Empty);
        }
        while let Some(c) = self.peek() {
            let position = self.pos;
            match c {
                '(' => {
                    let prev = self.prev.ok_or(SmilesError::NoPrecedingAtom(position))?;
                    self.branches.push(prev);
                    self.pos += 1;
                }
                ')' => {
                    if let Some((_, at)) = self.pending {
                        return Err(SmilesError::DanglingBond(at));
                    }
                    let back = self
                        .branches
                        .pop()
                        .ok_or(SmilesError::UnmatchedBranch(position))?;
                    self.prev = Some(back);
                    self.pos += 1;
                }
                '.' => {
                    if let Some((_, at)) = self.pending {
                        return Err(SmilesError::DanglingBond(at));
                    }
                    self.prev = None;
                    self.pos += 1;
                }
                '[' => self.bracket_atom()?,
                '%' | '0'..='9' => self.ring_bond()?,
                c if BondOrder::from_symbol(c).is_some() => {
                    if self.prev.is_none() {
                        return Err(SmilesError::NoPrecedingAtom(position));
                    }
                    if self.pending.is_some() {
                        return Err(SmilesError::UnexpectedChar { ch: c, position });
                    }
                    self.pending = BondOrder::from_symbol(c).map(|order| (order, position));
                    self.pos += 1;
                }
                _ => self.organic_atom()?,
            }
        }
        if let Some((_, at)) = self.pending {
            return Err(SmilesError::DanglingBond(at));
        }
        if !self.branches.is_empty() {
            return Err(SmilesError::UnclosedBranch);
        }
        if let Some((number, _, _)) = self.open_rings.first() {
            return Err(SmilesError::UnclosedRing(*number));
        }
        Ok(Molecule {
            atoms: self.atoms,
            bonds: self.bonds,
            ring_closures: self.ring_closures,
        })
    }

    fn organic_atom(&mut self) -> Result<(), SmilesError> {
        let position = self.pos;
        let c = self.chars[position];
        let next = self.chars.get(position + 1).copied();
        let (symbol, aromatic, width) = match (c, next) {
            ('C', Some('l')) => ("Cl", false, 2),
            ('B', Some('r')) => ("Br", false, 2),
            ('B', _) => ("B", false, 1),
            ('C', _) => ("C", false, 1),
            ('N', _) => ("N", false, 1),
            ('O', _) => ("O", false, 1),
            ('P', _) => ("P", false, 1),
            ('S', _) => ("S", false, 1),
            ('F', _) => ("F", false, 1),
            ('I', _) => ("I", false, 1),
            ('b', _) => ("B", true, 1),
            ('c', _) => ("C", true, 1),
            ('n', _) => ("N", true, 1),
            ('o', _) => ("O", true, 1),
            ('p', _) => ("P", true, 1),
            ('s', _) => ("S", true, 1),
            (ch, _) if ch.is_ascii_alphabetic() => {
                return Err(SmilesError::UnknownAtom {
                    symbol: ch.to_string(),
                    position,
                });
            }
            (ch, _) => return Err(SmilesError::UnexpectedChar { ch, position }),
        };
        self.pos += width;
        self.add_atom(Atom {
            symbol: symbol.to_string(),
            aromatic,
            bracket: false,
            explicit_h: 0,
            charge: 0,
        });
        Ok(())
    }

    fn digits(&mut self) -> Result<Option<u32>, SmilesError> {
        let start = self.pos;
        let mut value: Option<u32> = None;
        while let Some(d) = self.peek().and_then(|c| c.to_digit(10)) {
            let next = value.unwrap_or(0) * 10 + d;
            if next > MAX_BRACKET_NUMBER {
                return Err(SmilesError::NumberTooLarge(start));
            }
            value = Some(next);
            self.pos += 1;
        }
        Ok(value)
    }

    fn bracket_atom(&mut self) -> Result<(), SmilesError> {
        let open = self.pos;
        self.pos += 1;
        // isotope
        self.digits()?;
        let position = self.pos;
        let first = self.peek().ok_or(SmilesError::UnclosedBracket(open))?;
        let second = self.chars.get(position + 1).copied();
        let (symbol, aromatic) = if first.is_ascii_uppercase() {
            let two = second
                .filter(|c| c.is_ascii_lowercase())
                .map(|c| format!("{}{}", first, c));
            match two {
                Some(two) if is_element(&two) => {
                    self.pos += 2;
                    (two, false)
                }
                _ => {
                    self.pos += 1;
                    (first.to_string(), false)
                }
            }
        } else {
            match (first, second) {
                ('s', Some('e')) => {
                    self.pos += 2;
                    ("Se".to_string(), true)
                }
                ('a', Some('s')) => {
                    self.pos += 2;
                    ("As".to_string(), true)
                }
                ('b' | 'c' | 'n' | 'o' | 'p' | 's', _) => {
                    self.pos += 1;
                    (first.to_ascii_uppercase().to_string(), true)
                }
                (ch, _) => {
                    return Err(SmilesError::UnknownAtom {
                        symbol: ch.to_string(),
                        position,
                    });
                }
            }
        };
        if !is_element(&symbol) {
            return Err(SmilesError::UnknownAtom { symbol, position });
        }
        // chirality
        while self.peek() == Some('@') {
            self.pos += 1;
        }
        let mut explicit_h = 0;
        if self.peek() == Some('H') {
            self.pos += 1;
            explicit_h = self.digits()?.unwrap_or(1);
        }
        let mut charge = 0;
        if let Some(sign @ ('+' | '-')) = self.peek() {
            let unit = if sign == '+' { 1 } else { -1 };
            self.pos += 1;
            charge = match self.digits()? {
                Some(n) => unit * n as i32,
                None => {
                    let start = self.pos - 1;
                    let mut total = unit;
                    while self.peek() == Some(sign) {
                        if total.unsigned_abs() >= MAX_BRACKET_NUMBER {
                            return Err(SmilesError::NumberTooLarge(start));
                        }
                        total += unit;
                        self.pos += 1;
                    }
                    total
                }
            };
        }
        // atom class
        if self.peek() == Some(':') {
            self.pos += 1;
            self.digits()?;
        }
        match self.peek() {
            Some(']') => self.pos += 1,
            Some(ch) => {
                return Err(SmilesError::UnexpectedChar {
                    ch,
                    position: self.pos,
                });
            }
            None => return Err(SmilesError::UnclosedBracket(open)),
        }
        self.add_atom(Atom {
            symbol,
            aromatic,
            bracket: true,
            explicit_h,
            charge,
        });
        Ok(())
    }

    fn ring_bond(&mut self) -> Result<(), SmilesError> {
        let position = self.pos;
        let number = if self.chars[position] == '%' {
            let tens = self.chars.get(position + 1).and_then(|c| c.to_digit(10));
            let ones = self.chars.get(position + 2).and_then(|c| c.to_digit(10));
            match (tens, ones) {
                (Some(t), Some(o)) => {
                    self.pos += 3;
                    t * 10 + o
                }
                _ => {
                    return Err(SmilesError::UnexpectedChar {
                        ch: '%',
                        position,
                    });
                }
            }
        } else {
            self.pos += 1;
            self.chars[position].to_digit(10).unwrap_or(0)
        };
        let atom = self.prev.ok_or(SmilesError::NoPrecedingAtom(position))?;
        let written = self.pending.take().map(|(order, _)| order);
        match self.open_rings.iter().position(|(n, _, _)| *n == number) {
            Some(slot) => {
                let (_, partner, opening) = self.open_rings.remove(slot);
                if partner == atom {
                    return Err(SmilesError::InvalidRingClosure(number));
                }
                let order = match (opening, written) {
                    (Some(a), Some(b)) if a != b => {
                        return Err(SmilesError::InvalidRingClosure(number));
                    }
                    (Some(a), _) | (None, Some(a)) => a,
                    (None, None) => self.default_order(partner, atom),
                };
                self.bonds.push(Bond {
                    from: partner,
                    to: atom,
                    order,
                });
                self.ring_closures += 1;
            }
            None => self.open_rings.push((number, atom, written)),
        }
        Ok(())
    }
}

pub fn parse_smiles(smiles: &str) -> Result<Molecule, SmilesError> {
    SmilesParser::new(smiles.trim()).parse()
}

/// `StructureService` for SMILES; names come from the compound dictionary
#[derive(Debug, Clone)]
pub struct SmilesService {
    kb: Arc<KnowledgeBase>,
}

impl SmilesService {
    pub fn new(kb: Arc<KnowledgeBase>) -> Self {
        Self { kb }
    }
}

impl StructureService for SmilesService {
    fn is_valid(&self, encoding: &str) -> bool {
        parse_smiles(encoding).is_ok()
    }

    fn canonical_name(&self, encoding: &str) -> Option<String> {
        self.kb
            .compound_name_for(&Notation::Smiles(encoding.to_string()))
            .map(title_case)
    }

    fn properties(&self, encoding: &str) -> Vec<(String, String)> {
        let Ok(molecule) = parse_smiles(encoding) else {
            return Vec::new();
        };
        let Some(weight) = molecule.molecular_weight() else {
            return Vec::new();
        };
        vec![
            ("Molecular Weight".to_string(), format!("{:.2} g/mol", weight)),
            ("Formula".to_string(), molecule.formula()),
            ("Heavy Atoms".to_string(), molecule.heavy_atoms().to_string()),
            ("Ring Closures".to_string(), molecule.ring_closures.to_string()),
            (
                "Rotatable Bonds".to_string(),
                molecule.rotatable_bonds().to_string(),
            ),
            ("H-Bond Donors".to_string(), molecule.h_bond_donors().to_string()),
            (
                "H-Bond Acceptors".to_string(),
                molecule.h_bond_acceptors().to_string(),
            ),
        ]
    }

    fn render(&self, encoding: &str, size: usize) -> Option<String> {
        let molecule = parse_smiles(encoding).ok()?;
        let name = self
            .canonical_name(encoding)
            .unwrap_or_else(|| "Unknown compound".to_string());
        Some(render_card(
            &[name, encoding.to_string(), molecule.formula()],
            size,
        ))
    }
}
