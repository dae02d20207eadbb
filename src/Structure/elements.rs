/// Atomic masses and Hill-order formula writing shared by the structure backends
use std::collections::BTreeMap;

pub struct Element {
    pub symbol: &'static str,
    pub atomic_mass: f64,
}

// elements that occur in organic reagents and the glossary formulas
pub const ELEMENTS: &[Element] = &[
    Element { symbol: "H", atomic_mass: 1.008 },
    Element { symbol: "He", atomic_mass: 4.0026 },
    Element { symbol: "Li", atomic_mass: 6.94 },
    Element { symbol: "Be", atomic_mass: 9.0122 },
    Element { symbol: "B", atomic_mass: 10.81 },
    Element { symbol: "C", atomic_mass: 12.011 },
    Element { symbol: "N", atomic_mass: 14.007 },
    Element { symbol: "O", atomic_mass: 15.999 },
    Element { symbol: "F", atomic_mass: 18.998 },
    Element { symbol: "Ne", atomic_mass: 20.180 },
    Element { symbol: "Na", atomic_mass: 22.990 },
    Element { symbol: "Mg", atomic_mass: 24.305 },
    Element { symbol: "Al", atomic_mass: 26.982 },
    Element { symbol: "Si", atomic_mass: 28.085 },
    Element { symbol: "P", atomic_mass: 30.974 },
    Element { symbol: "S", atomic_mass: 32.06 },
    Element { symbol: "Cl", atomic_mass: 35.45 },
    Element { symbol: "Ar", atomic_mass: 39.948 },
    Element { symbol: "K", atomic_mass: 39.098 },
    Element { symbol: "Ca", atomic_mass: 40.078 },
    Element { symbol: "Cr", atomic_mass: 51.996 },
    Element { symbol: "Mn", atomic_mass: 54.938 },
    Element { symbol: "Fe", atomic_mass: 55.845 },
    Element { symbol: "Co", atomic_mass: 58.933 },
    Element { symbol: "Ni", atomic_mass: 58.693 },
    Element { symbol: "Cu", atomic_mass: 63.546 },
    Element { symbol: "Zn", atomic_mass: 65.38 },
    Element { symbol: "As", atomic_mass: 74.922 },
    Element { symbol: "Se", atomic_mass: 78.971 },
    Element { symbol: "Br", atomic_mass: 79.904 },
    Element { symbol: "Pd", atomic_mass: 106.42 },
    Element { symbol: "Ag", atomic_mass: 107.868 },
    Element { symbol: "Sn", atomic_mass: 118.71 },
    Element { symbol: "I", atomic_mass: 126.904 },
    Element { symbol: "Pt", atomic_mass: 195.084 },
    Element { symbol: "Hg", atomic_mass: 200.592 },
    Element { symbol: "Pb", atomic_mass: 207.2 },
];

pub fn atomic_mass(symbol: &str) -> Option<f64> {
    ELEMENTS
        .iter()
        .find(|e| e.symbol == symbol)
        .map(|e| e.atomic_mass)
}

pub fn is_element(symbol: &str) -> bool {
    atomic_mass(symbol).is_some()
}

/// molar mass in g/mol; `None` if any symbol is not in the table
pub fn molar_mass(composition: &BTreeMap<String, usize>) -> Option<f64> {
    composition
        .iter()
        .map(|(symbol, count)| atomic_mass(symbol).map(|m| m * *count as f64))
        .sum()
}

/// Hill system: C first, then H, then the rest alphabetically; without carbon
/// everything is alphabetical
pub fn hill_formula(composition: &BTreeMap<String, usize>) -> String {
    let mut formula = String::new();
    let mut push = |symbol: &str, count: usize| {
        if count == 0 {
            return;
        }
        formula.push_str(symbol);
        if count > 1 {
            formula.push_str(&count.to_string());
        }
    };
    let has_carbon = composition.get("C").is_some_and(|c| *c > 0);
    if has_carbon {
        push("C", composition["C"]);
        if let Some(h) = composition.get("H") {
            push("H", *h);
        }
    }
    // BTreeMap iterates alphabetically
    for (symbol, count) in composition {
        if has_carbon && (symbol == "C" || symbol == "H") {
            continue;
        }
        push(symbol, *count);
    }
    formula
}
