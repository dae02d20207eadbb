/// Structure service interface, backend selection and text rendering helpers
pub mod structure_api;
/// SMILES reader and the SMILES structure backend
pub mod smiles;
/// Molecular formula reader and the formula structure backend
pub mod formula;
/// Element table, molar masses, Hill formulas
pub mod elements;
mod structure_tests;
