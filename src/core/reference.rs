//! Date code → HGNC symbol reference table
//!
//! The entries are historical nomenclature facts, not a formula. Codes with
//! an extra trailing digit (MAR-12..16, MAR-31) are a second autocorrect
//! artifact that appended a number to the month-day code.

use super::formatter::GeneCode;

/// Known date codes and the symbol each one should have been
const REFERENCE_MAP: &[(&str, &str)] = &[
    ("MAR-01", "MARCHF1"), // could also be MTARC1
    ("MAR-12", "MARCHF1"),
    ("MAR-13", "MARCHF1"),
    ("MAR-14", "MARCHF1"),
    ("MAR-15", "MARCHF1"),
    ("MAR-16", "MARCHF1"),
    ("MAR-02", "MARCHF2"), // could also be MTARC2
    ("MAR-03", "MARCHF3"),
    ("MAR-31", "MARCHF3"),
    ("MAR-04", "MARCHF4"),
    ("MAR-05", "MARCHF5"),
    ("MAR-06", "MARCHF6"),
    ("MAR-07", "MARCHF7"),
    ("MAR-08", "MARCHF8"),
    ("MAR-09", "MARCHF9"),
    ("MAR-10", "MARCHF10"),
    ("MAR-11", "MARCHF11"),
    ("SEP-01", "SEPTIN1"),
    ("SEP-02", "SEPTIN2"),
    ("SEP-03", "SEPTIN3"),
    ("SEP-04", "SEPTIN4"),
    ("SEP-05", "SEPTIN5"),
    ("SEP-06", "SEPTIN6"),
    ("SEP-07", "SEPTIN7"),
    ("SEP-08", "SEPTIN8"),
    ("SEP-09", "SEPTIN9"),
    ("SEP-10", "SEPTIN10"),
    ("SEP-11", "SEPTIN11"),
    ("SEP-12", "SEPTIN12"),
    ("SEP-13", "SEPTIN7P2"),
    ("SEP-14", "SEPTIN14"),
    ("SEP-15", "SELENOF"),
    ("DEC-01", "DELEC1"),
];

/// Every known (code, symbol) pair, in table order
pub fn reference_entries() -> &'static [(&'static str, &'static str)] {
    REFERENCE_MAP
}

/// Exact-match lookup of a code string
pub fn lookup(code: &str) -> Option<&'static str> {
    REFERENCE_MAP
        .iter()
        .find(|(key, _)| *key == code)
        .map(|(_, symbol)| *symbol)
}

/// Resolve a code to its HGNC symbol, or return the code itself when unmapped
pub fn resolve(code: &GeneCode) -> String {
    lookup(code.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| code.to_string())
}
