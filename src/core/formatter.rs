//! Gene code formatting: CanonicalDate → `MMM-DD` (or `JUN`)

use super::classifier::CanonicalDate;
use chrono::Datelike;
use std::fmt;

const MONTH_CODES: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Short date code as genomics tools spell it, e.g. `MAR-01`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GeneCode(String);

impl GeneCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for GeneCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Format a recovered date as a gene code.
///
/// Every June date becomes the bare `JUN`: the June collision is the JUN
/// gene itself, not a family indexed by day.
pub fn format_gene_code(date: CanonicalDate) -> GeneCode {
    if date.month() == 6 {
        return GeneCode("JUN".to_string());
    }

    let abbrev = MONTH_CODES[date.date().month0() as usize];
    GeneCode(format!("{}-{:02}", abbrev, date.day()))
}
