use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;

//==============================================================================
// Cell Values
//==============================================================================

/// A single cell as read from a workbook.
///
/// The tag is decided at the reader boundary so the classifier can match on
/// it instead of guessing at runtime what a value "really" is.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Missing value (blank cell)
    Empty,
    /// Numeric cell (integers are widened to f64)
    Number(f64),
    /// Text cell
    Text(String),
    /// Date-typed cell
    DateTime(NaiveDateTime),
    /// Boolean cell
    Bool(bool),
    /// Error cell (#N/A, #DIV/0!, ...), kept as its display text
    Error(String),
}

impl CellValue {
    /// Convenience constructor for text cells
    pub fn text(s: impl Into<String>) -> Self {
        CellValue::Text(s.into())
    }

    /// Borrow the text payload, if this is a text cell
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Number(n) => write!(f, "{}", format_number(*n)),
            CellValue::Text(s) => f.write_str(s),
            CellValue::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            CellValue::Bool(b) => f.write_str(if *b { "TRUE" } else { "FALSE" }),
            CellValue::Error(e) => f.write_str(e),
        }
    }
}

/// Format a number for display, dropping the fractional part of integral values
fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{:.0}", n)
    } else {
        n.to_string()
    }
}

//==============================================================================
// Workbook Model
//==============================================================================

/// One worksheet: a header row plus a rectangular grid of data rows
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub headers: Vec<CellValue>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            headers: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Builder-style header setter
    pub fn with_headers(mut self, headers: Vec<CellValue>) -> Self {
        self.headers = headers;
        self
    }

    /// Append a data row, padding it (or the headers) so the grid stays rectangular
    pub fn push_row(&mut self, mut row: Vec<CellValue>) {
        let width = self.column_count().max(row.len());
        row.resize(width, CellValue::Empty);
        if self.headers.len() < width {
            self.headers.resize(width, CellValue::Empty);
            for existing in &mut self.rows {
                existing.resize(width, CellValue::Empty);
            }
        }
        self.rows.push(row);
    }

    /// Number of data rows (header excluded)
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Header text for column `index` (empty string if out of range)
    pub fn header_name(&self, index: usize) -> String {
        self.headers
            .get(index)
            .map(|h| h.to_string())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }
}

/// Ordered collection of sheets
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_sheet(&mut self, sheet: Sheet) {
        self.sheets.push(sheet);
    }

    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }
}

//==============================================================================
// Change Log
//==============================================================================

/// One corrected value, as reported to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeRecord {
    pub sheet: String,
    pub location: String,
    pub old_value: String,
    pub new_value: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_cell_value_display() {
        assert_eq!(CellValue::Empty.to_string(), "");
        assert_eq!(CellValue::Number(42.0).to_string(), "42");
        assert_eq!(CellValue::Number(3.5).to_string(), "3.5");
        assert_eq!(CellValue::text("MARCH1").to_string(), "MARCH1");
        assert_eq!(CellValue::Bool(true).to_string(), "TRUE");

        let dt = NaiveDate::from_ymd_opt(2023, 3, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(CellValue::DateTime(dt).to_string(), "2023-03-01 00:00:00");
    }

    #[test]
    fn test_push_row_keeps_grid_rectangular() {
        let mut sheet = Sheet::new("genes").with_headers(vec![CellValue::text("gene")]);
        sheet.push_row(vec![CellValue::text("TP53"), CellValue::Number(1.0)]);
        sheet.push_row(vec![]);

        assert_eq!(sheet.column_count(), 2);
        assert_eq!(sheet.row_count(), 2);
        assert!(sheet.rows.iter().all(|r| r.len() == 2));
        assert_eq!(sheet.header_name(1), "");
    }

    #[test]
    fn test_workbook_sheet_lookup() {
        let mut workbook = Workbook::new();
        workbook.add_sheet(Sheet::new("a"));
        workbook.add_sheet(Sheet::new("b"));

        assert_eq!(workbook.sheet_names(), vec!["a", "b"]);
        assert!(workbook.sheet("b").is_some());
        assert!(workbook.sheet("c").is_none());
    }
}
