//! Sheet processing: classify → format → resolve over every header and cell

use super::classifier::classify;
use super::formatter::format_gene_code;
use super::reference::resolve;
use crate::types::{CellValue, ChangeRecord, Sheet, Workbook};
use tracing::{debug, info};

/// Result of one processing run
#[derive(Debug, Clone, Default)]
pub struct ProcessReport {
    /// Corrected workbook (same sheets, same shape)
    pub workbook: Workbook,
    /// Every change, in sheet then header then row-major order
    pub changes: Vec<ChangeRecord>,
}

impl ProcessReport {
    pub fn total_changes(&self) -> usize {
        self.changes.len()
    }

    pub fn sheet_count(&self) -> usize {
        self.workbook.sheets.len()
    }

    /// Changes recorded for one sheet
    pub fn changes_for<'a>(&'a self, sheet: &'a str) -> impl Iterator<Item = &'a ChangeRecord> {
        self.changes.iter().filter(move |c| c.sheet == sheet)
    }
}

/// Corrected text for `value`, or `None` when it is not a disguised date.
///
/// Text that already reads exactly like its correction (an unmapped code
/// such as `JUL-04`) is left alone, so running twice changes nothing.
pub fn correct_value(value: &CellValue) -> Option<String> {
    let date = classify(value)?;
    let fixed = resolve(&format_gene_code(date));
    if value.as_text() == Some(fixed.as_str()) {
        return None;
    }
    Some(fixed)
}

/// Process every sheet in order
pub fn process_workbook(workbook: &Workbook) -> ProcessReport {
    let mut report = ProcessReport::default();

    for sheet in &workbook.sheets {
        let (fixed, changes) = process_sheet(sheet);
        info!(sheet = %sheet.name, changes = changes.len(), "processed sheet");
        report.workbook.add_sheet(fixed);
        report.changes.extend(changes);
    }

    report
}

/// Process one sheet: headers first, then cells in row-major order
pub fn process_sheet(sheet: &Sheet) -> (Sheet, Vec<ChangeRecord>) {
    let mut fixed = sheet.clone();
    let mut changes = Vec::new();

    for (index, header) in sheet.headers.iter().enumerate() {
        if let Some(new_value) = correct_value(header) {
            changes.push(ChangeRecord {
                sheet: sheet.name.clone(),
                location: format!("Column header {}", index),
                old_value: header.to_string(),
                new_value: new_value.clone(),
            });
            fixed.headers[index] = CellValue::Text(new_value);
        }
    }

    // Cell locations name the already-corrected header
    let header_names: Vec<String> = (0..fixed.column_count())
        .map(|j| fixed.header_name(j))
        .collect();

    for (i, row) in sheet.rows.iter().enumerate() {
        for (j, cell) in row.iter().enumerate() {
            let Some(new_value) = correct_value(cell) else {
                continue;
            };
            let header = header_names.get(j).map(String::as_str).unwrap_or("");
            debug!(row = i, column = j, old = %cell, new = %new_value, "corrected cell");
            changes.push(ChangeRecord {
                sheet: sheet.name.clone(),
                location: format!("Row {}, Column {} ({})", i, j, header),
                old_value: cell.to_string(),
                new_value: new_value.clone(),
            });
            fixed.rows[i][j] = CellValue::Text(new_value);
        }
    }

    (fixed, changes)
}
