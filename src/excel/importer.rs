//! Workbook importer - any calamine-readable file → Workbook

use crate::error::{FixError, FixResult};
use crate::types::{CellValue, Sheet, Workbook};
use calamine::{open_workbook_auto, Data, DataType, Range, Reader};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads every sheet of a workbook, first row as headers, native cell types kept
pub struct WorkbookImporter {
    path: PathBuf,
}

impl WorkbookImporter {
    /// Create a new importer for `path` (.xlsx, .xlsm, .xlsb, .xls or .ods)
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read the whole workbook, keeping sheet order
    pub fn import(&self) -> FixResult<Workbook> {
        if !self.path.exists() {
            return Err(FixError::Import(format!(
                "File not found: {}",
                self.path.display()
            )));
        }

        let mut source = open_workbook_auto(&self.path)
            .map_err(|e| FixError::Import(format!("Failed to open workbook: {}", e)))?;

        let mut workbook = Workbook::new();
        for sheet_name in source.sheet_names() {
            let range = source.worksheet_range(&sheet_name).map_err(|e| {
                FixError::Import(format!("Failed to read sheet '{}': {}", sheet_name, e))
            })?;
            let sheet = Self::read_sheet(&sheet_name, &range);
            debug!(
                sheet = %sheet_name,
                rows = sheet.row_count(),
                columns = sheet.column_count(),
                "imported sheet"
            );
            workbook.add_sheet(sheet);
        }

        Ok(workbook)
    }

    /// Convert a used range into a Sheet anchored at A1.
    ///
    /// calamine ranges start at the first non-empty cell, so leading blank
    /// rows and columns are padded back in to keep cell positions stable.
    fn read_sheet(name: &str, range: &Range<Data>) -> Sheet {
        let mut sheet = Sheet::new(name);
        let Some((start_row, start_col)) = range.start() else {
            return sheet;
        };
        if range.is_empty() {
            return sheet;
        }

        let (_, width) = range.get_size();
        let lead_cols = start_col as usize;
        let total_width = lead_cols + width;

        let mut grid: Vec<Vec<CellValue>> = Vec::with_capacity(start_row as usize + range.height());
        for _ in 0..start_row {
            grid.push(vec![CellValue::Empty; total_width]);
        }
        for row in range.rows() {
            let mut cells = vec![CellValue::Empty; lead_cols];
            cells.extend(row.iter().map(Self::convert_cell));
            grid.push(cells);
        }

        let mut rows = grid.into_iter();
        if let Some(headers) = rows.next() {
            sheet = sheet.with_headers(headers);
        }
        for row in rows {
            sheet.push_row(row);
        }
        sheet
    }

    /// Map a calamine cell onto the tagged CellValue
    fn convert_cell(cell: &Data) -> CellValue {
        match cell {
            Data::Empty => CellValue::Empty,
            Data::Int(i) => CellValue::Number(*i as f64),
            Data::Float(f) => CellValue::Number(*f),
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Bool(b) => CellValue::Bool(*b),
            // calamine applies the workbook's 1900/1904 date system
            Data::DateTime(dt) if !dt.is_duration() => dt
                .as_datetime()
                .map(CellValue::DateTime)
                .unwrap_or(CellValue::Number(dt.as_f64())),
            // Durations are plain numbers as far as dates go
            Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
            // ODS stores dates as ISO strings, sometimes without a time part
            Data::DateTimeIso(s) => cell
                .as_datetime()
                .or_else(|| cell.as_date().and_then(|d| d.and_hms_opt(0, 0, 0)))
                .map(CellValue::DateTime)
                .unwrap_or_else(|| CellValue::Text(s.clone())),
            Data::DurationIso(s) => CellValue::Text(s.clone()),
            Data::Error(e) => CellValue::Error(e.to_string()),
        }
    }
}
