//! Workbook exporter - Workbook → .xlsx

use crate::error::{FixError, FixResult};
use crate::types::{CellValue, Sheet, Workbook};
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook as XlsxWorkbook, Worksheet};
use std::path::Path;
use tracing::debug;

/// Writes a Workbook as .xlsx: one worksheet per sheet, headers on row 0, no index column
pub struct WorkbookExporter {
    workbook: Workbook,
}

impl WorkbookExporter {
    /// Create a new exporter
    pub fn new(workbook: Workbook) -> Self {
        Self { workbook }
    }

    /// Save the workbook to `output_path`
    pub fn export(&self, output_path: &Path) -> FixResult<()> {
        let mut xlsx = XlsxWorkbook::new();

        for sheet in &self.workbook.sheets {
            self.export_sheet(&mut xlsx, sheet)?;
        }

        xlsx.save(output_path)
            .map_err(|e| FixError::Export(format!("Failed to save Excel file: {}", e)))?;

        debug!(path = %output_path.display(), sheets = self.workbook.sheets.len(), "saved workbook");
        Ok(())
    }

    /// Export a single sheet to a worksheet
    fn export_sheet(&self, xlsx: &mut XlsxWorkbook, sheet: &Sheet) -> FixResult<()> {
        let worksheet = xlsx.add_worksheet();
        worksheet
            .set_name(&sheet.name)
            .map_err(|e| FixError::Export(format!("Failed to set worksheet name: {}", e)))?;

        for (col_idx, header) in sheet.headers.iter().enumerate() {
            Self::write_cell_value(worksheet, 0, col_idx, header)?;
        }

        for (row_idx, row) in sheet.rows.iter().enumerate() {
            for (col_idx, value) in row.iter().enumerate() {
                Self::write_cell_value(worksheet, row_idx + 1, col_idx, value)?;
            }
        }

        Ok(())
    }

    /// Write a single cell value based on its type
    fn write_cell_value(
        worksheet: &mut Worksheet,
        row: usize,
        col: usize,
        value: &CellValue,
    ) -> FixResult<()> {
        let row = u32::try_from(row)
            .map_err(|_| FixError::Export(format!("Row {} is out of range", row)))?;
        let col = u16::try_from(col)
            .map_err(|_| FixError::Export(format!("Column {} is out of range", col)))?;

        match value {
            CellValue::Empty => {}
            CellValue::Number(n) => {
                worksheet
                    .write_number(row, col, *n)
                    .map_err(|e| FixError::Export(format!("Failed to write number: {}", e)))?;
            }
            CellValue::Text(s) | CellValue::Error(s) => {
                worksheet
                    .write_string(row, col, s)
                    .map_err(|e| FixError::Export(format!("Failed to write text: {}", e)))?;
            }
            CellValue::Bool(b) => {
                worksheet
                    .write_boolean(row, col, *b)
                    .map_err(|e| FixError::Export(format!("Failed to write boolean: {}", e)))?;
            }
            CellValue::DateTime(dt) => {
                let datetime = ExcelDateTime::parse_from_str(
                    &dt.format("%Y-%m-%dT%H:%M:%S").to_string(),
                )
                .map_err(|e| FixError::Export(format!("Failed to convert date: {}", e)))?;
                let format = Format::new().set_num_format("yyyy-mm-dd hh:mm:ss");
                worksheet
                    .write_datetime_with_format(row, col, &datetime, &format)
                    .map_err(|e| FixError::Export(format!("Failed to write date: {}", e)))?;
            }
        }
        Ok(())
    }
}
