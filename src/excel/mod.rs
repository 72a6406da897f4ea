//! Workbook import/export
//!
//! - Import: any calamine-readable workbook → `Workbook` with typed cells
//! - Export: `Workbook` → .xlsx, one worksheet per sheet

mod exporter;
mod importer;

pub use exporter::WorkbookExporter;
pub use importer::WorkbookImporter;
