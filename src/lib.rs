//! gfix - repair gene symbols that spreadsheet software turned into dates
//!
//! Excel silently converts symbols such as `MARCH1` or `SEPT1` into dates
//! (`1-Mar`, `1-Sep`). This library finds those disguised dates in every
//! cell of a workbook, turns them back into short date codes (`MAR-01`) and
//! maps known codes to the current HGNC symbol (`MARCHF1`).
//!
//! # Pipeline
//!
//! - [`core::classify`]: is this cell secretly a date?
//! - [`core::format_gene_code`]: date → `MMM-DD` (every June date → `JUN`)
//! - [`core::resolve`]: code → HGNC symbol, or the code itself
//! - [`core::process_workbook`]: apply the above to every header and cell
//!
//! # Example
//!
//! ```no_run
//! use gfix::core::process_workbook;
//! use gfix::excel::{WorkbookExporter, WorkbookImporter};
//! use std::path::Path;
//!
//! let workbook = WorkbookImporter::new("genes.xlsx").import()?;
//! let report = process_workbook(&workbook);
//!
//! println!("Changes: {}", report.total_changes());
//!
//! WorkbookExporter::new(report.workbook).export(Path::new("genes_fixed.xlsx"))?;
//! # Ok::<(), gfix::error::FixError>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;
pub mod excel;
pub mod types;

// Re-export commonly used types
pub use error::{FixError, FixResult};
pub use types::{CellValue, ChangeRecord, Sheet, Workbook};
