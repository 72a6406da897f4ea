//! Core repair pipeline: classify → format → resolve

pub mod classifier;
pub mod date_parser;
pub mod formatter;
pub mod processor;
pub mod reference;

pub use classifier::{classify, CanonicalDate};
pub use formatter::{format_gene_code, GeneCode};
pub use processor::{correct_value, process_sheet, process_workbook, ProcessReport};
pub use reference::{reference_entries, resolve};
