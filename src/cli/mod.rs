//! CLI command handlers

pub mod commands;

pub use commands::{default_output_path, fix, list_reference, write_report};
