use crate::core::{process_workbook, reference_entries, ProcessReport};
use crate::error::FixResult;
use crate::excel::{WorkbookExporter, WorkbookImporter};
use crate::types::ChangeRecord;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

const RULE_WIDTH: usize = 80;

/// Output path used when none is given: `<stem>_fixed.xlsx` next to the input
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    input.with_file_name(format!("{}_fixed.xlsx", stem))
}

/// Execute the fix command, returning the total number of changes
pub fn fix(
    input: PathBuf,
    output: Option<PathBuf>,
    dry_run: bool,
    verbose: bool,
    report: Option<PathBuf>,
) -> FixResult<usize> {
    let output = output.unwrap_or_else(|| default_output_path(&input));

    println!("{}", "🧬 gfix - Repairing date-mangled gene symbols".bold().green());
    println!("   Input:  {}", input.display());
    println!("   Output: {}\n", output.display());

    if dry_run {
        println!(
            "{}",
            "📋 DRY RUN MODE - No changes will be written\n".yellow()
        );
    }

    println!("Processing {}...", input.display());
    let workbook = WorkbookImporter::new(&input).import()?;

    if verbose {
        println!("   Found {} sheets", workbook.sheets.len());
        for sheet in &workbook.sheets {
            println!(
                "   📊 {}: {} columns, {} rows",
                sheet.name.bright_blue(),
                sheet.column_count(),
                sheet.row_count()
            );
        }
    }

    let result = process_workbook(&workbook);
    print_changes(&result);

    if !dry_run {
        WorkbookExporter::new(result.workbook.clone()).export(&output)?;
    }

    if let Some(report_path) = report {
        write_report(&result.changes, &report_path)?;
        if verbose {
            println!("   Change report: {}", report_path.display());
        }
    }

    print_summary(&result, &output, dry_run);
    Ok(result.total_changes())
}

/// Per-sheet change log: location, old value, new value
fn print_changes(result: &ProcessReport) {
    let rule = "-".repeat(RULE_WIDTH);

    for sheet in &result.workbook.sheets {
        println!("\nProcessing sheet: {}", sheet.name.bright_blue().bold());

        let changes: Vec<&ChangeRecord> = result.changes_for(&sheet.name).collect();
        if changes.is_empty() {
            continue;
        }

        println!("Changes in sheet '{}':", sheet.name);
        println!("{}", rule);
        for change in changes {
            println!("Location: {}", change.location);
            println!("Old value: {}", change.old_value.red());
            println!("New value: {}", change.new_value.green());
            println!("{}", rule);
        }
    }
}

fn print_summary(result: &ProcessReport, output: &Path, dry_run: bool) {
    println!("\n{}", "Summary:".bold());
    println!("Total sheets processed: {}", result.sheet_count());
    println!("Total changes made: {}", result.total_changes());
    if dry_run {
        println!("{}", "📋 Dry run complete - no changes written".yellow());
    } else {
        println!("Saved corrected data to {}", output.display());
    }
}

/// Write the change records as pretty-printed JSON
pub fn write_report(changes: &[ChangeRecord], path: &Path) -> FixResult<()> {
    let json = serde_json::to_string_pretty(changes)?;
    fs::write(path, json)?;
    Ok(())
}

/// Print the date code → HGNC symbol table
pub fn list_reference() {
    println!("{}", "🧬 gfix - Reference table".bold().green());
    println!("   {} known date codes\n", reference_entries().len());
    println!("   {} {}", format!("{:<8}", "CODE").bold(), "HGNC SYMBOL".bold());
    for (code, symbol) in reference_entries() {
        println!("   {} {}", format!("{:<8}", code).cyan(), symbol);
    }
    println!("\n   Unlisted codes are kept as-is (e.g. JUL-04); every June date becomes JUN.");
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
