use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use gfix::cli;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gfix")]
#[command(about = "Fix Excel-converted gene names in data files.")]
#[command(long_about = "gfix - Repair gene symbols that Excel turned into dates

Spreadsheet software silently converts gene symbols such as MARCH1 or SEPT1
into dates (1-Mar, 1-Sep). gfix scans every cell and column header of every
sheet, turns disguised dates back into short codes (MAR-01) and maps known
codes to the current HGNC symbol (MARCHF1, SEPTIN1, DELEC1, ...).

RULES:
  - Numbers, numeric-looking text and symbols starting with ST are never touched
  - Every June date becomes JUN
  - Codes without a known symbol are kept as the code (e.g. JUL-04)

EXAMPLES:
  gfix genes.xlsx                         # writes genes_fixed.xlsx
  gfix genes.xlsx -o corrected.xlsx
  gfix genes.xlsx --dry-run               # preview the change log only
  gfix genes.xlsx --report changes.json   # also save the changes as JSON
  gfix --list-reference                   # show the code -> symbol table")]
#[command(version)]
struct Cli {
    /// Input Excel file path
    #[arg(required_unless_present = "list_reference")]
    input_file: Option<PathBuf>,

    /// Output Excel file path (default: <input>_fixed.xlsx)
    #[arg(short, long, env = "GFIX_OUTPUT")]
    output_file: Option<PathBuf>,

    /// Preview changes without writing the output file
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Show verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Write every change as JSON to this path
    #[arg(long)]
    report: Option<PathBuf>,

    /// Print the date code -> HGNC symbol table and exit
    #[arg(long)]
    list_reference: bool,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "gfix=debug" } else { "gfix=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_tracing(args.verbose);

    if args.list_reference {
        cli::list_reference();
        return Ok(());
    }

    let input = args
        .input_file
        .context("an input file is required")?;

    cli::fix(
        input.clone(),
        args.output_file,
        args.dry_run,
        args.verbose,
        args.report,
    )
    .map_err(|e| {
        eprintln!("{} {}", "Error processing file:".red().bold(), e);
        e
    })
    .with_context(|| format!("failed to fix {}", input.display()))?;

    Ok(())
}
