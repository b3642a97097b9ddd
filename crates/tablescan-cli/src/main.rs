//! tablescan CLI - find and extract tables from spreadsheets

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, info};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tablescan::prelude::*;
use tablescan::{extract_batch, open_source, open_source_with, open_sources};

#[derive(Parser)]
#[command(name = "tablescan")]
#[command(author, version, about = "Find and extract tables from spreadsheets")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract tables from one or more files and print them as JSON
    Extract {
        /// Input files (csv, tsv, txt)
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Extract a fixed range such as `Sheet1!B2:E10` instead of
        /// detecting tables
        #[arg(short, long)]
        range: Option<String>,

        /// Treat `--range` as a header row and read down to the first
        /// blank row
        #[arg(long, requires = "range")]
        column_search: bool,

        /// Use `Column_1..Column_N` as headers; the first row is data
        #[arg(short, long)]
        auto_header: bool,

        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,

        /// Field delimiter (default: by file extension)
        #[arg(short, long)]
        delimiter: Option<char>,
    },

    /// List the detected table regions of every sheet
    Regions {
        /// Input file
        input: PathBuf,

        /// Field delimiter (default: by file extension)
        #[arg(short, long)]
        delimiter: Option<char>,
    },

    /// Extract a fixed range and write it as CSV to stdout or a file
    #[command(alias = "csv")]
    ToCsv {
        /// Input file
        input: PathBuf,

        /// Range to extract, such as `Sheet1!B2:E10`
        #[arg(short, long)]
        range: String,

        /// Use `Column_1..Column_N` as headers; the first row is data
        #[arg(short, long)]
        auto_header: bool,

        /// Output CSV file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Extract {
            inputs,
            range,
            column_search,
            auto_header,
            pretty,
            delimiter,
        } => {
            let options = match range {
                Some(reference) if column_search => ExtractOptions::column_search(reference),
                Some(reference) => ExtractOptions::fixed(reference),
                None => ExtractOptions::dynamic(),
            }
            .with_auto_header(auto_header);
            extract(&inputs, &options, pretty, delimiter)
        }
        Commands::Regions { input, delimiter } => list_regions(&input, delimiter),
        Commands::ToCsv {
            input,
            range,
            auto_header,
            output,
        } => to_csv(&input, &range, auto_header, output.as_deref()),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// CSV options for an explicit delimiter; `None` keeps the per-extension
/// defaults
fn delimited(delimiter: Option<char>) -> Result<Option<CsvReadOptions>> {
    match delimiter {
        Some(delimiter) if !delimiter.is_ascii() => {
            bail!("Delimiter must be a single ASCII character, got '{}'", delimiter)
        }
        Some(delimiter) => Ok(Some(CsvReadOptions {
            delimiter: delimiter as u8,
            ..Default::default()
        })),
        None => Ok(None),
    }
}

/// Decode a single file, honoring an explicit delimiter when one is given
fn load(path: &Path, delimiter: Option<char>) -> Result<SourceFile> {
    let source = match delimited(delimiter)? {
        Some(options) => open_source_with(path, &options),
        None => open_source(path),
    };
    source.with_context(|| format!("Failed to open '{}'", path.display()))
}

fn extract(
    inputs: &[PathBuf],
    options: &ExtractOptions,
    pretty: bool,
    delimiter: Option<char>,
) -> Result<()> {
    let read_options = delimited(delimiter)?;
    let files = open_sources(inputs, read_options.as_ref());
    debug!("loaded {} files, mode {:?}", files.len(), options.mode);

    let outcomes = extract_batch(&files, options);
    let failed = outcomes.iter().filter(|o| o.is_error()).count();
    if failed > 0 {
        info!("{} of {} files failed", failed, outcomes.len());
    }

    let json = if pretty {
        serde_json::to_string_pretty(&outcomes)
    } else {
        serde_json::to_string(&outcomes)
    }
    .context("Failed to serialize results")?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json).context("Failed to write to stdout")?;
    Ok(())
}

fn list_regions(input: &Path, delimiter: Option<char>) -> Result<()> {
    let source = load(input, delimiter)?;
    let workbook = match &source.workbook {
        Some(workbook) => workbook,
        None => {
            eprintln!("Warning: '{}' is empty", input.display());
            return Ok(());
        }
    };

    let mut stdout = io::stdout().lock();
    for sheet in workbook.regions() {
        for range in &sheet.ranges {
            writeln!(stdout, "{}\t{}", sheet.sheet_name, range)
                .context("Failed to write to stdout")?;
        }
    }
    Ok(())
}

fn to_csv(input: &Path, range: &str, auto_header: bool, output: Option<&Path>) -> Result<()> {
    let workbook =
        Workbook::open(input).with_context(|| format!("Failed to open '{}'", input.display()))?;
    let file_name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let table = match workbook.extract_range(range, &file_name, auto_header)? {
        TableOutcome::Table(table) => table,
        TableOutcome::NoData { message } => {
            eprintln!("{}", message);
            return Ok(());
        }
    };

    let options = CsvWriteOptions::default();
    match output {
        Some(path) => {
            CsvWriter::write_file(&table, path, &options)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            eprintln!("Wrote {} rows to '{}'", table.row_count(), path.display());
        }
        None => {
            CsvWriter::write(&table, io::stdout().lock(), &options)
                .context("Failed to write to stdout")?;
        }
    }
    Ok(())
}
