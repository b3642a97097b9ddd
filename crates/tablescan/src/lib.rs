//! # tablescan
//!
//! Find tables in spreadsheets and read them as header-keyed rows.
//!
//! ## Features
//!
//! - Region detection: 8-connected clusters of populated cells per sheet
//! - Dynamic extraction of every detected table
//! - Fixed-range extraction (`Sheet1!B2:E10`) with optional synthetic headers
//! - Column search: read below a header row until the first blank row
//! - Batch processing with tagged per-file outcomes, serializable to JSON
//! - CSV decoding and CSV output of extracted tables
//!
//! ## Example
//!
//! ```rust
//! use tablescan::prelude::*;
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.worksheet_mut(0).unwrap();
//! sheet.set_cell_value("A1", "Name").unwrap();
//! sheet.set_cell_value("B1", "Age").unwrap();
//! sheet.set_cell_value("A2", "Alice").unwrap();
//! sheet.set_cell_value("B2", 30).unwrap();
//!
//! let tables = workbook.extract_tables("people.xlsx");
//! let alice = tables[0].row(0).unwrap();
//! assert_eq!(alice.get("Age"), Some(&CellValue::Number(30.0)));
//! ```

pub mod extraction;
pub mod prelude;

pub use extraction::{SheetRegions, WorkbookExtractExt};

// Re-export core types
pub use tablescan_core::{
    CellAddress, CellRange, CellValue, Error, Result, SharedString, Workbook, Worksheet,
    MAX_COLS, MAX_ROWS, MAX_SHEET_NAME_LEN,
};

// Re-export the engine
pub use tablescan_extract::{
    detect_ranges, detect_regions, extract_batch, extract_column_search, extract_dynamic,
    extract_file, extract_fixed, extract_sheet_dynamic, extract_workbook, ExtractError,
    ExtractMode, ExtractOptions, ExtractResult, FileOutcome, Grid, HeaderPolicy, Headers, Region,
    SheetRangeRef, SourceFile, TableOutcome, TableRecord, TableRow, NO_DATA_MESSAGE,
};

// Re-export I/O types
pub use tablescan_csv::{
    CsvError, CsvReadOptions, CsvReader, CsvResult, CsvWriteOptions, CsvWriter, LineTerminator,
};

use std::path::Path;

use log::warn;

/// Extension trait for Workbook to add file I/O
pub trait WorkbookExt {
    /// Open a workbook from a file
    fn open<P: AsRef<Path>>(path: P) -> Result<Workbook>;
}

impl WorkbookExt for Workbook {
    fn open<P: AsRef<Path>>(path: P) -> Result<Workbook> {
        let path = path.as_ref();
        let options = read_options_for(path)?;
        CsvReader::read_file(path, &options).map_err(|e| Error::other(e.to_string()))
    }
}

/// Open a file as a batch input, named after the file
///
/// Empty files yield a [`SourceFile`] without a workbook.
pub fn open_source<P: AsRef<Path>>(path: P) -> Result<SourceFile> {
    let path = path.as_ref();
    let options = read_options_for(path)?;
    open_source_with(path, &options)
}

/// Open a file as a batch input with explicit CSV options
pub fn open_source_with<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> Result<SourceFile> {
    CsvReader::read_source(path, options).map_err(|e| Error::other(e.to_string()))
}

/// Open every file of a batch, in input order
///
/// Options default to the ones implied by each file's extension. A file that
/// cannot be opened or decoded is logged and kept as a [`SourceFile`] without
/// a workbook, so its outcome is `skipped` and the other files still run.
pub fn open_sources<P: AsRef<Path>>(
    paths: &[P],
    options: Option<&CsvReadOptions>,
) -> Vec<SourceFile> {
    paths
        .iter()
        .map(|path| {
            let path = path.as_ref();
            let opened = match options {
                Some(options) => open_source_with(path, options),
                None => open_source(path),
            };
            opened.unwrap_or_else(|err| {
                warn!("{}: {}", path.display(), err);
                let name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                SourceFile::empty(name)
            })
        })
        .collect()
}

/// CSV options for a file extension: `.csv` and `.txt` are comma separated,
/// `.tsv` tab separated
fn read_options_for(path: &Path) -> Result<CsvReadOptions> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    match extension.as_deref() {
        Some("csv") | Some("txt") => Ok(CsvReadOptions::default()),
        Some("tsv") => Ok(CsvReadOptions {
            delimiter: b'\t',
            ..Default::default()
        }),
        _ => Err(Error::other(format!(
            "Unsupported file format: {}",
            path.display()
        ))),
    }
}
