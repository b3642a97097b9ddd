//! Batch extraction over several decoded files

use log::{debug, warn};
use serde::Serialize;
use tablescan_core::Workbook;

use crate::error::ExtractError;
use crate::materialize::{extract_column_search, extract_dynamic, extract_fixed};
use crate::options::{ExtractMode, ExtractOptions};
use crate::table::{TableOutcome, TableRecord};

/// One input file of a batch
#[derive(Debug)]
pub struct SourceFile {
    /// File name, carried into every table and outcome
    pub name: String,
    /// Decoded workbook, `None` when the file was empty or undecodable
    pub workbook: Option<Workbook>,
}

impl SourceFile {
    /// A decoded file
    pub fn new<S: Into<String>>(name: S, workbook: Workbook) -> Self {
        Self {
            name: name.into(),
            workbook: Some(workbook),
        }
    }

    /// A file without decodable content
    pub fn empty<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            workbook: None,
        }
    }
}

/// Outcome of extracting one file
///
/// Serialized with a `status` tag, e.g.
/// `{"status":"sheet_not_found","fileName":"a.csv","sheetName":"X","error":"Sheet \"X\" not found."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    /// Dynamic mode: every detected table, possibly none
    Tables {
        #[serde(rename = "fileName")]
        file_name: String,
        tables: Vec<TableRecord>,
    },
    /// Fixed modes: the extracted table
    Table {
        #[serde(rename = "fileName")]
        file_name: String,
        table: TableRecord,
    },
    /// Fixed modes: the referenced sheet does not exist
    SheetNotFound {
        #[serde(rename = "fileName")]
        file_name: String,
        #[serde(rename = "sheetName")]
        sheet_name: String,
        error: String,
    },
    /// Fixed modes: the range held no data rows
    NoData {
        #[serde(rename = "fileName")]
        file_name: String,
        message: String,
    },
    /// Fixed modes: the range reference did not parse
    MalformedRange {
        #[serde(rename = "fileName")]
        file_name: String,
        reference: String,
        error: String,
    },
    /// Any other extraction failure
    Failed {
        #[serde(rename = "fileName")]
        file_name: String,
        error: String,
    },
    /// The file had no decodable content
    Skipped {
        #[serde(rename = "fileName")]
        file_name: String,
    },
}

impl FileOutcome {
    /// Name of the file this outcome belongs to
    pub fn file_name(&self) -> &str {
        match self {
            FileOutcome::Tables { file_name, .. }
            | FileOutcome::Table { file_name, .. }
            | FileOutcome::SheetNotFound { file_name, .. }
            | FileOutcome::NoData { file_name, .. }
            | FileOutcome::MalformedRange { file_name, .. }
            | FileOutcome::Failed { file_name, .. }
            | FileOutcome::Skipped { file_name } => file_name,
        }
    }

    /// Check if the outcome is an error
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            FileOutcome::SheetNotFound { .. }
                | FileOutcome::MalformedRange { .. }
                | FileOutcome::Failed { .. }
        )
    }

    /// Tables carried by the outcome
    pub fn tables(&self) -> &[TableRecord] {
        match self {
            FileOutcome::Tables { tables, .. } => tables,
            FileOutcome::Table { table, .. } => std::slice::from_ref(table),
            _ => &[],
        }
    }

    fn from_fixed(file_name: &str, result: Result<TableOutcome, ExtractError>) -> Self {
        let file_name = file_name.to_string();
        match result {
            Ok(TableOutcome::Table(table)) => FileOutcome::Table { file_name, table },
            Ok(TableOutcome::NoData { message }) => FileOutcome::NoData { file_name, message },
            Err(err) => {
                warn!("{}: {}", file_name, err);
                let error = err.to_string();
                match err {
                    ExtractError::SheetNotFound(sheet_name) => FileOutcome::SheetNotFound {
                        file_name,
                        sheet_name,
                        error,
                    },
                    ExtractError::MalformedRange { reference, .. } => {
                        FileOutcome::MalformedRange {
                            file_name,
                            reference,
                            error,
                        }
                    }
                    ExtractError::Core(_) => FileOutcome::Failed { file_name, error },
                }
            }
        }
    }
}

/// Extract one file under `options`
pub fn extract_file(file: &SourceFile, options: &ExtractOptions) -> FileOutcome {
    match &file.workbook {
        Some(workbook) => extract_workbook(workbook, &file.name, options),
        None => {
            debug!("{}: no content, skipping", file.name);
            FileOutcome::Skipped {
                file_name: file.name.clone(),
            }
        }
    }
}

/// Extract one decoded workbook under `options`
pub fn extract_workbook(
    workbook: &Workbook,
    file_name: &str,
    options: &ExtractOptions,
) -> FileOutcome {
    match &options.mode {
        ExtractMode::Dynamic => FileOutcome::Tables {
            file_name: file_name.to_string(),
            tables: extract_dynamic(workbook, file_name),
        },
        ExtractMode::Fixed { reference } => FileOutcome::from_fixed(
            file_name,
            extract_fixed(workbook, reference, file_name, options.auto_header),
        ),
        ExtractMode::ColumnSearch { reference } => FileOutcome::from_fixed(
            file_name,
            extract_column_search(workbook, reference, file_name, options.auto_header),
        ),
    }
}

/// Extract every file of a batch, one outcome per file in input order
///
/// Each file is independent: a failing file yields an error outcome and
/// never stops its siblings. With the `parallel` feature, files are
/// processed concurrently.
pub fn extract_batch(files: &[SourceFile], options: &ExtractOptions) -> Vec<FileOutcome> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        files
            .par_iter()
            .map(|file| extract_file(file, options))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        files.iter().map(|file| extract_file(file, options)).collect()
    }
}
