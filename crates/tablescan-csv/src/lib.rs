//! # tablescan-csv
//!
//! Decodes CSV into a single-sheet [`Workbook`](tablescan_core::Workbook) and
//! writes extracted tables back out as CSV.

mod error;
mod options;
mod reader;
mod writer;

pub use error::{CsvError, CsvResult};
pub use options::{CsvReadOptions, CsvWriteOptions, LineTerminator};
pub use reader::CsvReader;
pub use writer::CsvWriter;
