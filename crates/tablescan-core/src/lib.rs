//! # tablescan-core
//!
//! Core data structures for the tablescan table-extraction engine.
//!
//! This crate provides the in-memory model that decoders build and the
//! extraction engine reads:
//! - [`CellValue`] - Scalar cell values (null, booleans, numbers, strings)
//! - [`CellAddress`] and [`CellRange`] - Cell addressing and rectangular ranges
//! - [`Worksheet`] - A named sparse grid with a declared dimension
//! - [`Workbook`] - An ordered set of uniquely named worksheets
//!
//! ## Example
//!
//! ```rust
//! use tablescan_core::{CellValue, Workbook};
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.worksheet_mut(0).unwrap();
//!
//! // Using string addresses
//! sheet.set_cell_value("A1", "Name").unwrap();
//! sheet.set_cell_value("B1", "Age").unwrap();
//!
//! // Or using row/column indices (0-based)
//! sheet.set_cell_value_at(1, 0, CellValue::string("Alice")).unwrap();
//! sheet.set_cell_value_at(1, 1, CellValue::Number(30.0)).unwrap();
//!
//! assert_eq!(sheet.used_range().to_a1_string(), "A1:B2");
//! ```

pub mod cell;
pub mod error;
pub mod workbook;
pub mod worksheet;

// Re-exports for convenience
pub use cell::{CellAddress, CellRange, CellStorage, CellValue, SharedString, StringPool};
pub use error::{Error, Result};
pub use workbook::Workbook;
pub use worksheet::Worksheet;

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;
