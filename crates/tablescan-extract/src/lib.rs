//! # tablescan-extract
//!
//! Locates tables in decoded workbooks and materializes them as
//! header-keyed rows.
//!
//! - [`Grid`]: bounded read view over a worksheet
//! - [`detect_regions`]: 8-connected clusters of populated cells
//! - [`extract_dynamic`], [`extract_fixed`], [`extract_column_search`]:
//!   the three extraction modes
//! - [`extract_batch`]: per-file tagged outcomes over many files
//!
//! ## Example
//!
//! ```rust
//! use tablescan_core::Workbook;
//! use tablescan_extract::extract_dynamic;
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.worksheet_mut(0).unwrap();
//! sheet.set_cell_value("A1", "Name").unwrap();
//! sheet.set_cell_value("B1", "Age").unwrap();
//! sheet.set_cell_value("A2", "Alice").unwrap();
//! sheet.set_cell_value("B2", "30").unwrap();
//!
//! let tables = extract_dynamic(&workbook, "people.xlsx");
//! assert_eq!(tables.len(), 1);
//! assert_eq!(tables[0].headers(), &["Name", "Age"]);
//! ```

pub mod batch;
pub mod error;
pub mod grid;
pub mod header;
pub mod materialize;
pub mod options;
pub mod reference;
pub mod region;
pub mod table;

pub use batch::{extract_batch, extract_file, extract_workbook, FileOutcome, SourceFile};
pub use error::{ExtractError, ExtractResult};
pub use grid::Grid;
pub use header::{HeaderPolicy, Headers};
pub use materialize::{
    extract_column_search, extract_dynamic, extract_fixed, extract_sheet_dynamic,
};
pub use options::{ExtractMode, ExtractOptions};
pub use reference::SheetRangeRef;
pub use region::{detect_ranges, detect_regions, Region};
pub use table::{TableOutcome, TableRecord, TableRow, NO_DATA_MESSAGE};
