//! Workbook-level extraction helpers
//!
//! # Example
//!
//! ```rust
//! use tablescan::prelude::*;
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.worksheet_mut(0).unwrap();
//! sheet.set_cell_value("A1", "Item").unwrap();
//! sheet.set_cell_value("A2", "bolt").unwrap();
//! sheet.set_cell_value("C5", "Other").unwrap();
//! sheet.set_cell_value("C6", 7).unwrap();
//!
//! let regions = workbook.regions();
//! assert_eq!(regions[0].ranges.len(), 2);
//!
//! let tables = workbook.extract_tables("stock.csv");
//! assert_eq!(tables.len(), 2);
//! ```

use crate::{
    detect_ranges, extract_column_search, extract_dynamic, extract_fixed, extract_workbook,
    CellRange, ExtractOptions, ExtractResult, FileOutcome, Grid, TableOutcome, TableRecord,
    Workbook,
};

/// Detected regions of one sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRegions {
    /// Sheet name
    pub sheet_name: String,
    /// Bounding rectangles in discovery order
    pub ranges: Vec<CellRange>,
}

/// Extension trait for Workbook to add extraction methods
pub trait WorkbookExtractExt {
    /// Detected regions of every sheet, in workbook order
    fn regions(&self) -> Vec<SheetRegions>;

    /// Every detected table of every sheet
    fn extract_tables(&self, file_name: &str) -> Vec<TableRecord>;

    /// The table at a `Sheet!A1:B9` reference
    fn extract_range(
        &self,
        reference: &str,
        file_name: &str,
        auto_header: bool,
    ) -> ExtractResult<TableOutcome>;

    /// The table below a header row, down to the first blank row
    fn extract_below_header(
        &self,
        reference: &str,
        file_name: &str,
        auto_header: bool,
    ) -> ExtractResult<TableOutcome>;

    /// Run `options` and wrap the result in a tagged outcome
    fn extract_with_options(&self, file_name: &str, options: &ExtractOptions) -> FileOutcome;
}

impl WorkbookExtractExt for Workbook {
    fn regions(&self) -> Vec<SheetRegions> {
        self.worksheets()
            .map(|worksheet| SheetRegions {
                sheet_name: worksheet.name().to_string(),
                ranges: detect_ranges(&Grid::new(worksheet)),
            })
            .collect()
    }

    fn extract_tables(&self, file_name: &str) -> Vec<TableRecord> {
        extract_dynamic(self, file_name)
    }

    fn extract_range(
        &self,
        reference: &str,
        file_name: &str,
        auto_header: bool,
    ) -> ExtractResult<TableOutcome> {
        extract_fixed(self, reference, file_name, auto_header)
    }

    fn extract_below_header(
        &self,
        reference: &str,
        file_name: &str,
        auto_header: bool,
    ) -> ExtractResult<TableOutcome> {
        extract_column_search(self, reference, file_name, auto_header)
    }

    fn extract_with_options(&self, file_name: &str, options: &ExtractOptions) -> FileOutcome {
        extract_workbook(self, file_name, options)
    }
}
