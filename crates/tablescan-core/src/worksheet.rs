//! Worksheet type

use crate::cell::{CellAddress, CellRange, CellStorage, CellValue, SharedString};
use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};

/// A worksheet (single sheet in a workbook)
///
/// Besides its cells, a worksheet carries a *declared dimension*: the extent
/// that bounds every scan over the sheet. Writing a non-null cell grows the
/// dimension to cover it; decoders that know the sheet's recorded extent can
/// also declare it outright with [`Worksheet::set_dimension`].
#[derive(Debug)]
pub struct Worksheet {
    /// Sheet name
    name: String,
    /// Cell storage
    cells: CellStorage,
    /// Declared used range
    dimension: Option<CellRange>,
}

impl Worksheet {
    /// Create a new worksheet with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            cells: CellStorage::new(),
            dimension: None,
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    // === Cell Access ===

    /// Get a cell value by address string (e.g., "A1")
    ///
    /// Returns `None` when the cell is absent from storage.
    pub fn cell(&self, address: &str) -> Result<Option<&CellValue>> {
        let addr = CellAddress::parse(address)?;
        Ok(self.cells.get(addr.row, addr.col))
    }

    /// Get a cell value by row and column indices
    pub fn cell_at(&self, row: u32, col: u16) -> Option<&CellValue> {
        self.cells.get(row, col)
    }

    /// Check whether a cell holds a non-null value
    pub fn is_populated(&self, row: u32, col: u16) -> bool {
        self.cells.get(row, col).is_some()
    }

    /// Set a cell value by address string
    pub fn set_cell_value<V: Into<CellValue>>(&mut self, address: &str, value: V) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.set_cell_value_at(addr.row, addr.col, value)
    }

    /// Set a cell value by indices
    ///
    /// Writing a non-null value grows the declared dimension to cover the cell.
    pub fn set_cell_value_at<V: Into<CellValue>>(
        &mut self,
        row: u32,
        col: u16,
        value: V,
    ) -> Result<()> {
        self.validate_cell_position(row, col)?;
        let value = value.into();
        if !value.is_null() {
            let addr = CellAddress::new(row, col);
            match self.dimension.as_mut() {
                Some(dimension) => dimension.include(addr),
                None => self.dimension = Some(CellRange::single(addr)),
            }
        }
        self.cells.set(row, col, value);
        Ok(())
    }

    /// Intern a string in this sheet's string pool
    pub fn intern<S: AsRef<str>>(&mut self, s: S) -> SharedString {
        self.cells.string_pool_mut().intern(s)
    }

    // === Range Operations ===

    /// Get the declared used range
    ///
    /// Defaults to the single cell `A1` when nothing was declared or written.
    pub fn used_range(&self) -> CellRange {
        self.dimension
            .unwrap_or_else(|| CellRange::single(CellAddress::origin()))
    }

    /// Get the declared dimension, if any
    pub fn dimension(&self) -> Option<CellRange> {
        self.dimension
    }

    /// Declare the sheet's used range explicitly
    pub fn set_dimension(&mut self, range: Option<CellRange>) {
        self.dimension = range;
    }

    /// Validate cell position
    fn validate_cell_position(&self, row: u32, col: u16) -> Result<()> {
        if row >= MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS - 1));
        }
        if col >= MAX_COLS {
            return Err(Error::ColumnOutOfBounds(col as u32, MAX_COLS - 1));
        }
        Ok(())
    }

    /// Get the number of populated cells
    pub fn cell_count(&self) -> usize {
        self.cells.cell_count()
    }

    /// Check if the worksheet has no populated cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
