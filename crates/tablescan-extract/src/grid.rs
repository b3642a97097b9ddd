//! Read-only view over one worksheet's cells, bounded by a range

use tablescan_core::{CellAddress, CellRange, CellValue, Workbook, Worksheet};

use crate::error::ExtractResult;

/// A bounded, read-only view of a worksheet
///
/// Lookups outside the bounds report the cell as absent, so scans that walk
/// off the edge of the view never see cells beyond it.
#[derive(Debug, Clone, Copy)]
pub struct Grid<'a> {
    worksheet: &'a Worksheet,
    bounds: CellRange,
}

impl<'a> Grid<'a> {
    /// View a worksheet within its declared used range
    pub fn new(worksheet: &'a Worksheet) -> Self {
        Self {
            worksheet,
            bounds: worksheet.used_range(),
        }
    }

    /// View a worksheet within explicit bounds
    pub fn with_bounds(worksheet: &'a Worksheet, bounds: CellRange) -> Self {
        Self { worksheet, bounds }
    }

    /// Look a sheet up by name and view it within its used range
    ///
    /// Fails with `SheetNotFound` when the workbook has no such sheet.
    pub fn open(workbook: &'a Workbook, sheet_name: &str) -> ExtractResult<Self> {
        Ok(Self::new(workbook.sheet(sheet_name)?))
    }

    /// The underlying worksheet
    pub fn worksheet(&self) -> &'a Worksheet {
        self.worksheet
    }

    /// Name of the underlying worksheet
    pub fn sheet_name(&self) -> &'a str {
        self.worksheet.name()
    }

    /// The bounds of this view
    pub fn bounds(&self) -> CellRange {
        self.bounds
    }

    /// Check if an address lies within the bounds
    pub fn contains(&self, addr: &CellAddress) -> bool {
        self.bounds.contains(addr)
    }

    /// Get the value at an address, `None` when absent or out of bounds
    pub fn value(&self, addr: CellAddress) -> Option<&'a CellValue> {
        if self.bounds.contains(&addr) {
            self.worksheet.cell_at(addr.row, addr.col)
        } else {
            None
        }
    }

    /// Check if the cell at an address is populated (present and non-null)
    pub fn is_populated(&self, addr: CellAddress) -> bool {
        self.value(addr).is_some_and(|value| !value.is_null())
    }

    /// Iterate over the values of one row across a column span
    ///
    /// The span is read straight from the worksheet, not clipped to the
    /// view's bounds; absent cells yield `None`.
    pub fn row_values(
        &self,
        row: u32,
        start_col: u16,
        end_col: u16,
    ) -> impl Iterator<Item = Option<&'a CellValue>> + 'a {
        let worksheet = self.worksheet;
        (start_col..=end_col).map(move |col| worksheet.cell_at(row, col))
    }

    /// Iterate over all addresses of the view in row-major order
    pub fn addresses(&self) -> impl Iterator<Item = CellAddress> {
        self.bounds.cells()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractError;

    fn sample() -> Workbook {
        let mut wb = Workbook::new();
        let sheet = wb.worksheet_mut(0).unwrap();
        sheet.set_cell_value("B2", "x").unwrap();
        sheet.set_cell_value("C3", 1).unwrap();
        wb
    }

    #[test]
    fn test_open_and_bounds() {
        let wb = sample();
        let grid = Grid::open(&wb, "Sheet1").unwrap();
        assert_eq!(grid.bounds().to_a1_string(), "B2:C3");
        assert_eq!(grid.sheet_name(), "Sheet1");
    }

    #[test]
    fn test_open_missing_sheet() {
        let wb = sample();
        match Grid::open(&wb, "Nope") {
            Err(ExtractError::SheetNotFound(name)) => assert_eq!(name, "Nope"),
            other => panic!("expected SheetNotFound, got {:?}", other.map(|g| g.bounds())),
        }
    }

    #[test]
    fn test_value_lookup() {
        let wb = sample();
        let grid = Grid::open(&wb, "Sheet1").unwrap();

        assert_eq!(
            grid.value(CellAddress::new(1, 1)).and_then(CellValue::as_string),
            Some("x")
        );
        assert!(grid.is_populated(CellAddress::new(2, 2)));
        assert!(!grid.is_populated(CellAddress::new(1, 2)));
    }

    #[test]
    fn test_out_of_bounds_is_absent() {
        let wb = sample();
        let sheet = wb.worksheet(0).unwrap();
        let grid = Grid::with_bounds(sheet, CellRange::parse("A1:B2").unwrap());

        assert!(grid.is_populated(CellAddress::new(1, 1)));
        assert!(grid.value(CellAddress::new(2, 2)).is_none());
    }

    #[test]
    fn test_row_values() {
        let wb = sample();
        let grid = Grid::open(&wb, "Sheet1").unwrap();
        let row: Vec<_> = grid.row_values(1, 0, 2).map(|v| v.cloned()).collect();
        assert_eq!(row, vec![None, Some(CellValue::string("x")), None]);
    }
}
