//! Cell storage implementation
//!
//! This module provides sparse storage for spreadsheet cells.
//! Only populated cells are stored, using a row-based BTreeMap structure.

use std::collections::BTreeMap;

use super::{CellValue, StringPool};

/// Sparse row-based storage for worksheet cells
///
/// - Uses BTreeMap for ordered, row-major iteration
/// - Only stores populated cells; writing [`CellValue::Null`] removes the cell
///
/// Structure: `BTreeMap<row_index, BTreeMap<col_index, CellValue>>`
#[derive(Debug, Default)]
pub struct CellStorage {
    /// Row index → column map
    rows: BTreeMap<u32, BTreeMap<u16, CellValue>>,

    /// Shared string pool for deduplication
    pub(crate) string_pool: StringPool,
}

impl CellStorage {
    /// Create a new empty cell storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a cell value
    pub fn get(&self, row: u32, col: u16) -> Option<&CellValue> {
        self.rows.get(&row).and_then(|r| r.get(&col))
    }

    /// Set a cell value
    ///
    /// Null values are not stored; setting one removes the cell.
    pub fn set(&mut self, row: u32, col: u16, value: CellValue) {
        if value.is_null() {
            self.remove(row, col);
        } else {
            self.rows.entry(row).or_default().insert(col, value);
        }
    }

    /// Remove a cell
    pub fn remove(&mut self, row: u32, col: u16) -> Option<CellValue> {
        let row_map = self.rows.get_mut(&row)?;
        let result = row_map.remove(&col);

        // Clean up empty rows
        if row_map.is_empty() {
            self.rows.remove(&row);
        }

        result
    }

    /// Get the number of stored cells
    pub fn cell_count(&self) -> usize {
        self.rows.values().map(|r| r.len()).sum()
    }

    /// Check if storage is empty
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get the string pool mutably
    pub fn string_pool_mut(&mut self) -> &mut StringPool {
        &mut self.string_pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let mut storage = CellStorage::new();

        storage.set(0, 0, CellValue::Number(42.0));
        assert_eq!(storage.get(0, 0).and_then(CellValue::as_number), Some(42.0));

        // Get non-existent
        assert!(storage.get(1, 1).is_none());
    }

    #[test]
    fn test_null_cells_not_stored() {
        let mut storage = CellStorage::new();

        storage.set(0, 0, CellValue::Number(42.0));
        assert_eq!(storage.cell_count(), 1);

        storage.set(0, 0, CellValue::Null);
        assert_eq!(storage.cell_count(), 0);
        assert!(storage.get(0, 0).is_none());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_empty_string_is_stored() {
        let mut storage = CellStorage::new();
        storage.set(2, 3, CellValue::string(""));
        assert_eq!(storage.cell_count(), 1);
    }

    #[test]
    fn test_remove_drops_empty_rows() {
        let mut storage = CellStorage::new();

        storage.set(1, 0, CellValue::Number(3.0));
        storage.set(0, 1, CellValue::Number(2.0));
        assert_eq!(storage.remove(1, 0), Some(CellValue::Number(3.0)));
        assert_eq!(storage.remove(1, 0), None);
        assert_eq!(storage.cell_count(), 1);
        assert!(!storage.is_empty());
    }
}
