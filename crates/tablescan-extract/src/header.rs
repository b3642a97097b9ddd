//! Header derivation

use ahash::AHashMap;
use log::debug;
use tablescan_core::{CellValue, Worksheet};

/// How the header names of a table are obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderPolicy {
    /// Read header text from the first row of the range
    FirstRow,
    /// Synthesize `Column_1..Column_N`; the first row is data
    Synthetic,
}

impl HeaderPolicy {
    /// Policy for an `auto_header` flag
    pub fn from_auto_header(auto_header: bool) -> Self {
        if auto_header {
            HeaderPolicy::Synthetic
        } else {
            HeaderPolicy::FirstRow
        }
    }
}

/// Positional fallback name for the column at 1-based `position`
pub fn positional_name(position: usize) -> String {
    format!("Column_{}", position)
}

/// Header text of a cell: stringified and trimmed, `None` when blank
pub fn header_text(value: Option<&CellValue>) -> Option<String> {
    let text = value?.to_string();
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// The resolved header of a table
///
/// `names` holds each distinct header once, in order of first appearance.
/// `slots` maps every column of the range (by offset) to its name's index.
/// When two columns derive the same name, both map to the same slot and the
/// right-most column's value ends up in the row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Headers {
    names: Vec<String>,
    slots: Vec<usize>,
}

impl Headers {
    /// Build headers from one derived name per column
    pub fn from_names<I>(names: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut unique: Vec<String> = Vec::new();
        let mut index: AHashMap<String, usize> = AHashMap::new();
        let mut slots = Vec::new();

        for name in names {
            let slot = match index.get(&name) {
                Some(&slot) => {
                    debug!(
                        "duplicate header '{}' at column offset {}; later column wins",
                        name,
                        slots.len()
                    );
                    slot
                }
                None => {
                    let slot = unique.len();
                    index.insert(name.clone(), slot);
                    unique.push(name);
                    slot
                }
            };
            slots.push(slot);
        }

        Self {
            names: unique,
            slots,
        }
    }

    /// `Column_1..Column_N` for `count` columns
    pub fn synthetic(count: usize) -> Self {
        Self::from_names((1..=count).map(positional_name))
    }

    /// Read header text from `row` across `start_col..=end_col`, falling back
    /// to `Column_<k>` for missing, null or blank cells
    pub fn from_row(worksheet: &Worksheet, row: u32, start_col: u16, end_col: u16) -> Self {
        Self::from_names((start_col..=end_col).enumerate().map(|(offset, col)| {
            header_text(worksheet.cell_at(row, col)).unwrap_or_else(|| positional_name(offset + 1))
        }))
    }

    /// Derive headers for a range under a policy
    pub fn derive(
        worksheet: &Worksheet,
        policy: HeaderPolicy,
        header_row: u32,
        start_col: u16,
        end_col: u16,
    ) -> Self {
        match policy {
            HeaderPolicy::FirstRow => Self::from_row(worksheet, header_row, start_col, end_col),
            HeaderPolicy::Synthetic => Self::synthetic((end_col - start_col) as usize + 1),
        }
    }

    /// Distinct header names, in order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Slot of the column at `offset` within the range
    pub fn slot(&self, offset: usize) -> Option<usize> {
        self.slots.get(offset).copied()
    }

    /// Number of columns covered
    pub fn column_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of distinct names
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if there are no headers
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_header_text() {
        assert_eq!(header_text(None), None);
        assert_eq!(header_text(Some(&CellValue::Null)), None);
        assert_eq!(header_text(Some(&CellValue::string("   "))), None);
        assert_eq!(header_text(Some(&CellValue::string(" Name "))), Some("Name".into()));
        assert_eq!(header_text(Some(&CellValue::Number(2024.0))), Some("2024".into()));
        assert_eq!(header_text(Some(&CellValue::Boolean(true))), Some("TRUE".into()));
    }

    #[test]
    fn test_synthetic() {
        let headers = Headers::synthetic(3);
        assert_eq!(headers.names(), &["Column_1", "Column_2", "Column_3"]);
    }

    #[test]
    fn test_from_row_with_fallbacks() {
        let mut sheet = Worksheet::new("S");
        sheet.set_cell_value("B2", "Name").unwrap();
        sheet.set_cell_value("D2", " ").unwrap();
        sheet.set_cell_value("E2", 7).unwrap();

        let headers = Headers::from_row(&sheet, 1, 1, 4);
        assert_eq!(headers.names(), &["Name", "Column_2", "Column_3", "7"]);
    }

    #[test]
    fn test_duplicate_names_share_a_slot() {
        let headers = Headers::from_names(
            ["id", "name", "id"].iter().map(|s| s.to_string()),
        );
        assert_eq!(headers.names(), &["id", "name"]);
        assert_eq!(headers.column_count(), 3);
        assert_eq!(headers.slot(0), Some(0));
        assert_eq!(headers.slot(2), Some(0));
        assert_eq!(headers.slot(3), None);
    }

    #[test]
    fn test_policy_from_auto_header() {
        assert_eq!(HeaderPolicy::from_auto_header(true), HeaderPolicy::Synthetic);
        assert_eq!(HeaderPolicy::from_auto_header(false), HeaderPolicy::FirstRow);
    }
}
