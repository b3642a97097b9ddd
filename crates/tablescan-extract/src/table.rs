//! Extracted tables

use serde::ser::{SerializeMap, SerializeSeq, SerializeStruct};
use serde::{Serialize, Serializer};
use tablescan_core::{CellRange, CellValue};

use crate::header::Headers;

/// Message carried by [`TableOutcome::NoData`]
pub const NO_DATA_MESSAGE: &str = "No data found in the specified range.";

/// A table materialized from one rectangle of one sheet
///
/// Every row holds exactly one value per header, in header order, so all
/// rows of a record share the same key set.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRecord {
    /// Name of the file the workbook was decoded from
    pub source_file_name: String,
    /// Sheet the table was read from
    pub sheet_name: String,
    /// Rectangle the table was read from (for column search, the header
    /// span extended down to the last data row)
    pub range: CellRange,
    headers: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl TableRecord {
    pub(crate) fn new(
        source_file_name: &str,
        sheet_name: &str,
        range: CellRange,
        headers: &Headers,
        rows: Vec<Vec<CellValue>>,
    ) -> Self {
        Self {
            source_file_name: source_file_name.to_string(),
            sheet_name: sheet_name.to_string(),
            range,
            headers: headers.names().to_vec(),
            rows,
        }
    }

    /// Header names, in order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get a data row by index
    pub fn row(&self, index: usize) -> Option<TableRow<'_>> {
        self.rows.get(index).map(|values| TableRow {
            headers: &self.headers,
            values,
        })
    }

    /// Iterate over data rows in scan order
    pub fn rows(&self) -> impl Iterator<Item = TableRow<'_>> + '_ {
        self.rows.iter().map(move |values| TableRow {
            headers: &self.headers,
            values,
        })
    }
}

/// One data row of a [`TableRecord`], keyed by header name
#[derive(Debug, Clone, Copy)]
pub struct TableRow<'a> {
    headers: &'a [String],
    values: &'a [CellValue],
}

impl<'a> TableRow<'a> {
    /// Value under a header, `None` when the header does not exist
    pub fn get(&self, header: &str) -> Option<&'a CellValue> {
        self.headers
            .iter()
            .position(|h| h == header)
            .and_then(|index| self.values.get(index))
    }

    /// Values in header order
    pub fn values(&self) -> &'a [CellValue] {
        self.values
    }

    /// `(header, value)` pairs in header order
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a CellValue)> + 'a {
        self.headers
            .iter()
            .map(String::as_str)
            .zip(self.values.iter())
    }
}

impl Serialize for TableRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (header, value) in self.iter() {
            map.serialize_entry(header, value)?;
        }
        map.end()
    }
}

struct Rows<'a>(&'a TableRecord);

impl Serialize for Rows<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.row_count()))?;
        for row in self.0.rows() {
            seq.serialize_element(&row)?;
        }
        seq.end()
    }
}

impl Serialize for TableRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut record = serializer.serialize_struct("TableRecord", 4)?;
        record.serialize_field("fileName", &self.source_file_name)?;
        record.serialize_field("sheetName", &self.sheet_name)?;
        record.serialize_field("range", &self.range.to_a1_string())?;
        record.serialize_field("data", &Rows(self))?;
        record.end()
    }
}

/// Result of a fixed-range extraction that did not fail
#[derive(Debug, Clone, PartialEq)]
pub enum TableOutcome {
    /// At least one data row was found
    Table(TableRecord),
    /// The range was valid but produced no data rows
    NoData { message: String },
}

impl TableOutcome {
    pub(crate) fn no_data() -> Self {
        TableOutcome::NoData {
            message: NO_DATA_MESSAGE.to_string(),
        }
    }

    /// The table, if one was found
    pub fn table(&self) -> Option<&TableRecord> {
        match self {
            TableOutcome::Table(table) => Some(table),
            TableOutcome::NoData { .. } => None,
        }
    }

    /// Consume the outcome, keeping the table if one was found
    pub fn into_table(self) -> Option<TableRecord> {
        match self {
            TableOutcome::Table(table) => Some(table),
            TableOutcome::NoData { .. } => None,
        }
    }
}
