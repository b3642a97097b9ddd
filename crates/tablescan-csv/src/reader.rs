//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;
use tablescan_core::{CellValue, Error as CoreError, Workbook, Worksheet, MAX_COLS};
use tablescan_extract::SourceFile;

use crate::error::CsvResult;
use crate::options::CsvReadOptions;

/// CSV file reader
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file into a single-sheet workbook
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Workbook> {
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Read CSV from a reader into a single-sheet workbook
    pub fn read<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<Workbook> {
        let worksheet = Self::read_worksheet(reader, options)?;
        let mut workbook = Workbook::empty();
        workbook.add_existing_worksheet(worksheet)?;
        Ok(workbook)
    }

    /// Read a CSV file as a batch input named after the file
    ///
    /// A file without any content yields a [`SourceFile`] with no workbook.
    pub fn read_source<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<SourceFile> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let bytes = std::fs::read(path)?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            debug!("{}: empty file", name);
            return Ok(SourceFile::empty(name));
        }
        let workbook = Self::read(bytes.as_slice(), options)?;
        Ok(SourceFile::new(name, workbook))
    }

    /// Read CSV from a reader into a worksheet
    ///
    /// Record `i`, field `j` lands in row `i`, column `j`. Empty fields leave
    /// the cell absent; records may have different lengths. The parser skips
    /// empty lines, so a blank row has to be written as a record of empty
    /// fields (`,,`).
    pub fn read_worksheet<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<Worksheet> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut worksheet = Worksheet::new(options.sheet_name.as_str());
        let mut row_idx = 0u32;

        for result in csv_reader.records() {
            let record = result?;

            for (col, field) in record.iter().enumerate() {
                if field.is_empty() {
                    continue;
                }
                let col = u16::try_from(col)
                    .map_err(|_| CoreError::ColumnOutOfBounds(col as u32, MAX_COLS - 1))?;

                let value = if options.auto_detect_types {
                    Self::detect_type(&mut worksheet, field)
                } else {
                    CellValue::String(worksheet.intern(field))
                };

                worksheet.set_cell_value_at(row_idx, col, value)?;
            }

            row_idx += 1;
        }

        debug!(
            "read {} records into '{}' ({} cells, used range {})",
            row_idx,
            worksheet.name(),
            worksheet.cell_count(),
            worksheet.used_range()
        );
        Ok(worksheet)
    }

    /// Detect the type of a field value
    ///
    /// Numbers and `true`/`false` (any case) are parsed; everything else
    /// stays text exactly as written.
    fn detect_type(worksheet: &mut Worksheet, field: &str) -> CellValue {
        let trimmed = field.trim();

        if trimmed.eq_ignore_ascii_case("true") {
            return CellValue::Boolean(true);
        }
        if trimmed.eq_ignore_ascii_case("false") {
            return CellValue::Boolean(false);
        }

        // Only plain decimal notation; "inf", "NaN" and friends stay text
        let numeric = !trimmed.is_empty()
            && trimmed
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'));
        if numeric {
            if let Ok(n) = trimmed.parse::<f64>() {
                return CellValue::Number(n);
            }
        }

        CellValue::String(worksheet.intern(field))
    }
}
