//! Table materialization
//!
//! Turns rectangles of a sheet into [`TableRecord`]s in one of three modes:
//!
//! - **dynamic**: every region found by [`detect_regions`] on every sheet
//! - **fixed**: one caller-supplied range, every row of it emitted
//! - **column search**: a caller-supplied header row; data rows are read
//!   downwards until the first blank row

use log::debug;
use tablescan_core::{CellRange, CellValue, Workbook, Worksheet, MAX_ROWS};

use crate::error::ExtractResult;
use crate::grid::Grid;
use crate::header::{HeaderPolicy, Headers};
use crate::reference::SheetRangeRef;
use crate::region::detect_regions;
use crate::table::{TableOutcome, TableRecord};

/// Extract every detected table of every sheet, sheets in workbook order
/// and tables in discovery order
///
/// The first row of each region supplies the headers. Regions without any
/// data row below the header are dropped.
pub fn extract_dynamic(workbook: &Workbook, file_name: &str) -> Vec<TableRecord> {
    workbook
        .worksheets()
        .flat_map(|worksheet| extract_sheet_dynamic(worksheet, file_name))
        .collect()
}

/// Extract every detected table of one sheet
pub fn extract_sheet_dynamic(worksheet: &Worksheet, file_name: &str) -> Vec<TableRecord> {
    let grid = Grid::new(worksheet);
    detect_regions(&grid)
        .into_iter()
        .filter_map(|region| {
            if region.range.row_count() < 2 {
                debug!(
                    "sheet '{}': dropping header-only region {}",
                    worksheet.name(),
                    region.range
                );
                return None;
            }
            Some(materialize_range(
                &grid,
                region.range,
                HeaderPolicy::FirstRow,
                file_name,
            ))
        })
        .collect()
}

/// Extract the table at an explicit `Sheet!A1:B9` reference
///
/// Every row of the range is emitted, blank ones included (as nulls). With
/// `auto_header` the headers are `Column_1..Column_N` and the first row is
/// data; otherwise the first row supplies the headers.
///
/// # Errors
/// `MalformedRange` when the reference does not parse, `SheetNotFound` when
/// the workbook has no such sheet. A range with no data rows is
/// [`TableOutcome::NoData`], not an error.
pub fn extract_fixed(
    workbook: &Workbook,
    reference: &str,
    file_name: &str,
    auto_header: bool,
) -> ExtractResult<TableOutcome> {
    let reference = SheetRangeRef::parse(reference)?;
    let grid = Grid::open(workbook, &reference.sheet_name)?;
    let range = reference.resolve(grid.worksheet());
    let policy = HeaderPolicy::from_auto_header(auto_header);

    let table = materialize_range(&grid, range, policy, file_name);
    if table.is_empty() {
        debug!("{}: no data in {}", file_name, reference);
        return Ok(TableOutcome::no_data());
    }
    Ok(TableOutcome::Table(table))
}

/// Extract the table whose header row is given by `reference`, reading data
/// rows downwards until a row is blank across the header's column span
///
/// A row is blank when every cell of the span is missing, null or a string
/// that trims to empty. The blank row is not part of the output.
///
/// # Errors
/// Same as [`extract_fixed`].
pub fn extract_column_search(
    workbook: &Workbook,
    reference: &str,
    file_name: &str,
    auto_header: bool,
) -> ExtractResult<TableOutcome> {
    let reference = SheetRangeRef::parse(reference)?;
    let grid = Grid::open(workbook, &reference.sheet_name)?;
    let span = reference.resolve(grid.worksheet());
    let (start_col, end_col) = (span.start.col, span.end.col);
    let header_row = span.start.row;

    let policy = HeaderPolicy::from_auto_header(auto_header);
    let headers = Headers::derive(grid.worksheet(), policy, header_row, start_col, end_col);

    let first_data_row = match policy {
        HeaderPolicy::Synthetic => header_row,
        HeaderPolicy::FirstRow => header_row + 1,
    };

    let mut rows = Vec::new();
    let mut row = first_data_row;
    while row < MAX_ROWS && !is_blank_row(&grid, row, start_col, end_col) {
        rows.push(read_row(&grid, &headers, row, start_col, end_col));
        row += 1;
    }

    if rows.is_empty() {
        debug!("{}: no data below {}", file_name, reference);
        return Ok(TableOutcome::no_data());
    }

    let last_row = first_data_row + rows.len() as u32 - 1;
    let range = CellRange::from_indices(header_row, start_col, last_row, end_col);
    debug!(
        "{}: column search on '{}' found {} rows in {}",
        file_name,
        grid.sheet_name(),
        rows.len(),
        range
    );
    Ok(TableOutcome::Table(TableRecord::new(
        file_name,
        grid.sheet_name(),
        range,
        &headers,
        rows,
    )))
}

/// Materialize one rectangle under a header policy, keeping every row
fn materialize_range(
    grid: &Grid<'_>,
    range: CellRange,
    policy: HeaderPolicy,
    file_name: &str,
) -> TableRecord {
    let (start_col, end_col) = (range.start.col, range.end.col);
    let headers = Headers::derive(grid.worksheet(), policy, range.start.row, start_col, end_col);

    let first_data_row = match policy {
        HeaderPolicy::Synthetic => range.start.row,
        HeaderPolicy::FirstRow => range.start.row + 1,
    };
    let rows: Vec<Vec<CellValue>> = (first_data_row..=range.end.row)
        .map(|row| read_row(grid, &headers, row, start_col, end_col))
        .collect();

    debug!(
        "{}: table on '{}' at {} with {} columns and {} rows",
        file_name,
        grid.sheet_name(),
        range,
        headers.len(),
        rows.len()
    );
    TableRecord::new(file_name, grid.sheet_name(), range, &headers, rows)
}

/// Read one row into header slots; absent cells become null and a repeated
/// header keeps the value of its right-most column
fn read_row(
    grid: &Grid<'_>,
    headers: &Headers,
    row: u32,
    start_col: u16,
    end_col: u16,
) -> Vec<CellValue> {
    let mut values = vec![CellValue::Null; headers.len()];
    for (offset, value) in grid.row_values(row, start_col, end_col).enumerate() {
        if let Some(slot) = headers.slot(offset) {
            values[slot] = value.cloned().unwrap_or_default();
        }
    }
    values
}

fn is_blank_row(grid: &Grid<'_>, row: u32, start_col: u16, end_col: u16) -> bool {
    grid.row_values(row, start_col, end_col)
        .all(|value| value.map_or(true, CellValue::is_blank))
}
