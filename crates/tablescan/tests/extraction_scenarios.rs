//! End-to-end extraction tests (CSV bytes -> workbook -> tables -> JSON)

use pretty_assertions::assert_eq;
use serde_json::json;
use tablescan::prelude::*;

/// Decode CSV keeping every field as text
fn text_workbook(data: &str) -> Workbook {
    let options = CsvReadOptions {
        auto_detect_types: false,
        ..Default::default()
    };
    CsvReader::read(data.as_bytes(), &options).unwrap()
}

fn typed_workbook(data: &str) -> Workbook {
    CsvReader::read(data.as_bytes(), &CsvReadOptions::default()).unwrap()
}

#[test]
fn test_dynamic_single_table_to_json() {
    let wb = text_workbook("Name,Age\nAlice,30\n");
    let tables = wb.extract_tables("people.csv");

    assert_eq!(tables.len(), 1);
    assert_eq!(
        serde_json::to_value(&tables[0]).unwrap(),
        json!({
            "fileName": "people.csv",
            "sheetName": "Sheet1",
            "range": "A1:B2",
            "data": [{"Name": "Alice", "Age": "30"}]
        })
    );
}

#[test]
fn test_dynamic_two_disjoint_clusters() {
    let wb = typed_workbook(
        "a,b,,,,\n\
         1,2,,,,\n\
         ,,,,,\n\
         ,,,,,\n\
         ,,,,c,d\n\
         ,,,,3,4\n",
    );
    let tables = wb.extract_tables("two.csv");

    let ranges: Vec<String> = tables.iter().map(|t| t.range.to_a1_string()).collect();
    assert_eq!(ranges, vec!["A1:B2", "E5:F6"]);
    assert_eq!(
        serde_json::to_value(&tables).unwrap(),
        json!([
            {"fileName": "two.csv", "sheetName": "Sheet1", "range": "A1:B2", "data": [{"a": 1, "b": 2}]},
            {"fileName": "two.csv", "sheetName": "Sheet1", "range": "E5:F6", "data": [{"c": 3, "d": 4}]}
        ])
    );
}

#[test]
fn test_cluster_discovered_first_comes_first() {
    // The right-hand cluster starts on a higher row
    let wb = typed_workbook(
        ",,,x,y\n\
         ,,,1,2\n\
         ,,,,\n\
         p,q,,,\n\
         5,6,,,\n",
    );
    let tables = wb.extract_tables("order.csv");
    let ranges: Vec<String> = tables.iter().map(|t| t.range.to_a1_string()).collect();
    assert_eq!(ranges, vec!["D1:E2", "A4:B5"]);
}

#[test]
fn test_fixed_range_keeps_blank_rows() {
    let wb = text_workbook("X,\n1,2\n,\n");
    let outcome = wb.extract_range("Sheet1!A1:B3", "fixed.csv", false).unwrap();
    let table = outcome.table().unwrap();

    assert_eq!(table.headers(), &["X", "Column_2"]);
    assert_eq!(
        serde_json::to_value(table).unwrap()["data"],
        json!([
            {"X": "1", "Column_2": "2"},
            {"X": null, "Column_2": null}
        ])
    );
}

#[test]
fn test_fixed_range_auto_header() {
    let wb = typed_workbook("1,2\n3,4\n");
    let outcome = wb.extract_range("Sheet1!A1:B2", "auto.csv", true).unwrap();

    assert_eq!(
        serde_json::to_value(outcome.table().unwrap()).unwrap()["data"],
        json!([
            {"Column_1": 1, "Column_2": 2},
            {"Column_1": 3, "Column_2": 4}
        ])
    );
}

#[test]
fn test_column_search_stops_at_blank_row() {
    let wb = text_workbook("a,b\nc,d\n,\ne,f\n");
    let outcome = wb
        .extract_below_header("Sheet1!A1:B1", "search.csv", true)
        .unwrap();
    let table = outcome.table().unwrap();

    assert_eq!(table.headers(), &["Column_1", "Column_2"]);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.range.to_a1_string(), "A1:B2");
}

#[test]
fn test_column_search_with_header_text() {
    let wb = typed_workbook(",,,\n,Item,Qty,\n,bolt,4,\n,nut,,\n, ,,\n,washer,9,\n");
    let outcome = wb
        .extract_below_header("Sheet1!B2:C2", "stock.csv", false)
        .unwrap();

    assert_eq!(
        serde_json::to_value(outcome.table().unwrap()).unwrap(),
        json!({
            "fileName": "stock.csv",
            "sheetName": "Sheet1",
            "range": "B2:C4",
            "data": [
                {"Item": "bolt", "Qty": 4},
                {"Item": "nut", "Qty": null}
            ]
        })
    );
}

#[test]
fn test_missing_sheet() {
    let wb = text_workbook("a,b\n1,2\n");
    match wb.extract_range("Missing!A1:B2", "f.csv", false) {
        Err(ExtractError::SheetNotFound(name)) => assert_eq!(name, "Missing"),
        other => panic!("expected SheetNotFound, got {:?}", other),
    }
}

#[test]
fn test_no_data_is_not_an_error() {
    let wb = text_workbook("a,b\n");
    let outcome = wb.extract_range("Sheet1!A1:B1", "f.csv", false).unwrap();
    assert_eq!(
        outcome,
        TableOutcome::NoData {
            message: "No data found in the specified range.".to_string()
        }
    );
}

#[test]
fn test_regions_per_sheet() {
    let wb = typed_workbook("1,,3\n,2,\n,,\n,,\n4,,\n");
    let regions = wb.regions();

    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].sheet_name, "Sheet1");
    let ranges: Vec<String> = regions[0].ranges.iter().map(|r| r.to_a1_string()).collect();
    assert_eq!(ranges, vec!["A1:C2", "A5"]);
}
