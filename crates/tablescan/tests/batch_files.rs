//! Batch extraction over files on disk

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tablescan::prelude::*;
use tablescan::{extract_batch, open_source, open_sources};

fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn sources(paths: &[std::path::PathBuf]) -> Vec<SourceFile> {
    paths.iter().map(|p| open_source(p).unwrap()).collect()
}

#[test]
fn test_dynamic_batch() {
    let dir = tempfile::tempdir().unwrap();
    let paths = vec![
        write(dir.path(), "people.csv", "Name,Age\nAlice,30\nBob,41\n"),
        write(dir.path(), "empty.csv", ""),
        write(dir.path(), "pets.tsv", "Pet\tLegs\ncat\t4\n"),
    ];

    let outcomes = extract_batch(&sources(&paths), &ExtractOptions::dynamic());
    let json = serde_json::to_value(&outcomes).unwrap();

    assert_eq!(
        json,
        json!([
            {
                "status": "tables",
                "fileName": "people.csv",
                "tables": [{
                    "fileName": "people.csv",
                    "sheetName": "Sheet1",
                    "range": "A1:B3",
                    "data": [{"Name": "Alice", "Age": 30}, {"Name": "Bob", "Age": 41}]
                }]
            },
            {"status": "skipped", "fileName": "empty.csv"},
            {
                "status": "tables",
                "fileName": "pets.tsv",
                "tables": [{
                    "fileName": "pets.tsv",
                    "sheetName": "Sheet1",
                    "range": "A1:B2",
                    "data": [{"Pet": "cat", "Legs": 4}]
                }]
            }
        ])
    );
}

#[test]
fn test_fixed_batch_failures_stay_per_file() {
    let dir = tempfile::tempdir().unwrap();
    let paths = vec![
        write(dir.path(), "a.csv", "h1,h2\n1,2\n"),
        write(dir.path(), "b.csv", "h1\n"),
    ];
    let files = sources(&paths);

    // A fixed range keeps its blank rows, so b.csv still yields one row
    let options = ExtractOptions::from_host(true, "Sheet1!A1:B2", false);
    let outcomes = extract_batch(&files, &options);
    assert_eq!(outcomes[0].tables().len(), 1);
    assert_eq!(
        serde_json::to_value(&outcomes[1]).unwrap(),
        json!({
            "status": "table",
            "fileName": "b.csv",
            "table": {
                "fileName": "b.csv",
                "sheetName": "Sheet1",
                "range": "A1:B2",
                "data": [{"h1": null, "Column_2": null}]
            }
        })
    );

    let outcomes = extract_batch(&files, &ExtractOptions::fixed("Sheet1!A1:B1"));
    assert_eq!(
        serde_json::to_value(&outcomes[1]).unwrap(),
        json!({
            "status": "no_data",
            "fileName": "b.csv",
            "message": "No data found in the specified range."
        })
    );

    let options = ExtractOptions::fixed("Other!A1:B2");
    let outcomes = extract_batch(&files, &options);
    let statuses: Vec<Value> = outcomes
        .iter()
        .map(|o| serde_json::to_value(o).unwrap()["status"].clone())
        .collect();
    assert_eq!(statuses, vec![json!("sheet_not_found"), json!("sheet_not_found")]);
    assert_eq!(
        serde_json::to_value(&outcomes[0]).unwrap()["error"],
        json!("Sheet \"Other\" not found.")
    );
}

#[test]
fn test_undecodable_file_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let good = write(dir.path(), "good.csv", "k,v\na,1\n");
    let bad = dir.path().join("bad.csv");
    fs::write(&bad, b"\xff\xfe").unwrap();

    assert!(open_source(&bad).is_err());
    let files = open_sources(&[good, bad], None);
    assert_eq!(files.len(), 2);
    assert_eq!(files[1].name, "bad.csv");
    assert!(files[1].workbook.is_none());

    let outcomes = extract_batch(&files, &ExtractOptions::dynamic());
    assert_eq!(outcomes[0].tables().len(), 1);
    assert_eq!(
        serde_json::to_value(&outcomes[1]).unwrap(),
        json!({"status": "skipped", "fileName": "bad.csv"})
    );
}

#[test]
fn test_options_from_json() {
    let options: ExtractOptions = serde_json::from_str(
        r#"{"mode": {"column_search": {"reference": "Sheet1!A1:B1"}}, "autoHeader": false}"#,
    )
    .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "s.csv", "k,v\na,1\nb,2\n,\nc,3\n");
    let outcomes = extract_batch(&sources(&[path]), &options);

    assert_eq!(outcomes[0].tables()[0].row_count(), 2);
}

#[test]
fn test_unsupported_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "book.xlsx", "not really");
    assert!(open_source(&path).is_err());
    assert!(Workbook::open(&path).is_err());
}
