//! End-to-end tests: file on disk to rendered output

mod common;

use common::{startup_for, temp_csv};
use csvview::app::{load_table, run};
use csvview::cli::OutputFormat;
use csvview::util::SourceError;

#[test]
fn test_run_text_output() {
    let file = temp_csv("name,city\nAlice,Oslo\nBob\n");
    let startup = startup_for(file.path().to_path_buf(), true, OutputFormat::Text);

    let output = run(&startup).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], "name  │ city");
    assert_eq!(lines[2], "Alice │ Oslo");
    assert_eq!(lines[3], "Bob   │ missing");
}

#[test]
fn test_run_json_output() {
    let file = temp_csv("a,b\n1\n");
    let startup = startup_for(file.path().to_path_buf(), false, OutputFormat::Json);

    let output = run(&startup).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json["headers"], serde_json::json!(["1", "2"]));
    assert_eq!(json["records"], serde_json::json!([["a", "1"], ["b", null]]));
}

#[test]
fn test_load_table_skips_blank_lines_with_crlf() {
    let file = temp_csv("h1,h2\r\n\r\n   \r\nx,y\r\n");
    let table = load_table(file.path(), true).unwrap();

    assert_eq!(table.headers(), ["h1", "h2"]);
    assert_eq!(table.row_count(), 1);
    assert_eq!(table.get(0, 1), Some("y"));
}

#[test]
fn test_missing_file_reports_user_message() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.csv");

    let err = load_table(&path, false).unwrap_err();
    assert_eq!(err.to_string(), "Cannot read absent.csv");
    assert_eq!(format!("{:#}", err), "Cannot read absent.csv: no such file");
}

#[test]
fn test_read_failure_keeps_source_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.csv");

    let err = load_table(&path, false).unwrap_err();
    assert_eq!(err.downcast_ref::<SourceError>(), Some(&SourceError::NotFound));
}

#[test]
fn test_directory_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_table(dir.path(), false).unwrap_err();
    assert_eq!(err.downcast_ref::<SourceError>(), Some(&SourceError::IsDirectory));
    assert!(format!("{:#}", err).ends_with("it is a directory"));
}

#[test]
fn test_load_table_splits_bare_carriage_returns() {
    let file = temp_csv("a,b\rc,d\r");
    let table = load_table(file.path(), false).unwrap();

    assert_eq!(table.row_count(), 2);
    assert_eq!(table.column_count(), 2);
    assert_eq!(table.get(0, 1), Some("b"));
    assert_eq!(table.get(1, 1), Some("d"));
}

#[test]
fn test_empty_file_renders_header_only() {
    let file = temp_csv("\n\n");
    let startup = startup_for(file.path().to_path_buf(), true, OutputFormat::Text);

    let output = run(&startup).unwrap();
    assert_eq!(output.lines().count(), 2);
    assert_eq!(output.lines().next(), Some("1"));
}
