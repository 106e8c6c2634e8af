//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;

use csvview::cli::{OutputFormat, StartupConfig};
use csvview::{Cell, RenderOptions};
use tempfile::NamedTempFile;

/// Write content to a temporary `.csv` file that lives as long as the handle
pub fn temp_csv(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Startup configuration for a file with plain rendering
pub fn startup_for(
    path: PathBuf,
    first_row_as_header: bool,
    format: OutputFormat,
) -> StartupConfig {
    StartupConfig {
        path,
        first_row_as_header,
        format,
        render: RenderOptions {
            show_row_numbers: false,
            min_column_width: 1,
            ..RenderOptions::default()
        },
    }
}

/// Build an expected column from optional string slices
pub fn column(values: &[Option<&str>]) -> Vec<Cell> {
    values.iter().map(|v| v.map(str::to_string)).collect()
}
