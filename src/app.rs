//! Load, parse and render pipeline used by the binary

use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::{OutputFormat, StartupConfig};
use crate::csv::{render_json, render_text, CsvTable};
use crate::util::{filename_for_display, read_lines};

/// Read a CSV file and build its table
///
/// A read failure keeps its [`SourceError`](crate::util::SourceError) as the
/// root cause under a user-facing message; the parser is never invoked.
pub fn load_table(path: &Path, first_row_as_header: bool) -> Result<CsvTable> {
    let lines = read_lines(path).with_context(|| {
        format!("Cannot read {}", filename_for_display(path))
    })?;

    Ok(CsvTable::parse(&lines, first_row_as_header))
}

/// Render a table in the configured output format
pub fn render(table: &CsvTable, startup: &StartupConfig) -> Result<String> {
    match startup.format {
        OutputFormat::Text => Ok(render_text(table, &startup.render)),
        OutputFormat::Json => render_json(table).context("Failed to serialize table as JSON"),
    }
}

/// Run the whole pipeline for one startup configuration
pub fn run(startup: &StartupConfig) -> Result<String> {
    let table = load_table(&startup.path, startup.first_row_as_header)?;

    tracing::info!(
        "Loaded {} ({} columns, {} rows)",
        startup.path.display(),
        table.column_count(),
        table.row_count()
    );

    render(&table, startup)
}
