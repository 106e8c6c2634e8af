//! Rectangular CSV table
//!
//! Normalizes ragged tokenized rows into a column-major table. Rows shorter
//! than the widest row are padded with absent cells (`None`), which stay
//! distinct from empty fields (`Some("")`).

use serde::Serialize;

use super::tokenizer::tokenize;

/// A single table cell; `None` marks a position the source row never had
pub type Cell = Option<String>;

/// Parsed CSV table with headers and column-major records
///
/// `records[col][row]` holds the value of data row `row` in column `col`.
/// Every column has exactly `row_count()` entries and there is always at
/// least one header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CsvTable {
    headers: Vec<String>,
    records: Vec<Vec<Cell>>,
}

impl CsvTable {
    /// Build a table from raw text lines
    ///
    /// Blank and whitespace-only lines are dropped before tokenizing. With
    /// `first_line_is_header` the first remaining line supplies header
    /// names; positions it lacks fall back to their 1-based column index.
    pub fn parse<I, S>(lines: I, first_line_is_header: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut total_lines = 0usize;
        let mut rows: Vec<Vec<Cell>> = Vec::new();

        for line in lines {
            total_lines += 1;
            let line = line.as_ref();
            if is_blank(line) {
                continue;
            }
            rows.push(tokenize(line).into_iter().map(Some).collect());
        }

        let column_count = rows.iter().map(Vec::len).max().unwrap_or(0).max(1);

        for row in &mut rows {
            debug_assert!(row.len() <= column_count);
            row.resize(column_count, None);
        }

        let headers: Vec<String> = match rows.first() {
            Some(first) if first_line_is_header => first
                .iter()
                .enumerate()
                .map(|(idx, cell)| cell.clone().unwrap_or_else(|| column_label(idx)))
                .collect(),
            _ => (0..column_count).map(column_label).collect(),
        };

        let skip = usize::from(first_line_is_header);
        let row_count = rows.len().saturating_sub(skip);

        let mut records: Vec<Vec<Cell>> = (0..column_count)
            .map(|_| Vec::with_capacity(row_count))
            .collect();

        for row in rows.into_iter().skip(skip) {
            for (column, cell) in records.iter_mut().zip(row) {
                column.push(cell);
            }
        }

        tracing::debug!(
            total_lines,
            data_rows = row_count,
            columns = column_count,
            header_row = first_line_is_header,
            "Parsed CSV table"
        );

        Self { headers, records }
    }

    /// Build a table from file content; see [`split_lines`]
    pub fn parse_str(content: &str, first_line_is_header: bool) -> Self {
        Self::parse(split_lines(content), first_line_is_header)
    }

    /// Header names, one per column
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Column-major records
    pub fn records(&self) -> &[Vec<Cell>] {
        &self.records
    }

    /// All cells of a column, top to bottom
    pub fn column(&self, col: usize) -> Option<&[Cell]> {
        self.records.get(col).map(Vec::as_slice)
    }

    /// Number of columns (always at least 1)
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Number of data rows (excludes a consumed header row)
    pub fn row_count(&self) -> usize {
        self.records.first().map_or(0, Vec::len)
    }

    /// Check if there are no data rows
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    /// Get cell value at position
    ///
    /// Returns `None` both for absent cells and out-of-range positions.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.records.get(col)?.get(row)?.as_deref()
    }

    /// Iterate data rows in row-major order
    pub fn rows(&self) -> impl Iterator<Item = Vec<Option<&str>>> + '_ {
        (0..self.row_count()).map(move |row| {
            self.records
                .iter()
                .map(|column| column[row].as_deref())
                .collect()
        })
    }
}

/// Split text into lines ending at `\n`, `\r` or `\r\n`
///
/// A terminator at the very end does not open an extra empty line, so
/// `"a\rb\r"` yields `["a", "b"]` while `"a\r\rb"` keeps the blank line.
pub fn split_lines(content: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = content;

    while let Some(end) = rest.find(|c: char| c == '\r' || c == '\n') {
        lines.push(&rest[..end]);
        let terminator_len = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + terminator_len..];
    }

    if !rest.is_empty() {
        lines.push(rest);
    }
    lines
}

/// Check if a line holds nothing but blank characters
fn is_blank(line: &str) -> bool {
    line.chars().all(is_blank_char)
}

/// Whitespace as counted when dropping blank lines
///
/// Non-breaking spaces and NEL do not count; the ASCII information
/// separators U+001C..U+001F do.
fn is_blank_char(c: char) -> bool {
    match c {
        '\u{00A0}' | '\u{2007}' | '\u{202F}' | '\u{0085}' => false,
        '\u{001C}'..='\u{001F}' => true,
        _ => c.is_whitespace(),
    }
}

/// 1-based column index rendered as text
fn column_label(idx: usize) -> String {
    (idx + 1).to_string()
}
