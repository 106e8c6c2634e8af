//! CSV grid rendering
//!
//! Lays a [`CsvTable`] out as plain text:
//! - Optional row number column
//! - Header line followed by a rule
//! - One aligned line per data row, numbers right-aligned
//! - Absent cells shown with a marker distinct from empty values

use super::table::CsvTable;

/// Column separator in text output
const COLUMN_SEPARATOR: &str = " │ ";

/// Character used for the rule under the header line
const RULE_CHAR: char = '─';

/// Rows sampled when measuring column widths
const WIDTH_SAMPLE_ROWS: usize = 100;

/// Options controlling text output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Text shown in place of absent cells
    pub missing_marker: String,
    /// Minimum column width in characters
    pub min_column_width: usize,
    /// Maximum column width in characters; longer values are truncated
    pub max_column_width: usize,
    /// Prefix each row with its 1-based number
    pub show_row_numbers: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            missing_marker: "missing".to_string(),
            min_column_width: 4,
            max_column_width: 40,
            show_row_numbers: true,
        }
    }
}

/// Check if a string looks like a number (for right-alignment)
pub fn is_number(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }
    s.parse::<f64>().is_ok()
}

/// Truncate text with ellipsis if too long
pub fn truncate_text(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else if max_chars <= 1 {
        s.chars().take(max_chars).collect()
    } else {
        let mut result: String = s.chars().take(max_chars - 1).collect();
        result.push('…');
        result
    }
}

/// Calculate column widths (in characters) from headers and content
///
/// Absent cells count as the width of `missing_marker`. Only the first
/// rows are sampled.
pub fn column_widths(table: &CsvTable, options: &RenderOptions) -> Vec<usize> {
    let marker_width = options.missing_marker.chars().count();
    let max_width = options.max_column_width.max(options.min_column_width);

    table
        .headers()
        .iter()
        .zip(table.records())
        .map(|(header, column)| {
            let content_width = column
                .iter()
                .take(WIDTH_SAMPLE_ROWS)
                .map(|cell| {
                    cell.as_deref()
                        .map_or(marker_width, |value| value.chars().count())
                })
                .max()
                .unwrap_or(0);

            header
                .chars()
                .count()
                .max(content_width)
                .clamp(options.min_column_width, max_width)
        })
        .collect()
}

/// Render the table as an aligned text grid
pub fn render_text(table: &CsvTable, options: &RenderOptions) -> String {
    let widths = column_widths(table, options);
    let row_number_width = if options.show_row_numbers {
        table.row_count().max(1).to_string().len()
    } else {
        0
    };

    let mut out = String::new();

    let header_cells: Vec<String> = table
        .headers()
        .iter()
        .zip(&widths)
        .map(|(header, &width)| pad_left_aligned(&truncate_text(header, width), width))
        .collect();
    push_line(&mut out, row_number_width, None, &header_cells);

    let rule: Vec<String> = widths
        .iter()
        .map(|&width| RULE_CHAR.to_string().repeat(width))
        .collect();
    push_rule(&mut out, row_number_width, &rule);

    for (idx, row) in table.rows().enumerate() {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| match cell {
                Some(value) => {
                    let text = truncate_text(value, width);
                    if is_number(value) {
                        pad_right_aligned(&text, width)
                    } else {
                        pad_left_aligned(&text, width)
                    }
                }
                None => {
                    pad_left_aligned(&truncate_text(&options.missing_marker, width), width)
                }
            })
            .collect();
        push_line(&mut out, row_number_width, Some(idx + 1), &cells);
    }

    out
}

/// Render the table as pretty-printed JSON; absent cells become `null`
pub fn render_json(table: &CsvTable) -> serde_json::Result<String> {
    serde_json::to_string_pretty(table)
}

fn push_line(
    out: &mut String,
    row_number_width: usize,
    row_number: Option<usize>,
    cells: &[String],
) {
    if row_number_width > 0 {
        let label = row_number.map(|n| n.to_string()).unwrap_or_default();
        out.push_str(&pad_right_aligned(&label, row_number_width));
        out.push_str(COLUMN_SEPARATOR);
    }
    out.push_str(cells.join(COLUMN_SEPARATOR).trim_end());
    out.push('\n');
}

fn push_rule(out: &mut String, row_number_width: usize, segments: &[String]) {
    let joint = format!("{0}┼{0}", RULE_CHAR);
    if row_number_width > 0 {
        out.push_str(&RULE_CHAR.to_string().repeat(row_number_width));
        out.push_str(&joint);
    }
    out.push_str(&segments.join(joint.as_str()));
    out.push('\n');
}

fn pad_left_aligned(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}

fn pad_right_aligned(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", " ".repeat(width.saturating_sub(len)), text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_options() -> RenderOptions {
        RenderOptions {
            show_row_numbers: false,
            min_column_width: 1,
            ..RenderOptions::default()
        }
    }

    #[test]
    fn test_is_number() {
        assert!(is_number("123"));
        assert!(is_number("-45.67"));
        assert!(is_number("0"));
        assert!(!is_number(""));
        assert!(!is_number("abc"));
        assert!(!is_number("12abc"));
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("hello", 10), "hello");
        assert_eq!(truncate_text("hello world", 5), "hell…");
        assert_eq!(truncate_text("ab", 2), "ab");
        assert_eq!(truncate_text("abc", 1), "a");
    }

    #[test]
    fn test_column_widths_use_header_content_and_marker() {
        let table = CsvTable::parse(["id,description", "1", "22,x"], true);
        let widths = column_widths(&table, &plain_options());
        // Header is wider than both "x" and the missing marker
        assert_eq!(widths, vec![2, 11]);
    }

    #[test]
    fn test_column_widths_clamped() {
        let table = CsvTable::parse(["a,bbbbbbbbbbbbbbbbbbbb"], false);
        let options = RenderOptions {
            min_column_width: 3,
            max_column_width: 8,
            ..plain_options()
        };
        assert_eq!(column_widths(&table, &options), vec![3, 8]);
    }

    #[test]
    fn test_render_text_marks_missing_cells() {
        let table = CsvTable::parse(["a,b,c", "x,y"], false);
        let text = render_text(&table, &plain_options());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with('1'));
        assert_eq!(lines[2], "a │ b │ c");
        assert_eq!(lines[3], "x │ y │ missing");
    }

    #[test]
    fn test_render_text_empty_value_is_blank() {
        let table = CsvTable::parse(["a,,c"], false);
        let text = render_text(&table, &plain_options());
        assert!(!text.contains("missing"));
    }

    #[test]
    fn test_render_text_right_aligns_numbers() {
        let table = CsvTable::parse(["name,qty", "apple,5", "kiwi,120"], true);
        let text = render_text(&table, &plain_options());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "name  │ qty");
        assert_eq!(lines[2], "apple │   5");
        assert_eq!(lines[3], "kiwi  │ 120");
    }

    #[test]
    fn test_render_text_row_numbers() {
        let table = CsvTable::parse(["a", "b"], false);
        let text = render_text(&table, &RenderOptions::default());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "  │ 1");
        assert_eq!(lines[1], "──┼─────");
        assert_eq!(lines[2], "1 │ a");
        assert_eq!(lines[3], "2 │ b");
    }

    #[test]
    fn test_render_text_custom_marker() {
        let table = CsvTable::parse(["a,b", "c"], false);
        let options = RenderOptions {
            missing_marker: "<none>".to_string(),
            ..plain_options()
        };
        assert!(render_text(&table, &options).contains("<none>"));
    }

    #[test]
    fn test_render_json_uses_null_for_missing() {
        let table = CsvTable::parse(["A,B", "1"], true);
        let json: serde_json::Value = serde_json::from_str(&render_json(&table).unwrap()).unwrap();

        assert_eq!(json["headers"], serde_json::json!(["A", "B"]));
        assert_eq!(json["records"], serde_json::json!([["1"], [null]]));
    }
}
