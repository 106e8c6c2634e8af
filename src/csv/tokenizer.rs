//! Single-line CSV tokenizer
//!
//! Splits one line on commas, honoring double-quoted regions and `""`
//! escapes. Quoted fields never span lines.

/// Field separator
const SEPARATOR: char = ',';

/// Quote character that toggles a quoted region
const QUOTE: char = '"';

/// Split a single line into its fields
///
/// - `,` outside quotes closes the current field
/// - `"` toggles the quoted region and is never part of the field
/// - `""` inside a quoted region yields a literal `"`
/// - an unterminated quote at end of line is tolerated
///
/// The result always holds at least one field, so `tokenize("")` is `[""]`.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            QUOTE => {
                if in_quotes && chars.peek() == Some(&QUOTE) {
                    current.push(QUOTE);
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            SEPARATOR if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }

    fields.push(current);
    fields
}
