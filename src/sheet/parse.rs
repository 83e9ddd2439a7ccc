//! CSV tokenizer
//!
//! A single left-to-right scan with one bit of quoting state. Field and row
//! boundaries only count outside quoted mode, so embedded commas, newlines
//! and `""` escapes survive intact.

use std::mem::take;

/// Split raw CSV text into rows of fields.
///
/// `""` inside a quoted field is a literal quote character. An unquoted
/// comma ends the current field; an unquoted LF or CR ends the current row,
/// with CRLF consumed as a single terminator. Input without a trailing
/// newline still yields its last row. Ragged rows pass through unchanged;
/// the materializer pads or truncates them against the header.
pub fn parse_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => row.push(take(&mut field)),
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                row.push(take(&mut field));
                rows.push(take(&mut row));
            }
            _ => field.push(ch),
        }
    }

    // Input ending without a row terminator still has a pending row.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}
