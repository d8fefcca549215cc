//! Delimited-text (CSV) serializer
//!
//! Emits the fixed three-column layout `Shortcut,Expansion,Language` with
//! RFC4180-style quoting: every field is double-quoted and embedded quotes
//! are doubled. The format is one line per record, so newlines inside an
//! expansion are collapsed to a single space before quoting — left alone
//! they would corrupt the row boundaries.

use crate::core::types::Record;

/// Header line of every export, terminated by a newline
pub const CSV_HEADER: &str = "Shortcut,Expansion,Language";

/// Serializes `records` to delimited text
///
/// The header is always present; zero records yield exactly the header
/// line. Field order is fixed: keyword, expansion, category. Each record
/// and the header end with a single `\n`.
pub fn to_csv(records: &[Record]) -> String {
    let mut out = String::with_capacity(64 + records.len() * 48);
    out.push_str(CSV_HEADER);
    out.push('\n');

    for record in records {
        out.push_str(&quote_field(&record.keyword));
        out.push(',');
        out.push_str(&quote_field(&collapse_newlines(&record.expansion)));
        out.push(',');
        out.push_str(&quote_field(&record.category.to_string()));
        out.push('\n');
    }

    out
}

/// Wraps a field in double quotes, doubling any embedded quotes
fn quote_field(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Replaces any line break (`\r\n`, `\n`, `\r`) with a single space
fn collapse_newlines(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_field_plain() {
        assert_eq!(quote_field("brb"), "\"brb\"");
    }

    #[test]
    fn test_quote_field_doubles_quotes() {
        assert_eq!(quote_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_collapse_newlines() {
        assert_eq!(collapse_newlines("a\nb"), "a b");
        assert_eq!(collapse_newlines("a\r\nb"), "a b");
        assert_eq!(collapse_newlines("a\rb"), "a b");
    }
}
