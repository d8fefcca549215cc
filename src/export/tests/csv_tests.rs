use crate::core::types::{Category, Record};
use crate::export::csv::{to_csv, CSV_HEADER};

fn record(keyword: &str, expansion: &str, category: Category) -> Record {
    Record {
        keyword: keyword.to_string(),
        expansion: expansion.to_string(),
        category,
    }
}

/// Minimal RFC4180 row parser used to verify re-parsability of the output
fn parse_quoted_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut chars = line.chars().peekable();
    let mut in_quotes = false;

    while let Some(c) = chars.next() {
        match c {
            '"' if !in_quotes => in_quotes = true,
            '"' if chars.peek() == Some(&'"') => {
                chars.next();
                field.push('"');
            }
            '"' => in_quotes = false,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut field));
            }
            other => field.push(other),
        }
    }
    fields.push(field);
    fields
}

#[test]
fn test_empty_set_emits_header_only() {
    assert_eq!(to_csv(&[]), format!("{}\n", CSV_HEADER));
}

#[test]
fn test_header_text() {
    assert_eq!(CSV_HEADER, "Shortcut,Expansion,Language");
}

#[test]
fn test_single_record_row() {
    let out = to_csv(&[record("brb", "be right back", Category::English)]);

    assert_eq!(
        out,
        "Shortcut,Expansion,Language\n\"brb\",\"be right back\",\"english\"\n"
    );
}

#[test]
fn test_field_order_is_keyword_expansion_category() {
    let out = to_csv(&[record("a", "b", Category::Spanish)]);
    let row = out.lines().nth(1).unwrap();

    assert_eq!(row, "\"a\",\"b\",\"spanish\"");
}

#[test]
fn test_embedded_quotes_are_doubled_and_reparsable() {
    // Round-trip property from the reference behaviour
    let out = to_csv(&[record("A1", "Hello, \"World\"", Category::English)]);
    let row = out.lines().nth(1).unwrap();

    assert_eq!(row, "\"A1\",\"Hello, \"\"World\"\"\",\"english\"");

    let fields = parse_quoted_row(row);
    assert_eq!(fields, vec!["A1", "Hello, \"World\"", "english"]);
}

#[test]
fn test_newlines_in_expansion_collapse_to_space() {
    let out = to_csv(&[record("sig", "Best regards,\nAlice", Category::Universal)]);

    // One header line + one record line, no row corruption
    assert_eq!(out.lines().count(), 2);
    assert!(out.contains("\"Best regards, Alice\""));
}

#[test]
fn test_one_line_per_record() {
    let records = vec![
        record("a", "one", Category::Universal),
        record("b", "two", Category::Spanish),
        record("c", "three", Category::English),
    ];
    let out = to_csv(&records);

    assert_eq!(out.lines().count(), 4);
    assert!(out.ends_with('\n'));
}
