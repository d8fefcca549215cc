use crate::core::types::{Category, CategoryFilter, QueryState, Record, RowKey};

fn sample_record() -> Record {
    Record {
        keyword: "brb".to_string(),
        expansion: "be right back".to_string(),
        category: Category::English,
    }
}

#[test]
fn test_category_display() {
    assert_eq!(format!("{}", Category::Universal), "universal");
    assert_eq!(format!("{}", Category::Spanish), "spanish");
    assert_eq!(format!("{}", Category::English), "english");
}

#[test]
fn test_category_filter_all_matches_everything() {
    assert!(CategoryFilter::All.matches(Category::Universal));
    assert!(CategoryFilter::All.matches(Category::Spanish));
    assert!(CategoryFilter::All.matches(Category::English));
}

#[test]
fn test_category_filter_only_matches_exactly() {
    let filter = CategoryFilter::Only(Category::Spanish);

    assert!(filter.matches(Category::Spanish));
    assert!(!filter.matches(Category::English));
    assert!(!filter.matches(Category::Universal));
}

#[test]
fn test_record_serializes_canonical_field_names() {
    let json = serde_json::to_string(&sample_record()).unwrap();

    assert!(json.contains("\"keyword\""));
    assert!(json.contains("\"expansion\""));
    assert!(json.contains("\"category\""));
    assert!(json.contains("\"english\""), "category should serialize lowercase");
}

#[test]
fn test_record_json_round_trip() {
    let record = sample_record();
    let json = serde_json::to_string(&record).unwrap();
    let back: Record = serde_json::from_str(&json).unwrap();

    assert_eq!(back, record);
}

#[test]
fn test_query_state_starts_at_page_one() {
    let state = QueryState::new();

    assert_eq!(state.page(), 1);
    assert_eq!(state.category(), CategoryFilter::All);
    assert_eq!(state.search(), "");
}

#[test]
fn test_search_change_resets_page() {
    let mut state = QueryState::new();
    state.set_page(4);
    assert_eq!(state.page(), 4);

    state.set_search("hola");
    assert_eq!(state.page(), 1, "search change must reset to page 1");
}

#[test]
fn test_category_change_resets_page() {
    let mut state = QueryState::new();
    state.set_page(3);

    state.set_category(CategoryFilter::Only(Category::Spanish));
    assert_eq!(state.page(), 1, "category change must reset to page 1");
}

#[test]
fn test_set_page_clamps_to_one() {
    let mut state = QueryState::new();
    state.set_page(0);

    assert_eq!(state.page(), 1);
}

#[test]
fn test_row_key_distinguishes_duplicate_keywords() {
    let record = sample_record();

    let first = RowKey::new(&record, 0);
    let second = RowKey::new(&record, 7);

    assert_ne!(first, second, "same keyword at different positions differs");
    assert_eq!(first, RowKey::new(&record, 0));
}
