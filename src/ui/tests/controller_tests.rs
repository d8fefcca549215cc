// Copyright 2025 shortcut-catalog contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Controller tests
//!
//! Tests for the MVC Controller logic: filter state, page reset, paging,
//! and export of the filtered set.

use std::fs;

use tempfile::TempDir;

use crate::core::types::{Category, CategoryFilter, Record};
use crate::export::ExportFormat;
use crate::ui::Controller;

/// Helper: builds `n` distinct English records
fn records(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| Record {
            keyword: format!("kw{}", i),
            expansion: format!("expansion {}", i),
            category: Category::English,
        })
        .collect()
}

/// Helper: small mixed-language catalog
fn mixed_catalog() -> Vec<Record> {
    vec![
        Record {
            keyword: "brb".to_string(),
            expansion: "be right back".to_string(),
            category: Category::English,
        },
        Record {
            keyword: "hla".to_string(),
            expansion: "hola amigo".to_string(),
            category: Category::Spanish,
        },
        Record {
            keyword: "addr".to_string(),
            expansion: "Calle Mayor 5".to_string(),
            category: Category::Universal,
        },
    ]
}

#[test]
fn test_controller_starts_unfiltered_on_page_one() {
    let controller = Controller::new(mixed_catalog());

    assert_eq!(controller.record_count(), 3);
    assert_eq!(controller.filtered_count(), 3);
    assert_eq!(controller.page_number(), 1);
    assert_eq!(controller.category(), CategoryFilter::All);
}

#[test]
fn test_search_filters_and_resets_page() {
    let controller = Controller::with_page_size(records(25), 10);
    controller.go_next();
    assert_eq!(controller.page_number(), 2);

    controller.set_search("kw1");
    assert_eq!(controller.page_number(), 1, "search must reset the page");

    // "kw1" matches kw1, kw10..kw19
    assert_eq!(controller.filtered_count(), 11);
}

#[test]
fn test_category_change_resets_page() {
    let controller = Controller::with_page_size(records(25), 10);
    controller.go_next();

    controller.set_category(CategoryFilter::Only(Category::English));
    assert_eq!(controller.page_number(), 1);
}

#[test]
fn test_paging_through_catalog() {
    let controller = Controller::with_page_size(records(25), 10);

    let page = controller.page();
    assert_eq!(page.items.len(), 10);
    assert_eq!(page.total_pages, 3);

    controller.go_next();
    controller.go_next();
    let last = controller.page();
    assert_eq!(controller.page_number(), 3);
    assert_eq!(last.items.len(), 5);

    // Clamped at the end
    controller.go_next();
    assert_eq!(controller.page_number(), 3);
}

#[test]
fn test_go_prev_clamps_at_one() {
    let controller = Controller::with_page_size(records(25), 10);

    controller.go_prev();
    assert_eq!(controller.page_number(), 1);
}

#[test]
fn test_page_offset_tracks_current_page() {
    let controller = Controller::with_page_size(records(25), 10);
    assert_eq!(controller.page_offset(), 0);

    controller.go_next();
    assert_eq!(controller.page_offset(), 10);
}

#[test]
fn test_filtered_set_on_empty_search_is_whole_catalog() {
    let controller = Controller::new(mixed_catalog());

    assert_eq!(controller.filtered(), mixed_catalog());
}

#[test]
fn test_export_serializes_filtered_set_not_catalog() {
    let controller = Controller::new(mixed_catalog());
    controller.set_category(CategoryFilter::Only(Category::Spanish));

    let csv = controller.export(ExportFormat::Csv);
    assert!(csv.contains("\"hla\""));
    assert!(!csv.contains("\"brb\""), "filtered-out records must not export");
}

#[test]
fn test_export_empty_filtered_set_is_header_only() {
    let controller = Controller::new(mixed_catalog());
    controller.set_search("no such thing");

    let csv = controller.export(ExportFormat::Csv);
    assert_eq!(csv, "Shortcut,Expansion,Language\n");

    let json = controller.export(ExportFormat::Json);
    assert_eq!(json, "[]");
}

#[test]
fn test_export_filtered_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("out.json");

    let controller = Controller::new(mixed_catalog());
    controller.set_search("hola");
    controller.export_filtered_to(&path, ExportFormat::Json).unwrap();

    let back: Vec<Record> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(back.len(), 1);
    assert_eq!(back[0].keyword, "hla");
}
