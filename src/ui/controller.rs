//! MVC Controller - Mediates between the record store and the GTK4 view
//!
//! # Responsibilities
//!
//! - Hold the immutable catalog and the mutable query state
//! - Derive the filtered set and the current page for the view
//! - Enforce the page-reset invariant on filter changes
//! - Serialize the filtered set for export
//!
//! # Architecture
//!
//! The Controller knows nothing about GTK4 widgets. This keeps the query
//! logic separate from presentation and testable without a display server.

use std::cell::RefCell;
use std::path::Path;

use crate::core::{
    filter_records, next_page, paginate, prev_page, CategoryFilter, Page, QueryState, Record,
    PAGE_SIZE,
};
use crate::export::{export_to, ExportFormat};

/// MVC Controller coordinating the catalog and the view
///
/// The catalog is read-only after construction; the only mutable state is
/// the [`QueryState`] behind a `RefCell`.
pub struct Controller {
    /// Immutable catalog, in load order
    records: Vec<Record>,
    /// Category filter + search text + current page
    state: RefCell<QueryState>,
    /// Records per page
    page_size: usize,
}

impl Controller {
    /// Creates a Controller over the given catalog with the standard page size
    pub fn new(records: Vec<Record>) -> Self {
        Self::with_page_size(records, PAGE_SIZE)
    }

    /// Creates a Controller with an explicit page size
    ///
    /// Used by the CLI (`--page-size`) and by tests that exercise
    /// pagination without building 100-record fixtures.
    pub fn with_page_size(records: Vec<Record>, page_size: usize) -> Self {
        Self {
            records,
            state: RefCell::new(QueryState::new()),
            page_size: page_size.max(1),
        }
    }

    /// Total number of records in the catalog (unfiltered)
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Current search text
    pub fn search(&self) -> String {
        self.state.borrow().search().to_string()
    }

    /// Current category filter
    pub fn category(&self) -> CategoryFilter {
        self.state.borrow().category()
    }

    /// Current page number (always ≥ 1)
    pub fn page_number(&self) -> usize {
        self.state.borrow().page()
    }

    /// Updates the search text
    ///
    /// Resets the current page to 1; a stale page from a larger prior
    /// result could reference nothing in the new filtered set.
    pub fn set_search(&self, text: &str) {
        self.state.borrow_mut().set_search(text);
    }

    /// Updates the category filter (resets the current page to 1)
    pub fn set_category(&self, category: CategoryFilter) {
        self.state.borrow_mut().set_category(category);
    }

    /// Derives the filtered set for the current query state
    ///
    /// Pure over the immutable catalog: preserves order, never fails.
    pub fn filtered(&self) -> Vec<Record> {
        let state = self.state.borrow();
        filter_records(&self.records, state.category(), state.search())
    }

    /// Number of records passing the current filters
    pub fn filtered_count(&self) -> usize {
        self.filtered().len()
    }

    /// Slices the current page out of the filtered set
    pub fn page(&self) -> Page {
        let filtered = self.filtered();
        paginate(&filtered, self.page_size, self.page_number())
    }

    /// Zero-based offset of the current page within the filtered set
    ///
    /// Row keys use positions within the whole filtered set, not within
    /// the page, so the view needs this to build them.
    pub fn page_offset(&self) -> usize {
        (self.page_number() - 1) * self.page_size
    }

    /// Advances to the next page (clamped; no-op on the last page)
    pub fn go_next(&self) {
        let total = self.page().total_pages;
        let mut state = self.state.borrow_mut();
        let next = next_page(state.page(), total);
        state.set_page(next);
    }

    /// Goes back one page (clamped; no-op on the first page)
    pub fn go_prev(&self) {
        let mut state = self.state.borrow_mut();
        let prev = prev_page(state.page());
        state.set_page(prev);
    }

    /// Serializes the current filtered set in the given format
    pub fn export(&self, format: ExportFormat) -> String {
        format.serialize(&self.filtered())
    }

    /// Writes the current filtered set to `path` in the given format
    ///
    /// Empty filtered sets are tolerated: the output is the header-only /
    /// empty-array document, never an error.
    pub fn export_filtered_to(&self, path: &Path, format: ExportFormat) -> std::io::Result<()> {
        export_to(path, &self.filtered(), format)
    }
}
