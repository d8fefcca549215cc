//! src/core/types.rs
//!
//! Core type definitions for the shortcut catalog
//!
//! This module defines the fundamental types used throughout the application:
//! - `Category`: Language tag attached to each shortcut (universal, spanish, english)
//! - `CategoryFilter`: The currently selected category subset (all, or one category)
//! - `Record`: A single keyword→expansion catalog entry
//! - `QueryState`: Category filter + search text + current page, with reset rules
//! - `RowKey`: Synthetic per-row identity for transient UI markers
//!
//! All types implement serialization for export and are immutable once the
//! catalog is loaded.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Language category of a shortcut
///
/// Every record carries exactly one category. The set is fixed; the catalog
/// loader rejects anything else.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Valid in any language context
    Universal,
    /// Spanish-only shortcut
    Spanish,
    /// English-only shortcut
    English,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Universal => write!(f, "universal"),
            Category::Spanish => write!(f, "spanish"),
            Category::English => write!(f, "english"),
        }
    }
}

/// The currently selected category subset
///
/// `All` passes every record; `Only(c)` passes records whose category
/// equals `c` exactly.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CategoryFilter {
    /// No category restriction
    All,
    /// Restrict to a single category
    Only(Category),
}

impl CategoryFilter {
    /// Returns true when `category` passes this filter
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "all"),
            CategoryFilter::Only(c) => write!(f, "{}", c),
        }
    }
}

/// A single keyword→expansion catalog entry
///
/// The serialized field names (`keyword`, `expansion`, `category`) are part
/// of the JSON export contract and must not be renamed.
///
/// # Example
/// ```ignore
/// let record = Record {
///     keyword: "brb".to_string(),
///     expansion: "be right back".to_string(),
///     category: Category::English,
/// };
/// ```
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Record {
    /// The typed shortcut (non-empty, not guaranteed unique)
    pub keyword: String,

    /// The replacement text the shortcut expands to (non-empty)
    pub expansion: String,

    /// Language tag
    pub category: Category,
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {} [{}]", self.keyword, self.expansion, self.category)
    }
}

/// Synthetic identity of a row in the currently filtered set
///
/// Keywords are not guaranteed unique, so transient UI state (the "just
/// copied" marker) keys on keyword plus position within the filtered
/// sequence. A `RowKey` is only meaningful against the filtered set it was
/// derived from; re-filtering invalidates it.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct RowKey {
    /// Keyword of the row
    pub keyword: String,
    /// Zero-based position within the current filtered set
    pub position: usize,
}

impl RowKey {
    /// Builds the key for `record` at `position` in the filtered set
    pub fn new(record: &Record, position: usize) -> Self {
        Self {
            keyword: record.keyword.clone(),
            position,
        }
    }
}

/// User-driven query state: category filter, search text, current page
///
/// # Invariant
///
/// `page` is always ≥ 1, and any change to the category filter or the search
/// text resets it to 1. A stale page from a larger prior result could point
/// past the end of the new filtered set, so the reset happens inside the
/// setters rather than being left to callers.
#[derive(Clone, Debug)]
pub struct QueryState {
    category: CategoryFilter,
    search: String,
    page: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryState {
    /// Creates the initial state: all categories, empty search, page 1
    pub fn new() -> Self {
        Self {
            category: CategoryFilter::All,
            search: String::new(),
            page: 1,
        }
    }

    /// Current category filter
    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    /// Current search text (raw, untrimmed)
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Current page number (always ≥ 1)
    pub fn page(&self) -> usize {
        self.page
    }

    /// Changes the category filter and resets the page to 1
    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
        self.page = 1;
    }

    /// Changes the search text and resets the page to 1
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    /// Sets the page directly (clamped to ≥ 1)
    ///
    /// Used by pagination navigation; upper clamping against the page count
    /// is done by the caller, which knows the current filtered length.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }
}
