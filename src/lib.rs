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

//! Shortcut Catalog
//!
//! A searchable browser for a read-only catalog of text-replacement
//! shortcuts (keyword → expansion, tagged by language), with a GTK4 GUI
//! and a CLI.
//!
//! # Features
//!
//! - **Filtering:** Language filter plus case-insensitive free-text search
//! - **Pagination:** Fixed-size pages with clamped navigation
//! - **Export:** CSV and JSON serialization of the filtered set
//! - **Clipboard:** Per-row and bulk copy with transient feedback
//! - **GTK4 Interface:** Modern, responsive graphical interface
//!
//! # Architecture
//!
//! - **`core`:** Business logic (types, filtering, pagination, errors)
//! - **`catalog`:** Record store (built-in catalog + JSON file loader)
//! - **`export`:** CSV/JSON serializers and atomic file writes
//! - **`ui`:** GTK4 GUI components (MVC pattern)
//!
//! # Examples
//!
//! ## Filtering the catalog
//!
//! ```
//! use shortcut_catalog::catalog;
//! use shortcut_catalog::core::{filter_records, CategoryFilter};
//!
//! let records = catalog::builtin()?;
//! let hits = filter_records(&records, CategoryFilter::All, "hola");
//! println!("Found {} shortcuts", hits.len());
//! # Ok::<(), shortcut_catalog::catalog::CatalogError>(())
//! ```
//!
//! ## Exporting
//!
//! ```
//! use shortcut_catalog::catalog;
//! use shortcut_catalog::export::to_csv;
//!
//! let records = catalog::builtin()?;
//! let csv = to_csv(&records);
//! assert!(csv.starts_with("Shortcut,Expansion,Language\n"));
//! # Ok::<(), shortcut_catalog::catalog::CatalogError>(())
//! ```
//!
//! ## Using the GUI
//!
//! ```no_run
//! use shortcut_catalog::{catalog, ui::App};
//!
//! let app = App::new(catalog::builtin()?);
//! app.run(); // Blocks until window closes
//! # Ok::<(), shortcut_catalog::catalog::CatalogError>(())
//! ```

pub mod catalog;
pub mod core;
pub mod export;
pub mod ui;

// Re-export commonly used types for convenience
pub use core::{Category, CategoryFilter, Record, RowKey};
