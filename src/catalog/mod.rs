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

//! Record store: loads the immutable catalog
//!
//! The catalog is supplied once at startup and never mutated afterwards.
//! Two sources exist: the built-in catalog embedded at compile time, and a
//! user-supplied JSON file (same shape) selected with `--catalog`. Loaded
//! records are validated: an empty keyword or expansion is a load error,
//! never silently accepted.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::types::Record;

/// Built-in catalog, embedded at compile time
const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

/// Errors that can occur while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file does not exist.
    #[error("Catalog file not found: {0}")]
    NotFound(PathBuf),
    /// Catalog file is not valid JSON of the expected shape.
    #[error("Failed to parse catalog: {0}")]
    Parse(String),
    /// A record violates the catalog invariants.
    #[error("Invalid record at index {index}: {reason}")]
    InvalidRecord {
        /// Zero-based position in the loaded sequence
        index: usize,
        /// Human-readable violation
        reason: String,
    },
    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Returns the built-in catalog
///
/// The embedded asset is parsed and validated like any external file, so a
/// bad build asset surfaces as an error instead of a panic.
pub fn builtin() -> Result<Vec<Record>, CatalogError> {
    parse_catalog(BUILTIN_CATALOG)
}

/// Loads a catalog from a JSON file
///
/// # Arguments
///
/// * `path` - Path to a JSON array of `{keyword, expansion, category}` objects
///
/// # Returns
///
/// * `Ok(Vec<Record>)` - The validated record sequence in file order
/// * `Err(CatalogError)` - File missing, unparsable, or invariant violation
pub fn load_catalog(path: &Path) -> Result<Vec<Record>, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    parse_catalog(&content)
}

/// Parses and validates catalog JSON
fn parse_catalog(content: &str) -> Result<Vec<Record>, CatalogError> {
    let records: Vec<Record> =
        serde_json::from_str(content).map_err(|e| CatalogError::Parse(e.to_string()))?;

    for (index, record) in records.iter().enumerate() {
        if record.keyword.is_empty() {
            return Err(CatalogError::InvalidRecord {
                index,
                reason: "keyword is empty".to_string(),
            });
        }
        if record.expansion.is_empty() {
            return Err(CatalogError::InvalidRecord {
                index,
                reason: "expansion is empty".to_string(),
            });
        }
    }

    Ok(records)
}
