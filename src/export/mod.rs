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

//! Export module
//!
//! Serializes a record sequence (typically the currently filtered set, not
//! the full catalog) to two external formats:
//! - Delimited text (CSV, `text/csv`) — see `csv.rs`
//! - Structured text (JSON, `application/json`) — see `json.rs`
//!
//! Both serializers are pure and total: an empty input yields the
//! header-only / empty-array output rather than an error. File writing is
//! a thin atomic-write wrapper around the serializers.

pub mod csv;
pub mod json;

use std::io::Write;
use std::path::Path;

use atomic_write_file::AtomicWriteFile;
use clap::ValueEnum;

use crate::core::types::Record;

pub use csv::{to_csv, CSV_HEADER};
pub use json::to_json;

/// Suggested filename for delimited-text downloads
pub const CSV_FILENAME: &str = "shortcuts.csv";
/// Suggested filename for structured-text downloads
pub const JSON_FILENAME: &str = "shortcuts.json";

/// Export output format
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ExportFormat {
    /// Delimited text (`text/csv`)
    Csv,
    /// Structured text (`application/json`)
    Json,
}

impl ExportFormat {
    /// Serializes `records` in this format
    pub fn serialize(&self, records: &[Record]) -> String {
        match self {
            ExportFormat::Csv => to_csv(records),
            ExportFormat::Json => to_json(records),
        }
    }

    /// Suggested filename for a file-save dialog
    pub fn suggested_filename(&self) -> &'static str {
        match self {
            ExportFormat::Csv => CSV_FILENAME,
            ExportFormat::Json => JSON_FILENAME,
        }
    }
}

/// Writes `records` to `path` in the given format
///
/// The write is atomic: the file appears complete or not at all, never
/// partially written.
pub fn export_to(path: &Path, records: &[Record], format: ExportFormat) -> std::io::Result<()> {
    let content = format.serialize(records);

    let mut file = AtomicWriteFile::options().open(path)?;
    file.write_all(content.as_bytes())?;
    file.commit()?;

    Ok(())
}

#[cfg(test)]
mod tests;
