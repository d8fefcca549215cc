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

//! src/core/mod.rs
//!
//! Core business logic module
//!
//! This module contains the fundamental data structures and algorithms
//! for catalog browsing, including:
//! - Type definitions for records, categories, and query state
//! - Category + free-text filtering
//! - Fixed-size pagination with clamped navigation
//! - The action error taxonomy
//!
//! All business logic is isolated from UI and I/O concerns to enable
//! comprehensive unit testing without requiring a display server.

pub mod error;
pub mod filter;
pub mod paginate;
pub mod types;

pub use error::ActionError;
pub use filter::filter_records;
pub use paginate::{next_page, paginate, prev_page, Page, PAGE_SIZE};
pub use types::*;

#[cfg(test)]
mod tests;
