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

//! Category dropdown component
//!
//! Selects the language subset shown in the list: all, universal,
//! spanish, or english.

use gtk4::DropDown;

use crate::core::types::{Category, CategoryFilter};

/// Dropdown entries, in display order
const ENTRIES: [&str; 4] = ["All languages", "Universal", "Spanish", "English"];

/// Category filter dropdown
pub struct CategoryDropdown {
    /// Root widget
    widget: DropDown,
}

impl Default for CategoryDropdown {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryDropdown {
    /// Creates the dropdown with "All languages" preselected
    pub fn new() -> Self {
        let widget = DropDown::from_strings(&ENTRIES);
        widget.set_selected(0);

        Self { widget }
    }

    /// Returns the root widget for adding to parent container
    pub fn widget(&self) -> &DropDown {
        &self.widget
    }

    /// Maps a dropdown index to the corresponding filter
    ///
    /// Out-of-range indices (GTK's `INVALID` sentinel) fall back to `All`.
    pub fn filter_for_index(index: u32) -> CategoryFilter {
        match index {
            1 => CategoryFilter::Only(Category::Universal),
            2 => CategoryFilter::Only(Category::Spanish),
            3 => CategoryFilter::Only(Category::English),
            _ => CategoryFilter::All,
        }
    }
}
