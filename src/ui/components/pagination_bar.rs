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

//! Pagination bar component
//!
//! Previous/next buttons with a "Page X of Y" label and a result count.
//! The navigation controls are hidden whenever the filtered set fits on a
//! single page (including the zero-result case).

use gtk4::{prelude::*, Box as GtkBox, Button, Label, Orientation};

use crate::core::paginate::Page;

/// Pagination controls for the record list
pub struct PaginationBar {
    /// Root widget
    widget: GtkBox,
    /// "Page X of Y" label
    page_label: Label,
    /// "N shortcuts" result counter
    count_label: Label,
    /// Previous-page button
    prev_button: Button,
    /// Next-page button
    next_button: Button,
}

impl Default for PaginationBar {
    fn default() -> Self {
        Self::new()
    }
}

impl PaginationBar {
    /// Creates the bar; call `update` to populate it
    pub fn new() -> Self {
        let widget = GtkBox::builder()
            .orientation(Orientation::Horizontal)
            .spacing(10)
            .margin_top(5)
            .margin_bottom(5)
            .build();

        let count_label = Label::builder().xalign(0.0).hexpand(true).build();
        count_label.add_css_class("dim-label");

        let prev_button = Button::with_label("◀ Previous");
        let page_label = Label::new(None);
        let next_button = Button::with_label("Next ▶");

        widget.append(&count_label);
        widget.append(&prev_button);
        widget.append(&page_label);
        widget.append(&next_button);

        Self {
            widget,
            page_label,
            count_label,
            prev_button,
            next_button,
        }
    }

    /// Refreshes labels, button sensitivity, and control visibility
    ///
    /// # Arguments
    /// * `page` - The current page slice
    /// * `current` - Current page number (1-based)
    /// * `filtered_count` - Total records in the filtered set
    pub fn update(&self, page: &Page, current: usize, filtered_count: usize) {
        self.count_label.set_label(&format!(
            "{} shortcut{}",
            filtered_count,
            if filtered_count == 1 { "" } else { "s" }
        ));

        let paged = page.is_paged();
        self.prev_button.set_visible(paged);
        self.next_button.set_visible(paged);
        self.page_label.set_visible(paged);

        if paged {
            self.page_label
                .set_label(&format!("Page {} of {}", current, page.total_pages));
            self.prev_button.set_sensitive(current > 1);
            self.next_button.set_sensitive(current < page.total_pages);
        }
    }

    /// Wires the previous-page button
    pub fn connect_prev(&self, handler: impl Fn() + 'static) {
        self.prev_button.connect_clicked(move |_| handler());
    }

    /// Wires the next-page button
    pub fn connect_next(&self, handler: impl Fn() + 'static) {
        self.next_button.connect_clicked(move |_| handler());
    }

    /// Returns the root widget for adding to parent container
    pub fn widget(&self) -> &GtkBox {
        &self.widget
    }
}
