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

//! Shortcut list component
//!
//! Displays the current page of shortcuts in a scrollable list. Each row
//! shows the keyword, expansion, and language, plus a per-row copy button.
//! A just-copied row shows a transient checkmark that clears after 1500 ms;
//! copying another row (or the same one again) supersedes the marker and
//! restarts the timer.

use gtk4::{prelude::*, Box as GtkBox, Button, Label, ListBox, Orientation, ScrolledWindow};
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
    time::Duration,
};

use crate::core::types::{Record, RowKey};
use crate::ui::toast::COPY_MARKER_TIMEOUT_MS;

/// Copy-button label in its resting state
const COPY_LABEL: &str = "📋";
/// Copy-button label while the copied marker is set
const COPIED_LABEL: &str = "✓";

/// Transient "just copied" marker
///
/// Holds the currently marked row's button so the scheduled clear can
/// restore it. The generation counter invalidates stale timers when a new
/// copy supersedes the marker before it expires.
#[derive(Default)]
struct CopyMarker {
    generation: Cell<u64>,
    current: RefCell<Option<(RowKey, Button)>>,
}

impl CopyMarker {
    /// Marks `button` as copied, clearing any previous marker
    ///
    /// Returns the new generation for the scheduled clear.
    fn set(&self, key: RowKey, button: Button) -> u64 {
        if let Some((_, prev)) = self.current.borrow_mut().take() {
            prev.set_label(COPY_LABEL);
            prev.remove_css_class("copied");
        }

        button.set_label(COPIED_LABEL);
        button.add_css_class("copied");
        *self.current.borrow_mut() = Some((key, button));

        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        generation
    }

    /// Clears the marker if `generation` is still the live one
    fn clear_if_current(&self, generation: u64) {
        if self.generation.get() != generation {
            return;
        }
        if let Some((_, button)) = self.current.borrow_mut().take() {
            button.set_label(COPY_LABEL);
            button.remove_css_class("copied");
        }
    }
}

/// Callback invoked when the user asks to copy a row
pub type CopyHandler = Rc<dyn Fn(&Record, RowKey)>;

/// Displays a scrollable page of shortcut records
pub struct RecordList {
    /// Root widget (scrollable container)
    widget: ScrolledWindow,
    /// List box containing rows
    list_box: ListBox,
    /// Cache of the currently displayed page
    current_records: RefCell<Vec<Record>>,
    /// Offset of the page within the filtered set (row keys are
    /// positions in the filtered set, not in the page)
    page_offset: Cell<usize>,
    /// Copy buttons of the current page, by row index
    copy_buttons: RefCell<Vec<Button>>,
    /// Transient copied marker
    marker: Rc<CopyMarker>,
    /// Copy request handler, wired by the parent
    on_copy: RefCell<Option<CopyHandler>>,
}

impl Default for RecordList {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordList {
    /// Creates an empty record list
    pub fn new() -> Self {
        let scrolled_window = ScrolledWindow::builder()
            .hexpand(true)
            .vexpand(true)
            .build();

        let list_box = ListBox::builder()
            .selection_mode(gtk4::SelectionMode::Single)
            .build();

        scrolled_window.set_child(Some(&list_box));

        Self {
            widget: scrolled_window,
            list_box,
            current_records: RefCell::new(Vec::new()),
            page_offset: Cell::new(0),
            copy_buttons: RefCell::new(Vec::new()),
            marker: Rc::new(CopyMarker::default()),
            on_copy: RefCell::new(None),
        }
    }

    /// Registers the copy handler invoked by row buttons and Enter
    ///
    /// Rows capture the handler when they are built, so wire this before
    /// the first `update_with_page` call.
    pub fn connect_copy(&self, handler: impl Fn(&Record, RowKey) + 'static) {
        *self.on_copy.borrow_mut() = Some(Rc::new(handler));
    }

    /// Replaces the displayed page
    ///
    /// # Arguments
    /// * `records` - The page items, in filtered-set order
    /// * `page_offset` - Position of the page's first item in the filtered set
    pub fn update_with_page(&self, records: Vec<Record>, page_offset: usize) {
        // Clear existing rows; any copied marker dies with them
        while let Some(child) = self.list_box.first_child() {
            self.list_box.remove(&child);
        }
        self.copy_buttons.borrow_mut().clear();
        self.marker.current.borrow_mut().take();

        self.page_offset.set(page_offset);

        for (index, record) in records.iter().enumerate() {
            let row = self.create_row(record, index);
            self.list_box.append(&row);
        }

        *self.current_records.borrow_mut() = records;
    }

    /// Create a single row widget for a record
    fn create_row(&self, record: &Record, index: usize) -> GtkBox {
        let row = GtkBox::builder()
            .orientation(Orientation::Horizontal)
            .spacing(20)
            .margin_start(10)
            .margin_end(10)
            .margin_top(5)
            .margin_bottom(5)
            .build();

        // Alternating background colour for every other row
        if index % 2 == 0 {
            row.add_css_class("even-row");
        } else {
            row.add_css_class("odd-row");
        }

        let keyword_label = Label::builder()
            .label(&record.keyword)
            .width_chars(12)
            .xalign(0.0)
            .build();
        keyword_label.add_css_class("keyword");

        // Expansions can be multi-line; show the first line and put the
        // full text in a tooltip
        let first_line = record.expansion.lines().next().unwrap_or_default();
        let expansion_label = Label::builder()
            .label(first_line)
            .xalign(0.0)
            .hexpand(true)
            .build();
        if record.expansion != first_line || record.expansion.len() > 40 {
            expansion_label.set_has_tooltip(true);
            expansion_label.set_tooltip_text(Some(&record.expansion));
        }

        let category_label = Label::builder()
            .label(record.category.to_string())
            .width_chars(9)
            .xalign(0.0)
            .build();
        category_label.add_css_class("dim-label");

        let copy_button = Button::with_label(COPY_LABEL);
        copy_button.add_css_class("flat");
        copy_button.set_tooltip_text(Some("Copy expansion"));

        let on_copy = self.on_copy.borrow().clone();
        let record_for_copy = record.clone();
        let key = RowKey::new(record, self.page_offset.get() + index);

        copy_button.connect_clicked(move |_| {
            if let Some(handler) = &on_copy {
                handler(&record_for_copy, key.clone());
            }
        });

        self.copy_buttons.borrow_mut().push(copy_button.clone());

        row.append(&keyword_label);
        row.append(&expansion_label);
        row.append(&category_label);
        row.append(&copy_button);

        row
    }

    /// Sets the "just copied" marker for the given row key
    ///
    /// Clears any previous marker and schedules the auto-clear after
    /// 1500 ms. A newer marker invalidates the pending clear.
    pub fn mark_copied(&self, key: RowKey) {
        let index = key.position.saturating_sub(self.page_offset.get());
        let button = match self.copy_buttons.borrow().get(index) {
            Some(button) => button.clone(),
            // The list was re-filtered between copy and completion
            None => return,
        };

        let generation = self.marker.set(key, button);
        let marker = self.marker.clone();

        glib::timeout_add_local_once(Duration::from_millis(COPY_MARKER_TIMEOUT_MS), move || {
            marker.clear_if_current(generation);
        });
    }

    /// Returns the record at the given display index on the current page
    pub fn record_at_index(&self, index: usize) -> Option<Record> {
        self.current_records.borrow().get(index).cloned()
    }

    /// Returns the row key for the given display index on the current page
    pub fn row_key_at_index(&self, index: usize) -> Option<RowKey> {
        self.current_records
            .borrow()
            .get(index)
            .map(|record| RowKey::new(record, self.page_offset.get() + index))
    }

    /// Returns the root widget for adding to parent container
    pub fn widget(&self) -> &ScrolledWindow {
        &self.widget
    }

    /// Get a reference to the internal ListBox widget
    ///
    /// Used for connecting signals (row selection, keyboard navigation).
    pub fn list_box(&self) -> &ListBox {
        &self.list_box
    }

    /// Returns count of currently displayed records
    pub fn count(&self) -> usize {
        self.current_records.borrow().len()
    }
}
