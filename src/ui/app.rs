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

//! GTK4 Application wrapper
//!
//! This module sets up the GTK4 application lifecycle and creates
//! the main window. It uses the Controller to derive the filtered,
//! paginated view and wires the components together.
//!
//! # Architecture
//!
//! ```text
//! App (GTK4 Application)
//!   ├─ Creates Controller over the loaded catalog
//!   ├─ Builds main window (search, dropdown, list, pagination, toast)
//!   └─ Connects components to Controller and ClipboardBridge
//! ```

use gtk4::prelude::*;
use gtk4::{gdk, Application, ApplicationWindow, Button, CssProvider, Orientation};
use std::rc::Rc;

use crate::core::types::Record;
use crate::export::ExportFormat;
use crate::ui::clipboard::{ClipboardBridge, DisplayClipboard};
use crate::ui::components::{
    CategoryDropdown, PaginationBar, RecordList, SearchBar, ToastArea,
};
use crate::ui::toast::ToastKind;
use crate::ui::{actions, Controller};

/// GTK4 Application for browsing the shortcut catalog
pub struct App {
    /// GTK4 Application instance
    app: Application,
    /// MVC Controller
    controller: Rc<Controller>,
}

impl App {
    /// Creates a new App over the given catalog
    ///
    /// # Arguments
    ///
    /// * `records` - The immutable catalog, already loaded and validated
    pub fn new(records: Vec<Record>) -> Self {
        let app = Application::builder()
            .application_id("org.shortcut-catalog.browser")
            .build();

        let controller = Rc::new(Controller::new(records));

        Self { app, controller }
    }

    /// Runs the GTK4 application
    ///
    /// This starts the GTK4 main loop and blocks until the window closes.
    pub fn run(self) {
        let controller = self.controller.clone();

        self.app.connect_activate(move |app| {
            Self::build_ui(app, controller.clone());
        });

        self.app.run_with_args::<&str>(&[]);
    }

    /// Loads custom CSS styling for the application
    fn load_css() {
        let provider = CssProvider::new();
        let css = include_str!("style.css");
        provider.load_from_string(css);

        if let Some(display) = gdk::Display::default() {
            gtk4::style_context_add_provider_for_display(
                &display,
                &provider,
                gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
            );
        }
    }

    /// Builds the main window UI
    fn build_ui(app: &Application, controller: Rc<Controller>) {
        Self::load_css();
        actions::setup_quit_action(app);

        let window = ApplicationWindow::builder()
            .application(app)
            .title("Shortcut Catalog")
            .default_width(900)
            .default_height(700)
            .build();

        let main_vbox = gtk4::Box::new(Orientation::Vertical, 10);
        main_vbox.set_margin_start(10);
        main_vbox.set_margin_end(10);
        main_vbox.set_margin_top(10);
        main_vbox.set_margin_bottom(10);

        // Top row: search + language dropdown
        let filter_row = gtk4::Box::new(Orientation::Horizontal, 10);
        let search_bar = SearchBar::new();
        let dropdown = CategoryDropdown::new();
        filter_row.append(search_bar.widget());
        filter_row.append(dropdown.widget());
        main_vbox.append(&filter_row);

        // Toolbar: bulk copy + exports
        let toolbar = gtk4::Box::new(Orientation::Horizontal, 10);
        let copy_all_button = Button::with_label("📋 Copy All");
        let export_csv_button = Button::with_label("💾 Export CSV");
        let export_json_button = Button::with_label("💾 Export JSON");
        toolbar.append(&copy_all_button);
        toolbar.append(&export_csv_button);
        toolbar.append(&export_json_button);
        main_vbox.append(&toolbar);

        // Record list + pagination + toast
        let record_list = Rc::new(RecordList::new());
        let pagination_bar = Rc::new(PaginationBar::new());
        let toast_area = Rc::new(ToastArea::new());

        let bridge = Rc::new(ClipboardBridge::new(DisplayClipboard::new()));

        // Shared notification callback
        let toast_for_notify = toast_area.clone();
        let notify: Rc<dyn Fn(ToastKind, String)> =
            Rc::new(move |kind, text| toast_for_notify.show(kind, text));

        // Per-row copy: wire before the first page render
        let bridge_for_copy = bridge.clone();
        let notify_for_copy = notify.clone();
        let record_list_for_marker = Rc::downgrade(&record_list);
        record_list.connect_copy(move |record, key| {
            eprintln!("📋 Copy: '{}'", record.keyword);

            let marker = record_list_for_marker.clone();
            let on_copied: Rc<dyn Fn(crate::core::types::RowKey)> =
                Rc::new(move |key| {
                    if let Some(list) = marker.upgrade() {
                        list.mark_copied(key);
                    }
                });

            bridge_for_copy.copy_single(record, key, notify_for_copy.clone(), on_copied);
        });

        main_vbox.append(record_list.widget());
        main_vbox.append(pagination_bar.widget());
        main_vbox.append(toast_area.widget());

        // Wire up search functionality
        let controller_for_search = controller.clone();
        let record_list_for_search = record_list.clone();
        let pagination_for_search = pagination_bar.clone();

        search_bar.widget().connect_search_changed(move |entry| {
            let query = entry.text().to_string();
            eprintln!("🔍 Search: '{}'", query);
            controller_for_search.set_search(&query);
            refresh_view(
                &controller_for_search,
                &record_list_for_search,
                &pagination_for_search,
            );
        });

        // Wire up language dropdown
        let controller_for_filter = controller.clone();
        let record_list_for_filter = record_list.clone();
        let pagination_for_filter = pagination_bar.clone();

        dropdown.widget().connect_selected_notify(move |dd| {
            let filter = CategoryDropdown::filter_for_index(dd.selected());
            eprintln!("🌐 Language filter: {}", filter);
            controller_for_filter.set_category(filter);
            refresh_view(
                &controller_for_filter,
                &record_list_for_filter,
                &pagination_for_filter,
            );
        });

        // Wire up pagination navigation
        let controller_for_prev = controller.clone();
        let record_list_for_prev = record_list.clone();
        let pagination_for_prev = pagination_bar.clone();

        pagination_bar.connect_prev(move || {
            controller_for_prev.go_prev();
            refresh_view(
                &controller_for_prev,
                &record_list_for_prev,
                &pagination_for_prev,
            );
        });

        let controller_for_next = controller.clone();
        let record_list_for_next = record_list.clone();
        let pagination_for_next = pagination_bar.clone();

        pagination_bar.connect_next(move || {
            controller_for_next.go_next();
            refresh_view(
                &controller_for_next,
                &record_list_for_next,
                &pagination_for_next,
            );
        });

        // Wire up bulk copy
        let controller_for_bulk = controller.clone();
        let bridge_for_bulk = bridge.clone();
        let notify_for_bulk = notify.clone();

        copy_all_button.connect_clicked(move |_| {
            let filtered = controller_for_bulk.filtered();
            eprintln!("📋 Copy all: {} records", filtered.len());
            bridge_for_bulk.copy_bulk(&filtered, notify_for_bulk.clone());
        });

        // Wire up export buttons
        for (button, format) in [
            (&export_csv_button, ExportFormat::Csv),
            (&export_json_button, ExportFormat::Json),
        ] {
            let controller_for_export = controller.clone();
            let window_for_export = window.clone();
            let notify_for_export = notify.clone();

            button.connect_clicked(move |_| {
                let notify_done = notify_for_export.clone();
                actions::save_export(
                    &window_for_export,
                    controller_for_export.clone(),
                    format,
                    move |outcome| match outcome {
                        Ok(()) => notify_done(ToastKind::Success, "Export saved".to_string()),
                        Err(e) => notify_done(ToastKind::Error, e),
                    },
                );
            });
        }

        // Keyboard navigation: Up/Down move, Enter copies the selected row
        use gtk4::EventControllerKey;

        let key_controller = EventControllerKey::new();
        let list_box_for_keys = record_list.list_box().clone();
        let record_list_for_keys = record_list.clone();
        let bridge_for_keys = bridge.clone();
        let notify_for_keys = notify.clone();

        key_controller.connect_key_pressed(move |_controller, key, _code, _modifier| {
            match key {
                gdk::Key::Up => {
                    if let Some(selected_row) = list_box_for_keys.selected_row() {
                        let current_index = selected_row.index();
                        if current_index > 0 {
                            if let Some(previous_row) =
                                list_box_for_keys.row_at_index(current_index - 1)
                            {
                                list_box_for_keys.select_row(Some(&previous_row));
                            }
                        }
                    }
                    glib::Propagation::Stop
                }
                gdk::Key::Down => {
                    if let Some(selected_row) = list_box_for_keys.selected_row() {
                        let current_index = selected_row.index();
                        if let Some(next_row) = list_box_for_keys.row_at_index(current_index + 1)
                        {
                            list_box_for_keys.select_row(Some(&next_row));
                        }
                    } else if let Some(first_row) = list_box_for_keys.row_at_index(0) {
                        list_box_for_keys.select_row(Some(&first_row));
                    }
                    glib::Propagation::Stop
                }
                gdk::Key::Return | gdk::Key::KP_Enter => {
                    if let Some(selected_row) = list_box_for_keys.selected_row() {
                        let index = selected_row.index() as usize;
                        if let (Some(record), Some(row_key)) = (
                            record_list_for_keys.record_at_index(index),
                            record_list_for_keys.row_key_at_index(index),
                        ) {
                            eprintln!("⏎ Copy selected: '{}'", record.keyword);

                            let marker = Rc::downgrade(&record_list_for_keys);
                            let on_copied: Rc<dyn Fn(crate::core::types::RowKey)> =
                                Rc::new(move |key| {
                                    if let Some(list) = marker.upgrade() {
                                        list.mark_copied(key);
                                    }
                                });

                            bridge_for_keys.copy_single(
                                &record,
                                row_key,
                                notify_for_keys.clone(),
                                on_copied,
                            );
                        }
                    }
                    glib::Propagation::Stop
                }
                _ => glib::Propagation::Proceed,
            }
        });

        record_list.list_box().add_controller(key_controller);
        record_list.list_box().set_can_focus(true);

        // Initial display
        refresh_view(&controller, &record_list, &pagination_bar);

        window.set_child(Some(&main_vbox));
        window.present();
    }
}

/// Re-derives the current page and pushes it into the view
///
/// Called after every query-state change (search, category, navigation).
fn refresh_view(
    controller: &Controller,
    record_list: &RecordList,
    pagination_bar: &PaginationBar,
) {
    let page = controller.page();
    pagination_bar.update(&page, controller.page_number(), controller.filtered_count());
    record_list.update_with_page(page.items, controller.page_offset());
}
