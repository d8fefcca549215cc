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

//! Toast area component
//!
//! Renders the latest toast from [`ToastState`] in a revealer at the
//! bottom of the window and schedules its auto-expiry. Superseded toasts
//! leave their timers behind; those fire against a stale id and do
//! nothing.

use gtk4::{prelude::*, Label, Revealer, RevealerTransitionType};
use std::{rc::Rc, time::Duration};

use crate::ui::toast::{ToastKind, ToastState, TOAST_TIMEOUT_MS};

/// Toast display area
pub struct ToastArea {
    /// Root widget
    widget: Revealer,
    /// Message label
    label: Label,
    /// Latest-toast state
    state: Rc<ToastState>,
}

impl Default for ToastArea {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastArea {
    /// Creates a hidden toast area
    pub fn new() -> Self {
        let label = Label::builder()
            .margin_top(8)
            .margin_bottom(8)
            .margin_start(12)
            .margin_end(12)
            .build();
        label.add_css_class("toast");

        let widget = Revealer::builder()
            .transition_type(RevealerTransitionType::SlideUp)
            .reveal_child(false)
            .child(&label)
            .build();

        Self {
            widget,
            label,
            state: Rc::new(ToastState::new()),
        }
    }

    /// Shows a toast, replacing the current one
    ///
    /// The message auto-expires after 3000 ms unless superseded first.
    pub fn show(&self, kind: ToastKind, text: String) {
        let id = self.state.show(kind, text.clone());

        self.label.set_label(&text);
        for class in ["toast-success", "toast-error", "toast-info"] {
            self.label.remove_css_class(class);
        }
        self.label.add_css_class(match kind {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
            ToastKind::Info => "toast-info",
        });
        self.widget.set_reveal_child(true);

        let state = self.state.clone();
        let revealer = self.widget.clone();
        glib::timeout_add_local_once(Duration::from_millis(TOAST_TIMEOUT_MS), move || {
            if state.clear_if_current(id) {
                revealer.set_reveal_child(false);
            }
        });
    }

    /// Returns the root widget for adding to parent container
    pub fn widget(&self) -> &Revealer {
        &self.widget
    }
}
