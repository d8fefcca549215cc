//! Transient notification state (toasts)
//!
//! Process-wide "latest toast" state: each shown message carries a
//! monotonic id and auto-expires after [`TOAST_TIMEOUT_MS`], unless a newer
//! message supersedes it first. The expiry is a scheduled clear keyed on
//! the id, so a stale timer from a superseded toast is a no-op.
//!
//! This module holds only the state machine; the widget that renders it
//! lives in `components/toast.rs` and schedules the actual glib timeout.

use std::cell::{Cell, RefCell};

/// How long a toast stays visible before auto-expiring
pub const TOAST_TIMEOUT_MS: u64 = 3000;

/// How long the per-row "just copied" marker stays set
///
/// Independent of the toast timeout.
pub const COPY_MARKER_TIMEOUT_MS: u64 = 1500;

/// Severity of a toast message
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ToastKind {
    /// Action completed
    Success,
    /// Action failed
    Error,
    /// Nothing happened and that is fine (e.g. bulk copy on zero records)
    Info,
}

/// A single transient message
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Toast {
    /// Monotonic token identifying this message
    pub id: u64,
    /// Message text
    pub text: String,
    /// Severity
    pub kind: ToastKind,
}

/// Latest-toast state with monotonic ids
///
/// A new `show` always replaces the current toast. `clear_if_current` only
/// clears when the given id is still the live one, which is what makes
/// delayed clears from superseded toasts harmless.
#[derive(Default)]
pub struct ToastState {
    next_id: Cell<u64>,
    current: RefCell<Option<Toast>>,
}

impl ToastState {
    /// Creates empty toast state
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current toast and returns the new toast's id
    pub fn show(&self, kind: ToastKind, text: impl Into<String>) -> u64 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);

        *self.current.borrow_mut() = Some(Toast {
            id,
            text: text.into(),
            kind,
        });

        id
    }

    /// Current toast, if one is live
    pub fn current(&self) -> Option<Toast> {
        self.current.borrow().clone()
    }

    /// Clears the toast if `id` is still the live one
    ///
    /// Returns true when the clear happened. A stale id (the toast was
    /// superseded) leaves the newer toast untouched.
    pub fn clear_if_current(&self, id: u64) -> bool {
        let mut current = self.current.borrow_mut();
        match current.as_ref() {
            Some(toast) if toast.id == id => {
                *current = None;
                true
            }
            _ => false,
        }
    }
}
