//! Clipboard bridge
//!
//! Copies a single expansion or the whole visible set to the system
//! clipboard. The write is asynchronous: the caller fires the operation
//! and the outcome arrives later through a completion callback, which
//! raises the user-visible notification and (for single copies) the
//! per-row "copied" marker.
//!
//! The actual clipboard is behind the [`ClipboardSink`] trait so the
//! bridge logic is testable without a display server.

use std::rc::Rc;

use gtk4::gdk;
use gtk4::prelude::DisplayExt;

use crate::core::error::ActionError;
use crate::core::types::{Record, RowKey};
use crate::ui::toast::ToastKind;

/// Completion callback for an asynchronous clipboard write
pub type CopyDone = Box<dyn FnOnce(Result<(), ActionError>) + 'static>;

/// Abstract clipboard write target
///
/// The production implementation talks to the GDK clipboard; tests use a
/// recording mock.
pub trait ClipboardSink {
    /// Writes `text` to the clipboard, calling `on_done` with the outcome
    ///
    /// `on_done` may be called synchronously or on a later main-loop
    /// iteration; callers must not rely on either.
    fn write_text(&self, text: &str, on_done: CopyDone);
}

/// GDK-backed clipboard
///
/// Fails when no display is available (headless session, missing
/// compositor); the success outcome is delivered on the next main-loop
/// iteration so the caller's control flow never blocks on clipboard IO.
#[derive(Default)]
pub struct DisplayClipboard;

impl DisplayClipboard {
    /// Creates the production sink
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardSink for DisplayClipboard {
    fn write_text(&self, text: &str, on_done: CopyDone) {
        match gdk::Display::default() {
            Some(display) => {
                display.clipboard().set_text(text);
                glib::idle_add_local_once(move || on_done(Ok(())));
            }
            None => on_done(Err(ActionError::ClipboardWrite(
                "no display available".to_string(),
            ))),
        }
    }
}

/// Builds the bulk-copy payload: every expansion joined with `\n`
///
/// No trailing newline. An empty input is rejected with
/// [`ActionError::EmptyResultSet`] so the caller can short-circuit before
/// touching the clipboard.
pub fn bulk_payload(records: &[Record]) -> Result<String, ActionError> {
    if records.is_empty() {
        return Err(ActionError::EmptyResultSet);
    }

    Ok(records
        .iter()
        .map(|r| r.expansion.as_str())
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Clipboard bridge: copy operations with toast + marker feedback
pub struct ClipboardBridge<S: ClipboardSink> {
    sink: S,
}

impl<S: ClipboardSink> ClipboardBridge<S> {
    /// Creates a bridge over the given sink
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Copies a single record's expansion verbatim
    ///
    /// On success, `on_copied` receives the row key (the caller sets the
    /// 1500 ms marker) and a success toast is raised. On failure only an
    /// error toast is raised; the marker is never set.
    pub fn copy_single(
        &self,
        record: &Record,
        key: RowKey,
        notify: Rc<dyn Fn(ToastKind, String)>,
        on_copied: Rc<dyn Fn(RowKey)>,
    ) {
        let keyword = record.keyword.clone();

        self.sink.write_text(
            &record.expansion,
            Box::new(move |outcome| match outcome {
                Ok(()) => {
                    on_copied(key);
                    notify(ToastKind::Success, format!("Copied \"{}\"", keyword));
                }
                Err(e) => notify(ToastKind::Error, e.to_string()),
            }),
        );
    }

    /// Copies every visible expansion as one newline-joined block
    ///
    /// An empty filtered set short-circuits with a single info toast and
    /// performs no clipboard write.
    pub fn copy_bulk(&self, records: &[Record], notify: Rc<dyn Fn(ToastKind, String)>) {
        let payload = match bulk_payload(records) {
            Ok(payload) => payload,
            Err(_) => {
                notify(
                    ToastKind::Info,
                    "No shortcuts to copy".to_string(),
                );
                return;
            }
        };

        let count = records.len();

        self.sink.write_text(
            &payload,
            Box::new(move |outcome| match outcome {
                Ok(()) => notify(
                    ToastKind::Success,
                    format!("Copied {} expansions", count),
                ),
                Err(e) => notify(ToastKind::Error, e.to_string()),
            }),
        );
    }
}
