//! Clipboard bridge tests
//!
//! Exercises the copy logic over a recording mock sink: payload shape,
//! notifications, the copied marker, and the empty-set short circuit.

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::error::ActionError;
use crate::core::types::{Category, Record, RowKey};
use crate::ui::clipboard::{bulk_payload, ClipboardBridge, ClipboardSink, CopyDone};
use crate::ui::toast::ToastKind;

/// Mock sink recording every write; completes synchronously
struct MockSink {
    writes: Rc<RefCell<Vec<String>>>,
    fail: bool,
}

impl MockSink {
    fn new(writes: Rc<RefCell<Vec<String>>>) -> Self {
        Self { writes, fail: false }
    }

    fn failing(writes: Rc<RefCell<Vec<String>>>) -> Self {
        Self { writes, fail: true }
    }
}

impl ClipboardSink for MockSink {
    fn write_text(&self, text: &str, on_done: CopyDone) {
        if self.fail {
            on_done(Err(ActionError::ClipboardWrite("denied".to_string())));
            return;
        }
        self.writes.borrow_mut().push(text.to_string());
        on_done(Ok(()));
    }
}

fn record(keyword: &str, expansion: &str) -> Record {
    Record {
        keyword: keyword.to_string(),
        expansion: expansion.to_string(),
        category: Category::Universal,
    }
}

/// Helper: collects notifications raised during a test
fn notify_recorder() -> (
    Rc<RefCell<Vec<(ToastKind, String)>>>,
    Rc<dyn Fn(ToastKind, String)>,
) {
    let log: Rc<RefCell<Vec<(ToastKind, String)>>> = Rc::new(RefCell::new(Vec::new()));
    let log_for_notify = log.clone();
    let notify: Rc<dyn Fn(ToastKind, String)> =
        Rc::new(move |kind, text| log_for_notify.borrow_mut().push((kind, text)));
    (log, notify)
}

#[test]
fn test_bulk_payload_joins_with_newlines() {
    let records = vec![record("a", "one"), record("b", "two"), record("c", "three")];

    let payload = bulk_payload(&records).unwrap();
    assert_eq!(payload, "one\ntwo\nthree");
    assert!(!payload.ends_with('\n'), "no trailing newline");
}

#[test]
fn test_bulk_payload_rejects_empty_set() {
    let err = bulk_payload(&[]).unwrap_err();
    assert!(matches!(err, ActionError::EmptyResultSet));
}

#[test]
fn test_copy_single_copies_expansion_verbatim() {
    let writes = Rc::new(RefCell::new(Vec::new()));
    let bridge = ClipboardBridge::new(MockSink::new(writes.clone()));
    let (toasts, notify) = notify_recorder();

    let rec = record("sig", "Best regards,\nAlice");
    let copied: Rc<RefCell<Vec<RowKey>>> = Rc::new(RefCell::new(Vec::new()));
    let copied_log = copied.clone();

    bridge.copy_single(
        &rec,
        RowKey::new(&rec, 3),
        notify,
        Rc::new(move |key| copied_log.borrow_mut().push(key)),
    );

    // No escaping or transformation of the payload
    assert_eq!(writes.borrow().as_slice(), ["Best regards,\nAlice"]);
    assert_eq!(copied.borrow().len(), 1);
    assert_eq!(copied.borrow()[0].position, 3);

    let toasts = toasts.borrow();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].0, ToastKind::Success);
}

#[test]
fn test_copy_single_failure_raises_error_and_no_marker() {
    let writes = Rc::new(RefCell::new(Vec::new()));
    let bridge = ClipboardBridge::new(MockSink::failing(writes.clone()));
    let (toasts, notify) = notify_recorder();

    let rec = record("brb", "be right back");
    let copied: Rc<RefCell<Vec<RowKey>>> = Rc::new(RefCell::new(Vec::new()));
    let copied_log = copied.clone();

    bridge.copy_single(
        &rec,
        RowKey::new(&rec, 0),
        notify,
        Rc::new(move |key| copied_log.borrow_mut().push(key)),
    );

    assert!(writes.borrow().is_empty());
    assert!(copied.borrow().is_empty(), "marker never set on failure");

    let toasts = toasts.borrow();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].0, ToastKind::Error);
}

#[test]
fn test_copy_bulk_joins_visible_expansions() {
    let writes = Rc::new(RefCell::new(Vec::new()));
    let bridge = ClipboardBridge::new(MockSink::new(writes.clone()));
    let (toasts, notify) = notify_recorder();

    let records = vec![record("a", "uno"), record("b", "dos")];
    bridge.copy_bulk(&records, notify);

    assert_eq!(writes.borrow().as_slice(), ["uno\ndos"]);

    let toasts = toasts.borrow();
    assert_eq!(toasts[0].0, ToastKind::Success);
    assert!(toasts[0].1.contains('2'), "success toast reports the count");
}

#[test]
fn test_copy_bulk_empty_set_short_circuits() {
    // Reference scenario: one informational notification, zero writes
    let writes = Rc::new(RefCell::new(Vec::new()));
    let bridge = ClipboardBridge::new(MockSink::new(writes.clone()));
    let (toasts, notify) = notify_recorder();

    bridge.copy_bulk(&[], notify);

    assert!(writes.borrow().is_empty(), "no clipboard write on empty set");
    let toasts = toasts.borrow();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].0, ToastKind::Info);
}

#[test]
fn test_copy_bulk_failure_raises_error() {
    let writes = Rc::new(RefCell::new(Vec::new()));
    let bridge = ClipboardBridge::new(MockSink::failing(writes));
    let (toasts, notify) = notify_recorder();

    bridge.copy_bulk(&[record("a", "uno")], notify);

    let toasts = toasts.borrow();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].0, ToastKind::Error);
}
