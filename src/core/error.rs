use thiserror::Error;

/// Errors raised by user-triggered catalog actions.
///
/// None of these are fatal: every variant is caught at the point of the
/// action and surfaced as a notification, never propagated to terminate
/// the session.
#[derive(Debug, Error)]
pub enum ActionError {
    /// Clipboard write failed (permission denied or environment unsupported).
    #[error("Clipboard write failed: {0}")]
    ClipboardWrite(String),
    /// A bulk action was attempted with zero matching records.
    #[error("No shortcuts match the current filter")]
    EmptyResultSet,
}
