//! Structured-text (JSON) serializer
//!
//! The record sequence is emitted as a pretty-printed JSON array with the
//! canonical field names `keyword`/`expansion`/`category`. The 2-space
//! indentation comes from serde_json's default pretty printer; the exact
//! width is cosmetic, not a contract.

use crate::core::types::Record;

/// Serializes `records` to a pretty-printed JSON array
///
/// Zero records yield the empty array `[]`. Serialization of this shape
/// cannot fail (no non-string keys, no non-finite floats), so the fallible
/// serde_json result is flattened to the empty-array fallback.
pub fn to_json(records: &[Record]) -> String {
    serde_json::to_string_pretty(records).unwrap_or_else(|_| "[]".to_string())
}
