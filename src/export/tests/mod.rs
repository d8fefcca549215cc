//! Export module tests
//!
//! Contains test suites for the serializers and the atomic file writer:
//! - Delimited-text (CSV) quoting, escaping, and the header contract
//! - Structured-text (JSON) field names and the empty-array case
//! - Atomic export-to-file round trips

#[cfg(test)]
mod csv_tests;
