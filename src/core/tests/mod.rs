//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Type tests (Category, Record, QueryState, RowKey)
//! - Query engine tests
//! - Pagination tests

#[cfg(test)]
mod types_tests;
