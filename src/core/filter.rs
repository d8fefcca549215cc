//! Query engine: derives the filtered subset of the catalog
//!
//! Filtering is a pure function over the immutable record sequence, so it is
//! reentrant and needs no locking. The result always preserves catalog order.

use crate::core::types::{CategoryFilter, Record};

/// Filters `records` by category and free-text search
///
/// Two steps, applied in order:
///
/// 1. **Category**: unless the filter is `All`, keep only records whose
///    category matches exactly.
/// 2. **Text**: if `search` is non-empty (raw check, no trimming), keep
///    records where the lowercased search text is a substring of either the
///    keyword or the expansion. An empty search passes everything.
///
/// The output is a subsequence of `records` in the original order. Given
/// identical inputs the output is identical; filtering an already-filtered
/// result with the same arguments is a no-op.
///
/// # Example
///
/// ```
/// use shortcut_catalog::core::{filter_records, Category, CategoryFilter, Record};
///
/// let records = vec![Record {
///     keyword: "brb".to_string(),
///     expansion: "be right back".to_string(),
///     category: Category::English,
/// }];
///
/// let hits = filter_records(&records, CategoryFilter::All, "RIGHT");
/// assert_eq!(hits.len(), 1);
/// ```
pub fn filter_records(
    records: &[Record],
    category: CategoryFilter,
    search: &str,
) -> Vec<Record> {
    let search_lower = search.to_lowercase();

    records
        .iter()
        .filter(|record| category.matches(record.category))
        .filter(|record| {
            if search.is_empty() {
                return true;
            }

            record.keyword.to_lowercase().contains(&search_lower)
                || record.expansion.to_lowercase().contains(&search_lower)
        })
        .cloned()
        .collect()
}
