//! Paginator: slices a filtered sequence into fixed-size pages
//!
//! Pagination is total: any page number against any input yields a valid
//! (possibly empty) page. Out-of-range pages clip silently; navigation
//! clamps instead of erroring.

use crate::core::types::Record;

/// Page size used by the application (records per page)
pub const PAGE_SIZE: usize = 100;

/// One page of a filtered record sequence
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Page {
    /// Records on this page, in filtered-set order
    pub items: Vec<Record>,
    /// Total number of pages for the filtered set (0 when it is empty)
    pub total_pages: usize,
}

impl Page {
    /// True when the filtered set spans more than one page
    ///
    /// The pagination controls are hidden otherwise, including the
    /// zero-result case where `total_pages == 0`.
    pub fn is_paged(&self) -> bool {
        self.total_pages > 1
    }
}

/// Slices `filtered` into the page numbered `page` (1-based)
///
/// `total_pages` is `ceil(len / page_size)`; an empty input yields zero
/// pages and an empty item list. The slice is half-open,
/// `[(page-1)*page_size, page*page_size)`, with the end clipped to the
/// sequence length. A page past the end yields an empty item list, never
/// an error.
///
/// Concatenating pages `1..=total_pages` reconstructs `filtered` exactly.
pub fn paginate(filtered: &[Record], page_size: usize, page: usize) -> Page {
    let total_pages = filtered.len().div_ceil(page_size);

    let start = (page.max(1) - 1).saturating_mul(page_size);
    let end = start.saturating_add(page_size).min(filtered.len());

    let items = if start < filtered.len() {
        filtered[start..end].to_vec()
    } else {
        Vec::new()
    };

    Page { items, total_pages }
}

/// Next page number: clamps to `total_pages` (no-op on the last page)
pub fn next_page(current: usize, total_pages: usize) -> usize {
    (current + 1).min(total_pages.max(1))
}

/// Previous page number: clamps to 1 (no-op on the first page)
pub fn prev_page(current: usize) -> usize {
    current.saturating_sub(1).max(1)
}
