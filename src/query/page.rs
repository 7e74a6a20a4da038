// src/query/page.rs
//
// Page Slicer
//
// Pages are 1-based. An out-of-range page clips to an empty window and
// is never an error; an empty collection has zero pages.

use crate::domain::Character;

/// The page sizes the host UI may select from
pub const PAGE_SIZES: [usize; 4] = [5, 10, 20, 50];

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Number of pages needed to show `len` records at `page_size` each.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size)
}

/// The contiguous window `[(page - 1) * page_size, page * page_size)`,
/// clipped to the collection bounds.
pub fn page_window(records: &[Character], page: usize, page_size: usize) -> &[Character] {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= records.len() {
        return &[];
    }
    let end = (start + page_size).min(records.len());
    &records[start..end]
}
