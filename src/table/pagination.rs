//! Pagination over an ordered sequence.

/// One page of a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// The contiguous slice for this page, clipped to sequence bounds.
    pub items: &'a [T],
    /// Total number of items across all pages.
    pub total_items: usize,
    /// Total number of pages.
    pub total_pages: u32,
}

/// Slice `items` into the given 1-based page.
///
/// Out-of-range pages (including page 0 and a zero page size) yield an
/// empty slice rather than an error.
pub fn paginate<T>(items: &[T], page: u32, page_size: u32) -> Page<'_, T> {
    let total_items = items.len();
    if page_size == 0 {
        return Page {
            items: &[],
            total_items,
            total_pages: 0,
        };
    }

    let total_pages = total_items.div_ceil(page_size as usize) as u32;
    if page == 0 {
        return Page {
            items: &[],
            total_items,
            total_pages,
        };
    }

    let start = (page as usize - 1) * page_size as usize;
    if start >= total_items {
        return Page {
            items: &[],
            total_items,
            total_pages,
        };
    }

    let end = (start + page_size as usize).min(total_items);
    Page {
        items: &items[start..end],
        total_items,
        total_pages,
    }
}
