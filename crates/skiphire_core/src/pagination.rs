//! Client-side pagination over a fetched list.
//!
//! Pages are 1-indexed. A request for a page outside `[1, total_pages]` is
//! clamped to the nearest valid page; an empty list has zero pages and an
//! empty visible slice.

use std::num::NonZeroUsize;

/// Number of cards shown per page unless configured otherwise
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = NonZeroUsize::new(6).unwrap();

/// One derived page of a list
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub visible: &'a [T],
    /// Page actually shown after clamping (0 when there are no pages)
    pub current_page: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
    /// 0-based index of the first visible item in the full list
    pub first_index: usize,
    /// Exclusive end of the visible range in the full list
    pub last_index: usize,
}

impl<T> Page<'_, T> {
    /// Pagination controls are only meaningful with more than one page
    pub fn needs_controls(&self) -> bool {
        self.total_pages > 1
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

/// Number of pages needed for `item_count` items
pub fn total_pages(item_count: usize, page_size: NonZeroUsize) -> usize {
    item_count.div_ceil(page_size.get())
}

/// Clamp a requested page into `[1, total_pages]`, or 0 when there are no pages
pub fn clamp_page(requested: usize, total_pages: usize) -> usize {
    if total_pages == 0 {
        0
    } else {
        requested.clamp(1, total_pages)
    }
}

/// Derive the visible slice and navigation flags for `current_page`.
pub fn paginate<T>(items: &[T], page_size: NonZeroUsize, current_page: usize) -> Page<'_, T> {
    let total_pages = total_pages(items.len(), page_size);
    let current_page = clamp_page(current_page, total_pages);

    if current_page == 0 {
        return Page {
            visible: &items[..0],
            current_page: 0,
            total_pages: 0,
            has_next: false,
            has_prev: false,
            first_index: 0,
            last_index: 0,
        };
    }

    let size = page_size.get();
    let first_index = (current_page - 1) * size;
    let last_index = (first_index + size).min(items.len());

    Page {
        visible: &items[first_index..last_index],
        current_page,
        total_pages,
        has_next: current_page < total_pages,
        has_prev: current_page > 1,
        first_index,
        last_index,
    }
}

/// Page cursor for a list that may be replaced over time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page_size: NonZeroUsize,
    current_page: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pager {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            page_size,
            current_page: 1,
        }
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Go back to page 1. Call whenever the underlying list changes.
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Changing the page size invalidates the current page.
    pub fn set_page_size(&mut self, page_size: NonZeroUsize) {
        self.page_size = page_size;
        self.reset();
    }

    /// Advance one page. Returns `false` (and changes nothing) on the last page.
    pub fn next(&mut self, item_count: usize) -> bool {
        let total = total_pages(item_count, self.page_size);
        let current = clamp_page(self.current_page, total);
        if current < total {
            self.current_page = current + 1;
            true
        } else {
            false
        }
    }

    /// Go back one page. Returns `false` (and changes nothing) on page 1.
    pub fn prev(&mut self, item_count: usize) -> bool {
        let total = total_pages(item_count, self.page_size);
        let current = clamp_page(self.current_page, total);
        if current > 1 {
            self.current_page = current - 1;
            true
        } else {
            false
        }
    }

    /// Jump to `page`, clamped into range. Returns whether the page changed.
    pub fn go_to(&mut self, page: usize, item_count: usize) -> bool {
        let total = total_pages(item_count, self.page_size);
        let target = clamp_page(page, total).max(1);
        let moved = target != self.current_page;
        self.current_page = target;
        moved
    }

    pub fn page<'a, T>(&self, items: &'a [T]) -> Page<'a, T> {
        paginate(items, self.page_size, self.current_page)
    }
}
