//! Zero-based page arithmetic shared by paginated tables and lists.

use std::ops::Range;

use crate::window::{self, PageButton, WindowError};

/// Number of pages needed to show `item_count` items, `per_page` at a time.
pub fn total_pages(item_count: usize, per_page: usize) -> usize {
    item_count.div_ceil(per_page.max(1))
}

pub fn clamp_page_index(page_index: usize, num_pages: usize) -> usize {
    page_index.min(num_pages.saturating_sub(1))
}

/// Item range covered by a page. Pages past the end yield an empty range at
/// `total_items`.
pub fn page_bounds(total_items: usize, per_page: usize, page_index: usize) -> Range<usize> {
    let safe_per_page = per_page.max(1);
    let start = page_index.saturating_mul(safe_per_page).min(total_items);
    let end = start.saturating_add(safe_per_page).min(total_items);
    start..end
}

/// Parse a user-entered, one-based page number into a zero-based index.
pub fn parse_one_based_page(raw: &str) -> Option<usize> {
    raw.trim()
        .parse::<usize>()
        .ok()
        .filter(|page| *page >= 1)
        .map(|page| page - 1)
}

/// Current position within a paginated set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageCursor {
    page_index: usize,
    num_pages: usize,
}

impl PageCursor {
    pub fn new(page_index: usize, num_pages: usize) -> Self {
        Self {
            page_index: clamp_page_index(page_index, num_pages),
            num_pages,
        }
    }

    pub fn for_items(page_index: usize, item_count: usize, per_page: usize) -> Self {
        Self::new(page_index, total_pages(item_count, per_page))
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn num_pages(&self) -> usize {
        self.num_pages
    }

    pub fn has_prev(&self) -> bool {
        self.page_index > 0
    }

    pub fn has_next(&self) -> bool {
        self.page_index + 1 < self.num_pages
    }

    pub fn prev(&self) -> Self {
        Self::new(self.page_index.saturating_sub(1), self.num_pages)
    }

    pub fn next(&self) -> Self {
        Self::new(self.page_index.saturating_add(1), self.num_pages)
    }

    pub fn first(&self) -> Self {
        Self::new(0, self.num_pages)
    }

    pub fn last(&self) -> Self {
        Self::new(self.num_pages.saturating_sub(1), self.num_pages)
    }

    pub fn jump(&self, page_index: usize) -> Self {
        Self::new(page_index, self.num_pages)
    }

    pub fn window(&self, num_siblings: usize) -> Result<Vec<PageButton>, WindowError> {
        window::compute_pagination_window(self.num_pages, self.page_index, num_siblings)
    }
}
