use std::ops::Range;

pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Page position over a collection of `count` items
///
/// `current_page` is 1-based and always within `1..=total_pages(count)` once
/// `clamp` has run for the latest count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    page_size: usize,
    current_page: usize,
}

impl PaginationState {
    /// A page size of 0 is treated as 1
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self, count: usize) -> usize {
        count.div_ceil(self.page_size).max(1)
    }

    pub fn is_last_page(&self, count: usize) -> bool {
        self.current_page >= self.total_pages(count)
    }

    pub fn set_page_size(&mut self, page_size: usize, count: usize) {
        self.page_size = page_size.max(1);
        self.clamp(count);
    }

    pub fn go_to(&mut self, page: usize, count: usize) {
        self.current_page = page.clamp(1, self.total_pages(count));
    }

    /// Pull the current page back inside the valid range after the
    /// collection shrank
    pub fn clamp(&mut self, count: usize) {
        self.go_to(self.current_page, count);
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Index range of the current page, empty past the end
    pub fn window(&self, count: usize) -> Range<usize> {
        let start = (self.current_page - 1)
            .saturating_mul(self.page_size)
            .min(count);
        let end = start.saturating_add(self.page_size).min(count);
        start..end
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
#[path = "pagination_tests.rs"]
mod pagination_tests;
