//! Page bookkeeping over the visible set.

use crate::DEFAULT_PER_PAGE;
use std::ops::Range;

/// Current page and page size. Pages are numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    per_page: usize,
    current: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PER_PAGE)
    }
}

impl Pagination {
    /// Creates pagination positioned on the first page. A zero page size falls back to the default.
    pub fn new(per_page: usize) -> Self {
        let per_page = if per_page == 0 { DEFAULT_PER_PAGE } else { per_page };
        Self { per_page, current: 1 }
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of pages for `total` items; an empty set still has one page.
    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.per_page).max(1)
    }

    /// Index range of the current page within `total` items.
    pub fn page_range(&self, total: usize) -> Range<usize> {
        let start = ((self.current - 1) * self.per_page).min(total);
        let end = (start + self.per_page).min(total);
        start..end
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.current < self.total_pages(total)
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    /// Moves to `page`, clamped to the valid range, and returns the new page.
    pub fn go_to(&mut self, page: usize, total: usize) -> usize {
        self.current = page.clamp(1, self.total_pages(total));
        self.current
    }

    pub fn next(&mut self, total: usize) -> usize {
        self.go_to(self.current + 1, total)
    }

    pub fn previous(&mut self, total: usize) -> usize {
        self.go_to(self.current.saturating_sub(1), total)
    }

    pub(crate) fn first(&mut self) {
        self.current = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        let p = Pagination::new(10);
        assert_eq!(p.total_pages(0), 1);
        assert_eq!(p.total_pages(10), 1);
        assert_eq!(p.total_pages(11), 2);
    }

    #[test]
    fn test_page_range_and_navigation() {
        let mut p = Pagination::new(10);
        assert_eq!(p.page_range(25), 0..10);
        assert!(p.has_next(25));
        assert!(!p.has_previous());

        assert_eq!(p.next(25), 2);
        assert_eq!(p.next(25), 3);
        assert_eq!(p.page_range(25), 20..25);
        assert!(!p.has_next(25));
        assert_eq!(p.next(25), 3);

        assert_eq!(p.previous(25), 2);
        assert_eq!(p.go_to(0, 25), 1);
        assert_eq!(p.go_to(99, 25), 3);
    }

    #[test]
    fn test_range_shrinks_when_set_shrinks() {
        let mut p = Pagination::new(5);
        p.go_to(3, 15);
        assert_eq!(p.page_range(4), 4..4);
    }

    #[test]
    fn test_zero_per_page_uses_default() {
        assert_eq!(Pagination::new(0).per_page(), 10);
    }
}
