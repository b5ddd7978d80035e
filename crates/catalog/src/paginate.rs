//! Zero-based pagination over an in-memory list.

use std::ops::Range;

/// Tracks the current page of a list of known length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
    total: usize,
    current: usize,
}

impl Paginator {
    /// Paginator over `total` items. A zero page size is treated as one.
    pub fn new(page_size: usize, total: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            total,
            current: 0,
        }
    }

    /// Items per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Items being paged over.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Current zero-based page.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of pages; zero for an empty list.
    pub fn total_pages(&self) -> usize {
        (self.total + self.page_size - 1) / self.page_size
    }

    /// Move to `page`. Out-of-range pages are ignored; returns whether the
    /// page changed.
    pub fn set_page(&mut self, page: usize) -> bool {
        if page >= self.total_pages() || page == self.current {
            return false;
        }
        self.current = page;
        true
    }

    /// Advance one page if possible.
    pub fn next(&mut self) -> bool {
        self.set_page(self.current + 1)
    }

    /// Go back one page if possible.
    pub fn prev(&mut self) -> bool {
        match self.current.checked_sub(1) {
            Some(page) => self.set_page(page),
            None => false,
        }
    }

    /// Replace the list length and go back to the first page.
    pub fn reset(&mut self, total: usize) {
        self.total = total;
        self.current = 0;
    }

    /// Index range of the current page.
    pub fn range(&self) -> Range<usize> {
        let start = (self.current * self.page_size).min(self.total);
        let end = (start + self.page_size).min(self.total);
        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(Paginator::new(9, 0).total_pages(), 0);
        assert_eq!(Paginator::new(9, 9).total_pages(), 1);
        assert_eq!(Paginator::new(9, 10).total_pages(), 2);
    }

    #[test]
    fn test_set_page_ignores_out_of_range() {
        let mut p = Paginator::new(9, 20);
        assert!(p.set_page(2));
        assert_eq!(p.range(), 18..20);
        assert!(!p.set_page(3));
        assert_eq!(p.current(), 2);
        assert!(!p.next());
        assert!(p.prev());
        assert_eq!(p.range(), 9..18);
    }

    #[test]
    fn test_reset_returns_to_first_page() {
        let mut p = Paginator::new(9, 40);
        p.set_page(4);
        p.reset(3);
        assert_eq!(p.current(), 0);
        assert_eq!(p.range(), 0..3);
    }

    #[test]
    fn test_empty_list() {
        let mut p = Paginator::new(9, 0);
        assert_eq!(p.range(), 0..0);
        assert!(!p.set_page(0));
        assert!(!p.prev());
    }

    proptest! {
        #[test]
        fn prop_pages_cover_list_exactly(size in 1usize..12, total in 0usize..100) {
            let mut p = Paginator::new(size, total);
            let mut seen = 0;
            for page in 0..p.total_pages() {
                p.set_page(page);
                let range = p.range();
                prop_assert_eq!(range.start, seen);
                prop_assert!(range.len() <= size);
                prop_assert!(!range.is_empty());
                seen = range.end;
            }
            prop_assert_eq!(seen, total);
        }
    }
}
