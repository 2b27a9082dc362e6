/// Courses shown per page.
pub const PER_PAGE: usize = 12;
/// Page numbers listed around the current page.
const MAX_VISIBLE_PAGES: usize = 5;

/// One element of a page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page { number: usize, current: bool },
    /// Gap before the jump to the last page.
    Ellipsis,
}

/// 1-based page cursor over a filtered result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    per_page: usize,
    total: usize,
}

impl Pagination {
    pub fn new(total: usize) -> Self {
        Self::with_page_size(total, PER_PAGE)
    }

    pub fn with_page_size(total: usize, per_page: usize) -> Self {
        Self {
            page: 1,
            per_page: per_page.max(1),
            total,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.per_page).max(1)
    }

    /// Jump to `page`, clamped to the valid range.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages());
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn prev(&mut self) {
        if self.has_prev() {
            self.page -= 1;
        }
    }

    pub fn next(&mut self) {
        if self.has_next() {
            self.page += 1;
        }
    }

    /// Index range of the current page within the result set.
    pub fn range(&self) -> std::ops::Range<usize> {
        let start = ((self.page - 1) * self.per_page).min(self.total);
        start..(start + self.per_page).min(self.total)
    }

    /// Slice the current page out of `items`.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        &items[range.start.min(items.len())..range.end.min(items.len())]
    }

    /// "Showing a-b of n courses".
    pub fn summary(&self) -> String {
        let range = self.range();
        if self.total == 0 {
            return "Showing 0 of 0 courses".to_string();
        }
        format!(
            "Showing {}-{} of {} courses",
            range.start + 1,
            range.end,
            self.total
        )
    }

    /// Page-number strip: up to five pages centred on the current one, then
    /// an ellipsis and the last page when it falls outside the window.
    pub fn page_window(&self) -> Vec<PageItem> {
        let total_pages = self.total_pages();
        let mut start = self.page.saturating_sub(MAX_VISIBLE_PAGES / 2).max(1);
        let end = (start + MAX_VISIBLE_PAGES - 1).min(total_pages);
        if end - start < MAX_VISIBLE_PAGES - 1 {
            start = end.saturating_sub(MAX_VISIBLE_PAGES - 1).max(1);
        }

        let mut items: Vec<PageItem> = (start..=end)
            .map(|number| PageItem::Page {
                number,
                current: number == self.page,
            })
            .collect();
        if end < total_pages {
            items.push(PageItem::Ellipsis);
            items.push(PageItem::Page {
                number: total_pages,
                current: false,
            });
        }
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(items: &[PageItem]) -> Vec<Option<usize>> {
        items
            .iter()
            .map(|item| match item {
                PageItem::Page { number, .. } => Some(*number),
                PageItem::Ellipsis => None,
            })
            .collect()
    }

    #[test]
    fn summary_for_partial_page() {
        let mut pages = Pagination::new(30);
        assert_eq!(pages.summary(), "Showing 1-12 of 30 courses");
        pages.set_page(3);
        assert_eq!(pages.summary(), "Showing 25-30 of 30 courses");
        assert!(!pages.has_next());
    }

    #[test]
    fn empty_results() {
        let pages = Pagination::new(0);
        assert_eq!(pages.total_pages(), 1);
        assert_eq!(pages.range(), 0..0);
        assert_eq!(pages.summary(), "Showing 0 of 0 courses");
    }

    #[test]
    fn set_page_clamps() {
        let mut pages = Pagination::new(13);
        pages.set_page(9);
        assert_eq!(pages.page(), 2);
        pages.set_page(0);
        assert_eq!(pages.page(), 1);
        pages.prev();
        assert_eq!(pages.page(), 1);
        pages.next();
        pages.next();
        assert_eq!(pages.page(), 2);
    }

    #[test]
    fn slices_current_page() {
        let items: Vec<u32> = (0..5).collect();
        let mut pages = Pagination::with_page_size(items.len(), 2);
        pages.set_page(3);
        assert_eq!(pages.slice(&items), &[4]);
    }

    #[test]
    fn window_near_start_jumps_to_last() {
        let mut pages = Pagination::with_page_size(100, 10);
        pages.set_page(2);
        assert_eq!(
            numbers(&pages.page_window()),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5), None, Some(10)]
        );
    }

    #[test]
    fn window_near_end_shifts_back() {
        let mut pages = Pagination::with_page_size(100, 10);
        pages.set_page(10);
        assert_eq!(
            numbers(&pages.page_window()),
            vec![Some(6), Some(7), Some(8), Some(9), Some(10)]
        );
    }

    #[test]
    fn window_marks_current() {
        let mut pages = Pagination::with_page_size(30, 10);
        pages.set_page(2);
        assert!(pages.page_window().contains(&PageItem::Page {
            number: 2,
            current: true,
        }));
    }
}
