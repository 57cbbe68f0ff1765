//! Fixed-size pagination of the post listing

/// Splits a list into pages of `per_page` items, addressed from 0.
pub struct Paginator<'a, T> {
    items: &'a [T],
    per_page: usize,
}

impl<'a, T> Paginator<'a, T> {
    /// A `per_page` of 0 is treated as 1
    pub fn new(items: &'a [T], per_page: usize) -> Self {
        Self {
            items,
            per_page: per_page.max(1),
        }
    }

    /// Number of pages; 0 for an empty list
    pub fn page_count(&self) -> usize {
        self.items.len().div_ceil(self.per_page)
    }

    /// Items on page `index`, empty when the page is out of range
    pub fn page(&self, index: usize) -> &'a [T] {
        let start = index.saturating_mul(self.per_page).min(self.items.len());
        let end = start.saturating_add(self.per_page).min(self.items.len());
        &self.items[start..end]
    }

    pub fn has_next(&self, index: usize) -> bool {
        index + 1 < self.page_count()
    }

    pub fn has_prev(&self, index: usize) -> bool {
        index > 0 && index <= self.page_count()
    }
}
