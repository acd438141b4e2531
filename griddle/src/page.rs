//! Pagination state for the table footer.
//!
//! The application owns the data: it hands the widget the records of the
//! current page and a `PageState` describing where that page sits. The
//! widget renders the footer controls and emits page-change events.

use serde::{Deserialize, Serialize};

/// Pagination position: 1-based page number, page size, total record count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
}

impl PageState {
    /// First page of a dataset.
    pub fn new(per_page: usize, total: usize) -> Self {
        Self {
            page: 1,
            per_page: per_page.max(1),
            total,
        }
    }

    /// Number of pages (at least 1).
    pub fn page_count(&self) -> usize {
        if self.total == 0 {
            1
        } else {
            self.total.div_ceil(self.per_page.max(1))
        }
    }

    /// Jump to a page, clamped into range. Returns true if the page changed.
    pub fn set_page(&mut self, page: usize) -> bool {
        let clamped = page.clamp(1, self.page_count());
        if clamped != self.page {
            self.page = clamped;
            true
        } else {
            false
        }
    }

    /// Advance one page if possible.
    pub fn next(&mut self) -> bool {
        self.set_page(self.page + 1)
    }

    /// Go back one page if possible.
    pub fn prev(&mut self) -> bool {
        self.set_page(self.page.saturating_sub(1))
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count()
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// The record index range of the current page.
    pub fn record_range(&self) -> std::ops::Range<usize> {
        let start = (self.page - 1) * self.per_page;
        let end = (start + self.per_page).min(self.total);
        start.min(end)..end
    }
}
