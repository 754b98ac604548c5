//! Visible page and pagination info.

use crate::catalog::CatalogItem;
use serde::{Deserialize, Serialize};

/// Pagination info.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: usize,
    /// Items per page.
    pub per_page: usize,
    /// Total number of matching items.
    pub total: usize,
    /// Total number of pages; never less than 1.
    pub total_pages: usize,
    /// Whether there's a next page.
    pub has_next: bool,
    /// Whether there's a previous page.
    pub has_prev: bool,
}

impl Pagination {
    /// Create pagination info. Page 0 is treated as page 1.
    pub fn new(page: usize, per_page: usize, total: usize) -> Self {
        let page = page.max(1);
        let total_pages = total_pages(total, per_page);

        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.per_page)
    }

    /// Get page numbers for display (e.g., [3, 4, 5, 6, 7]).
    pub fn page_numbers(&self, max_visible: usize) -> Vec<usize> {
        if self.total_pages <= max_visible {
            return (1..=self.total_pages).collect();
        }
        if max_visible == 0 {
            return Vec::new();
        }

        let half = max_visible / 2;
        let start = self.page.saturating_sub(half).max(1);
        let end = (start + max_visible - 1).min(self.total_pages);
        let start = (end + 1).saturating_sub(max_visible).max(1);

        (start..=end).collect()
    }

    /// Get start item number (1-indexed), 0 when nothing is shown.
    pub fn start_item(&self) -> usize {
        if self.offset() >= self.total {
            0
        } else {
            self.offset() + 1
        }
    }

    /// Get end item number.
    pub fn end_item(&self) -> usize {
        self.page.saturating_mul(self.per_page).min(self.total)
    }
}

/// `max(1, ceil(total / per_page))`.
///
/// # Panics
/// Panics if `per_page` is zero.
pub fn total_pages(total: usize, per_page: usize) -> usize {
    assert!(per_page > 0, "page size must be positive");
    total.div_ceil(per_page).max(1)
}

/// One page of menu results.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VisiblePage<'a> {
    /// Items on this page, in sorted order.
    pub items: Vec<&'a CatalogItem>,
    /// Pagination info for the full filtered list.
    pub pagination: Pagination,
}

impl<'a> VisiblePage<'a> {
    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages
    }

    /// Number of items that matched the filters, across all pages.
    pub fn matched(&self) -> usize {
        self.pagination.total
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
