//! List response types
//!
//! Pagination metadata as served by the catalog list endpoint, plus the
//! page-window computation used when rendering pager controls.

use serde::{Deserialize, Serialize};

use crate::models::product::Product;

/// Pagination metadata
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page number (1-based)
    pub page: u32,
    /// Items per page
    pub limit: u32,
    /// Total number of items
    pub total: u64,
}

impl Pagination {
    pub fn new(page: u32, limit: u32, total: u64) -> Self {
        Self { page, limit, total }
    }

    /// Total number of pages, never below 1.
    pub fn total_pages(&self) -> u32 {
        if self.limit == 0 {
            return 1;
        }
        let pages = self.total.div_ceil(self.limit as u64) as u32;
        pages.max(1)
    }

    /// Page numbers to render around the current page.
    ///
    /// At most `max_visible` consecutive pages, shifted so the current
    /// page stays centered where possible and the window never runs past
    /// either end.
    pub fn window(&self, max_visible: u32) -> std::ops::RangeInclusive<u32> {
        let total_pages = self.total_pages();
        let max_visible = max_visible.max(1);

        let mut start = self.page.saturating_sub(max_visible / 2).max(1);
        let end = (start + max_visible - 1).min(total_pages);
        if end - start + 1 < max_visible {
            start = end.saturating_sub(max_visible - 1).max(1);
        }
        start..=end
    }
}

/// Paginated product list response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductListResponse {
    pub data: Vec<Product>,
    pub pagination: Pagination,
}
