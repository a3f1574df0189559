//! Pagination stage.

use serde::{Deserialize, Serialize};

/// Default page size when the caller does not specify one.
pub const DEFAULT_LIMIT: i64 = 12;

/// Maximum page size; larger requests are clamped, not rejected.
pub const MAX_LIMIT: i64 = 100;

/// Page metadata.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageInfo {
    /// Current page (1-indexed).
    pub page: i64,
    /// Items per page.
    pub limit: i64,
    /// Total number of items before pagination.
    pub total: i64,
    /// Total number of pages. 0 when there are no items.
    pub total_pages: i64,
    /// Whether there's a next page.
    pub has_next: bool,
    /// Whether there's a previous page.
    pub has_prev: bool,
}

impl PageInfo {
    /// Create page metadata for a normalized page/limit pair.
    ///
    /// An empty set has `total_pages = 0` and neither navigation flag set.
    pub fn new(page: i64, limit: i64, total: i64) -> Self {
        let total_pages = if total == 0 {
            0
        } else {
            (total + limit - 1) / limit
        };

        Self {
            page,
            limit,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1 && total > 0,
        }
    }

    /// The item offset of this page. Saturates on extreme page values.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// Check if on first page.
    pub fn is_first(&self) -> bool {
        self.page == 1
    }

    /// Check if on last page.
    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages
    }

    /// Get start item number (1-indexed), for "showing X-Y of Z" displays.
    pub fn start_item(&self) -> i64 {
        if self.total == 0 {
            0
        } else {
            self.offset().saturating_add(1)
        }
    }

    /// Get end item number.
    pub fn end_item(&self) -> i64 {
        self.page.saturating_mul(self.limit).min(self.total)
    }

    /// Get page numbers for display (e.g., [3, 4, 5, 6, 7]).
    pub fn page_numbers(&self, max_visible: usize) -> Vec<i64> {
        if self.total_pages as usize <= max_visible {
            return (1..=self.total_pages).collect();
        }

        let half = max_visible / 2;
        let start = (self.page - half as i64).max(1);
        let end = (start + max_visible as i64 - 1).min(self.total_pages);
        let start = (end - max_visible as i64 + 1).max(1);

        (start..=end).collect()
    }
}

/// One page of results plus its metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageResult<T> {
    /// The items on this page (at most `limit`).
    pub data: Vec<T>,
    /// Page metadata.
    pub pagination: PageInfo,
}

impl<T> PageResult<T> {
    /// Check if this page holds no items.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.data.len()
    }
}

/// Slice an ordered sequence into one page.
///
/// Normalization is part of the public contract: `page` is raised to at
/// least 1 and `limit` clamped to `1..=100`. An out-of-range page yields
/// an empty data slice with valid metadata, never an error — the offset
/// math saturates, so even `page = i64::MAX` stays on that path.
pub fn paginate<T: Clone>(items: &[T], page: i64, limit: i64) -> PageResult<T> {
    let page = page.max(1);
    let limit = limit.clamp(1, MAX_LIMIT);

    let offset =
        usize::try_from((page - 1).saturating_mul(limit)).unwrap_or(usize::MAX);
    let end = offset.saturating_add(limit as usize).min(items.len());
    let data = if offset < items.len() {
        items[offset..end].to_vec()
    } else {
        Vec::new()
    };

    PageResult {
        data,
        pagination: PageInfo::new(page, limit, items.len() as i64),
    }
}
