//! Page/per_page pagination
//!
//! Query values arrive as raw strings so that garbage (`page=abc`) falls back
//! to defaults instead of failing the request.

use serde::{Deserialize, Serialize};

/// Upper bound for `per_page`
pub const MAX_PER_PAGE: u32 = 100;

/// Normalized pagination parameters (1-based page)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
}

impl Pagination {
    /// Build from raw query values.
    ///
    /// - `page` below 1 or unparseable becomes 1
    /// - `per_page` below 1 or unparseable becomes `default_per_page`
    /// - `per_page` above [`MAX_PER_PAGE`] is clamped
    pub fn from_query(page: Option<&str>, per_page: Option<&str>, default_per_page: u32) -> Self {
        let page = page
            .and_then(|p| p.trim().parse::<i64>().ok())
            .filter(|p| *p >= 1)
            .map(|p| p.min(u32::MAX as i64) as u32)
            .unwrap_or(1);

        let per_page = per_page
            .and_then(|p| p.trim().parse::<i64>().ok())
            .filter(|p| *p >= 1)
            .map(|p| p.min(MAX_PER_PAGE as i64) as u32)
            .unwrap_or(default_per_page);

        Self { page, per_page }
    }

    /// Row offset of the first item on this page
    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1) * i64::from(self.per_page)
    }

    /// SQL LIMIT
    pub fn limit(&self) -> i64 {
        i64::from(self.per_page)
    }

    /// Number of pages needed for `total` rows (0 when empty)
    pub fn total_pages(&self, total: i64) -> i64 {
        if total <= 0 {
            return 0;
        }
        let per_page = i64::from(self.per_page.max(1));
        (total + per_page - 1) / per_page
    }
}
