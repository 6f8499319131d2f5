//! # Pagination
//!
//! Page requests and the metadata returned alongside each page.

use serde::Serialize;

/// Page number used when none is given
pub const DEFAULT_PAGE: u64 = 1;

/// Page size used when none is given
pub const DEFAULT_LIMIT: u64 = 10;

/// Largest page size a caller may request
pub const MAX_LIMIT: u64 = 100;

/// A bounded page request. `page` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    limit: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    /// Build a page request, raising `page` to at least 1 and clamping
    /// `limit` into `1..=MAX_LIMIT`.
    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            page: page.max(1) as u64,
            limit: limit.clamp(1, MAX_LIMIT as i64) as u64,
        }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Number of records to skip before this page
    pub fn skip(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

/// Position of a page within the full filtered set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl Pagination {
    /// Compute metadata for `request` over `total` matching records
    pub fn new(request: PageRequest, total: u64) -> Self {
        let total_pages = total.div_ceil(request.limit);
        Self {
            total,
            page: request.page,
            limit: request.limit,
            total_pages,
            has_next_page: request.page < total_pages,
            has_prev_page: request.page > 1,
        }
    }
}

/// List response with pagination
#[derive(Debug, Clone, Serialize)]
pub struct Page<T: Serialize> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

impl<T: Serialize> Page<T> {
    pub fn new(data: Vec<T>, request: PageRequest, total: u64) -> Self {
        Self {
            data,
            pagination: Pagination::new(request, total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let req = PageRequest::default();
        assert_eq!(req.page(), 1);
        assert_eq!(req.limit(), 10);
        assert_eq!(req.skip(), 0);
    }

    #[test]
    fn test_bounds() {
        assert_eq!(PageRequest::new(0, 10).page(), 1);
        assert_eq!(PageRequest::new(-3, 10).page(), 1);
        assert_eq!(PageRequest::new(1, 0).limit(), 1);
        assert_eq!(PageRequest::new(1, -5).limit(), 1);
        assert_eq!(PageRequest::new(1, 5000).limit(), MAX_LIMIT);
    }

    #[test]
    fn test_skip() {
        assert_eq!(PageRequest::new(3, 10).skip(), 20);
        assert_eq!(PageRequest::new(2, 7).skip(), 7);
    }

    #[test]
    fn test_first_of_three_pages() {
        let meta = Pagination::new(PageRequest::new(1, 10), 25);

        assert_eq!(meta.total_pages, 3);
        assert!(meta.has_next_page);
        assert!(!meta.has_prev_page);
    }

    #[test]
    fn test_last_page() {
        let meta = Pagination::new(PageRequest::new(3, 10), 25);

        assert!(!meta.has_next_page);
        assert!(meta.has_prev_page);
    }

    #[test]
    fn test_empty_set() {
        let meta = Pagination::new(PageRequest::default(), 0);

        assert_eq!(meta.total_pages, 0);
        assert!(!meta.has_next_page);
        assert!(!meta.has_prev_page);
    }

    #[test]
    fn test_page_serialization() {
        let page = Page::new(vec![json!({"id": 1})], PageRequest::new(2, 1), 2);
        let json = serde_json::to_value(&page).unwrap();

        assert_eq!(json["pagination"]["totalPages"], 2);
        assert_eq!(json["pagination"]["hasPrevPage"], true);
        assert_eq!(json["pagination"]["hasNextPage"], false);
        assert_eq!(json["data"][0]["id"], 1);
    }
}
