//! Page tracking for a widget instance

use pharmsearch_client::PageRequest;

use crate::error::{Error, Result};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Current page and fixed page size.
///
/// `page` only changes through [`PaginationState::advance_to`], which the
/// controller calls after a page has been rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    page: u32,
    page_size: u32,
}

impl PaginationState {
    pub fn new(page: u32, page_size: u32) -> Result<Self> {
        if page == 0 {
            return Err(Error::InvalidOptions("page must be at least 1".to_string()));
        }
        if page_size == 0 {
            return Err(Error::InvalidOptions(
                "pageSize must be at least 1".to_string(),
            ));
        }
        Ok(Self { page, page_size })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Request for the current page.
    pub fn request<'a>(&self, order_by: Option<&'a str>) -> PageRequest<'a> {
        self.request_for(self.page, order_by)
    }

    /// Request for an arbitrary page, leaving the state untouched.
    pub fn request_for<'a>(&self, page: u32, order_by: Option<&'a str>) -> PageRequest<'a> {
        PageRequest {
            page,
            page_size: self.page_size,
            order_by,
        }
    }

    pub(crate) fn advance_to(&mut self, page: u32) {
        debug_assert!(page > 0);
        self.page = page;
    }

    /// Number of pages needed for `total` records.
    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(u64::from(self.page_size))
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = PaginationState::default();
        assert_eq!(state.page(), 1);
        assert_eq!(state.page_size(), 50);
    }

    #[test]
    fn test_rejects_zero() {
        assert!(matches!(
            PaginationState::new(0, 50),
            Err(Error::InvalidOptions(_))
        ));
        assert!(matches!(
            PaginationState::new(1, 0),
            Err(Error::InvalidOptions(_))
        ));
    }

    #[test]
    fn test_request_for_does_not_mutate() {
        let state = PaginationState::new(2, 25).unwrap();
        let request = state.request_for(7, Some("?pmid"));
        assert_eq!(request.page, 7);
        assert_eq!(request.page_size, 25);
        assert_eq!(request.order_by, Some("?pmid"));
        assert_eq!(state.page(), 2);
        assert_eq!(state.request(None).page, 2);
    }

    #[test]
    fn test_advance_to() {
        let mut state = PaginationState::default();
        state.advance_to(4);
        assert_eq!(state.page(), 4);
        assert_eq!(state.page_size(), 50);
    }

    #[test]
    fn test_total_pages() {
        let state = PaginationState::new(1, 50).unwrap();
        assert_eq!(state.total_pages(0), 0);
        assert_eq!(state.total_pages(1), 1);
        assert_eq!(state.total_pages(50), 1);
        assert_eq!(state.total_pages(51), 2);
    }
}
