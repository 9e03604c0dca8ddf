//! Page-number pagination: request validation, offset arithmetic and the response envelope.

use serde::Serialize;

use crate::error::{AppError, Result};

pub const DEFAULT_PAGE_SIZE: u64 = 10;
/// Larger page sizes are clamped to this value.
pub const MAX_PAGE_SIZE: u64 = 100;
/// PostgreSQL binds `OFFSET` as a signed 64-bit integer.
const MAX_OFFSET: u64 = i64::MAX as u64;

/// A validated page request (1-based page number).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page_number: u64,
    page_size: u64,
}

impl PageRequest {
    /// Rejects a page number or size below 1 and clamps the size to [`MAX_PAGE_SIZE`].
    /// A page whose offset does not fit a database bigint is rejected as well.
    pub fn new(page_number: u64, page_size: u64) -> Result<Self> {
        if page_number < 1 {
            return Err(AppError::validation("pageNumber must be at least 1"));
        }
        if page_size < 1 {
            return Err(AppError::validation("pageSize must be at least 1"));
        }
        let page_size = page_size.min(MAX_PAGE_SIZE);
        match (page_number - 1).checked_mul(page_size) {
            Some(offset) if offset <= MAX_OFFSET => Ok(Self {
                page_number,
                page_size,
            }),
            _ => Err(AppError::validation("pageNumber is out of range")),
        }
    }

    pub fn page_number(&self) -> u64 {
        self.page_number
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// SQL `OFFSET` for this page.
    pub fn offset(&self) -> u64 {
        (self.page_number - 1) * self.page_size
    }

    /// SQL `LIMIT` for this page.
    pub fn limit(&self) -> u64 {
        self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_number: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of results plus its position within the whole result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page_size: u64,
    pub current_page: u64,
    pub total_pages: u64,
    pub has_previous_page: bool,
    pub has_next_page: bool,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total_count: u64, request: &PageRequest) -> Self {
        let total_pages = total_count.div_ceil(request.page_size);
        Self {
            items,
            total_count,
            page_size: request.page_size,
            current_page: request.page_number,
            total_pages,
            has_previous_page: request.page_number > 1,
            has_next_page: request.page_number < total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_page_number_or_size_is_rejected() {
        assert!(matches!(PageRequest::new(0, 10), Err(AppError::Validation(_))));
        assert!(matches!(PageRequest::new(1, 0), Err(AppError::Validation(_))));
    }

    #[test]
    fn oversized_pages_are_clamped() {
        let request = PageRequest::new(2, 5_000).unwrap();
        assert_eq!(request.page_size(), MAX_PAGE_SIZE);
        assert_eq!(request.offset(), MAX_PAGE_SIZE);
    }

    #[test]
    fn offset_follows_page_number() {
        assert_eq!(PageRequest::new(1, 10).unwrap().offset(), 0);
        assert_eq!(PageRequest::new(3, 10).unwrap().offset(), 20);
        assert_eq!(PageRequest::new(4, 7).unwrap().limit(), 7);
    }

    #[test]
    fn offsets_beyond_bigint_are_rejected() {
        assert!(matches!(
            PageRequest::new(4_611_686_018_427_387_905, 4),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            PageRequest::new(u64::MAX, 100),
            Err(AppError::Validation(_))
        ));

        let last = PageRequest::new(i64::MAX as u64 / 100 + 1, 100).unwrap();
        assert!(last.offset() <= i64::MAX as u64);
    }

    #[test]
    fn page_metadata_matches_formulas() {
        for total in 0..40u64 {
            for size in 1..12u64 {
                let total_pages = total.div_ceil(size);
                for number in 1..=total_pages + 1 {
                    let request = PageRequest::new(number, size).unwrap();
                    let page: Page<()> = Page::new(Vec::new(), total, &request);
                    assert_eq!(page.total_pages, (total as f64 / size as f64).ceil() as u64);
                    assert_eq!(page.has_next_page, number < page.total_pages);
                    assert_eq!(page.has_previous_page, number > 1);
                }
            }
        }
    }

    #[test]
    fn page_slices_cover_every_row_exactly_once() {
        let rows: Vec<u64> = (1..=23).collect();
        for size in 1..=25u64 {
            let total_pages = (rows.len() as u64).div_ceil(size);
            let mut seen: Vec<u64> = Vec::new();
            for number in 1..=total_pages {
                let request = PageRequest::new(number, size).unwrap();
                seen.extend(
                    rows.iter()
                        .skip(request.offset() as usize)
                        .take(request.limit() as usize),
                );
            }
            assert_eq!(seen, rows, "page size {size}");
        }
    }

    #[test]
    fn single_contact_fits_on_one_page() {
        let page = Page::new(vec!["Alice"], 1, &PageRequest::new(1, 10).unwrap());
        assert_eq!(page.total_pages, 1);
        assert!(!page.has_next_page);
        assert!(!page.has_previous_page);

        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["totalCount"], 1);
        assert_eq!(json["currentPage"], 1);
        assert_eq!(json["hasNextPage"], false);
    }

    #[test]
    fn empty_table_has_zero_pages() {
        let page: Page<()> = Page::new(Vec::new(), 0, &PageRequest::default());
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_next_page);
    }
}
