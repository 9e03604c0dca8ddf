pub mod contact;
pub mod page;

use serde::Deserialize;

use crate::error::Result;
use page::{DEFAULT_PAGE_SIZE, PageRequest};

/// `?pageNumber=1&pageSize=10`; missing values fall back to the first page of the default size.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationQuery {
    pub page_number: Option<u64>,
    pub page_size: Option<u64>,
}

impl PaginationQuery {
    pub fn into_request(self) -> Result<PageRequest> {
        PageRequest::new(
            self.page_number.unwrap_or(1),
            self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NameSearchQuery {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchAllQuery {
    pub query: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_pagination_values_use_defaults() {
        let query = PaginationQuery {
            page_number: None,
            page_size: None,
        };
        assert_eq!(query.into_request().unwrap(), PageRequest::default());
    }

    #[test]
    fn explicit_zero_is_not_defaulted() {
        let query = PaginationQuery {
            page_number: Some(0),
            page_size: Some(10),
        };
        assert!(query.into_request().is_err());
    }
}
