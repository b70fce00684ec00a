use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::shared::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub meta: Option<Meta>,
    pub errors: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Meta {
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
}

impl Meta {
    pub fn for_page(total: i64, query: &ListQuery) -> Self {
        Self {
            total,
            page: query.page.max(1),
            page_size: query.limit(),
        }
    }
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Standard query parameters for all list endpoints.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ListQuery {
    /// Page number (1-indexed, default: 1)
    #[serde(default = "default_page")]
    #[param(minimum = 1)]
    pub page: i64,

    /// Number of items per page (default: 10, max: 100)
    #[serde(default = "default_page_size")]
    #[param(minimum = 1, maximum = 100)]
    pub page_size: i64,

    /// Case-insensitive search over the entity's text columns
    pub search: Option<String>,

    /// Filter by active status (true = active, false = inactive, none = all)
    pub is_active: Option<bool>,
}

fn default_page() -> i64 {
    1
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            search: None,
            is_active: None,
        }
    }
}

impl ListQuery {
    /// Calculate SQL OFFSET from page number
    pub fn offset(&self) -> i64 {
        (self.page.max(1) - 1) * self.limit()
    }

    /// Get clamped page_size (respects MAX_PAGE_SIZE)
    pub fn limit(&self) -> i64 {
        self.page_size.clamp(1, MAX_PAGE_SIZE)
    }

    /// Trimmed search term, `None` when absent or blank
    pub fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: Option<T>, message: Option<String>, meta: Option<Meta>) -> Self {
        Self {
            success: true,
            data,
            message,
            meta,
            errors: None,
        }
    }

    pub fn error(message: Option<String>, errors: Option<Vec<String>>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            message,
            meta: None,
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_and_limit() {
        let query = ListQuery {
            page: 3,
            page_size: 20,
            ..Default::default()
        };
        assert_eq!(query.limit(), 20);
        assert_eq!(query.offset(), 40);
    }

    #[test]
    fn test_limit_is_clamped() {
        let too_big = ListQuery {
            page_size: 1000,
            ..Default::default()
        };
        assert_eq!(too_big.limit(), MAX_PAGE_SIZE);

        let zero = ListQuery {
            page: 0,
            page_size: 0,
            ..Default::default()
        };
        assert_eq!(zero.limit(), 1);
        assert_eq!(zero.offset(), 0);
    }

    #[test]
    fn test_search_term_ignores_blank() {
        let blank = ListQuery {
            search: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(blank.search_term(), None);

        let padded = ListQuery {
            search: Some("  sofa ".to_string()),
            ..Default::default()
        };
        assert_eq!(padded.search_term(), Some("sofa"));
    }

    #[test]
    fn test_meta_for_page() {
        let query = ListQuery {
            page: 2,
            page_size: 500,
            ..Default::default()
        };
        assert_eq!(
            Meta::for_page(42, &query),
            Meta {
                total: 42,
                page: 2,
                page_size: MAX_PAGE_SIZE
            }
        );
    }
}
