use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::shared::constants::QUESTIONS_PER_PAGE;
use crate::shared::deserializers::deserialize_lenient_page;

/// Success envelope: `{"success": true, ...payload}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Error envelope: `{"success": false, "error": <status>, "message": ...}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: String) -> Self {
        Self {
            success: false,
            error: status.as_u16(),
            message,
        }
    }
}

/// Payload for delete endpoints
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeletedDto {
    pub deleted: i64,
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Page query parameter for the question list.
///
/// Non-numeric values fall back to page 1.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct PaginationQuery {
    /// Page number (1-indexed, default: 1)
    #[serde(default = "default_page", deserialize_with = "deserialize_lenient_page")]
    #[param(minimum = 1)]
    pub page: i64,
}

fn default_page() -> i64 {
    1
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self { page: 1 }
    }
}

impl PaginationQuery {
    #[cfg(test)]
    pub fn new(page: i64) -> Self {
        Self { page }
    }

    /// Window `[(page-1)*size, page*size)` of `items`; empty when out of range.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        paginate(items, self.page, QUESTIONS_PER_PAGE)
    }
}

pub fn paginate<T>(items: &[T], page: i64, page_size: usize) -> &[T] {
    if page < 1 {
        return &[];
    }

    let start = usize::try_from(page - 1)
        .ok()
        .and_then(|p| p.checked_mul(page_size));

    match start {
        Some(start) if start < items.len() => {
            let end = start.saturating_add(page_size).min(items.len());
            &items[start..end]
        }
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: i64) -> Vec<i64> {
        (1..=n).collect()
    }

    #[test]
    fn test_paginate_matches_window() {
        let items = numbers(25);
        for page in 1..=3 {
            let start = ((page - 1) * 10) as usize;
            let end = (start + 10).min(items.len());
            assert_eq!(paginate(&items, page, 10), &items[start..end]);
        }
    }

    #[test]
    fn test_paginate_last_partial_page() {
        let items = numbers(25);
        assert_eq!(paginate(&items, 3, 10), &[21, 22, 23, 24, 25]);
    }

    #[test]
    fn test_paginate_out_of_range_is_empty() {
        let items = numbers(25);
        assert!(paginate(&items, 4, 10).is_empty());
        assert!(paginate(&items, 1_234_567_890, 10).is_empty());
        assert!(paginate(&items, i64::MAX, 10).is_empty());
    }

    #[test]
    fn test_paginate_non_positive_page_is_empty() {
        let items = numbers(5);
        assert!(paginate(&items, 0, 10).is_empty());
        assert!(paginate(&items, -3, 10).is_empty());
    }

    #[test]
    fn test_paginate_empty_source() {
        let items: Vec<i64> = Vec::new();
        assert!(paginate(&items, 1, 10).is_empty());
    }

    #[test]
    fn test_pagination_query_uses_question_page_size() {
        let items = numbers(12);
        assert_eq!(PaginationQuery::default().slice(&items).len(), 10);
        assert_eq!(PaginationQuery::new(2).slice(&items), &[11, 12]);
    }

    #[test]
    fn test_error_response_shape() {
        let body = serde_json::to_value(ErrorResponse::new(
            StatusCode::NOT_FOUND,
            "Resource Not Found".to_string(),
        ))
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"success": false, "error": 404, "message": "Resource Not Found"})
        );
    }

    #[test]
    fn test_success_envelope_flattens_payload() {
        #[derive(Serialize)]
        struct Deleted {
            deleted: i32,
        }

        let body = serde_json::to_value(ApiResponse::success(Deleted { deleted: 7 })).unwrap();
        assert_eq!(body, serde_json::json!({"success": true, "deleted": 7}));
    }
}
