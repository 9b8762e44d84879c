//! HTTP response types and utilities
//!
//! Every endpoint wraps its payload in [`ApiResponse`] so clients see one
//! envelope for both success and failure.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::error;

use crate::errors::{AppError, AppResult};

/// Standard API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the operation was successful
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error message (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, String>>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            details: None,
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn error(message: String) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message),
            details: None,
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn error_with_details(message: String, details: HashMap<String, String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message),
            details: Some(details),
            timestamp: chrono::Utc::now(),
        }
    }
}

/// Paginated response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    /// Total number of items (across all pages)
    pub total: u64,
    /// Current page number (1-based)
    pub page: u32,
    pub per_page: u32,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> PaginatedResponse<T> {
    pub fn new(items: Vec<T>, total: u64, page: u32, per_page: u32) -> Self {
        let total_pages = if per_page > 0 {
            total.div_ceil(per_page as u64) as u32
        } else {
            1
        };

        Self {
            items,
            total,
            page,
            per_page,
            total_pages,
            has_next: page < total_pages,
            has_previous: page > 1,
        }
    }
}

/// Convert AppResult to HTTP response
pub fn handle_result<T>(result: AppResult<T>) -> Response
where
    T: Serialize,
{
    match result {
        Ok(data) => ok(data).into_response(),
        Err(error) => handle_error(error),
    }
}

/// Convert AppError to appropriate HTTP response
pub fn handle_error(error: AppError) -> Response {
    let (status, message, details) = match error {
        AppError::Validation { message, fields } => (
            StatusCode::BAD_REQUEST,
            message,
            (!fields.is_empty()).then_some(fields),
        ),
        AppError::NotFound { resource, id } => (
            StatusCode::NOT_FOUND,
            format!("{} with id '{}' not found", resource, id),
            None,
        ),
        AppError::Calculator(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string(), None),
        AppError::Configuration { message } => {
            error!("Configuration error while serving request: {}", message);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Configuration error: {}", message),
                None,
            )
        }
    };

    let response = match details {
        Some(details) => ApiResponse::<()>::error_with_details(message, details),
        None => ApiResponse::<()>::error(message),
    };

    (status, Json(response)).into_response()
}

/// Success response helpers
pub fn ok<T: Serialize>(data: T) -> impl IntoResponse {
    (StatusCode::OK, Json(ApiResponse::success(data)))
}

pub fn created<T: Serialize>(data: T) -> impl IntoResponse {
    (StatusCode::CREATED, Json(ApiResponse::success(data)))
}

pub fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<()>::error(message.to_string())),
    )
        .into_response()
}

/// Health check payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub recipes: usize,
    pub cached_images: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_math() {
        let page = PaginatedResponse::new(vec![1, 2, 3], 10, 2, 3);
        assert_eq!(page.total_pages, 4);
        assert!(page.has_next);
        assert!(page.has_previous);

        let last = PaginatedResponse::<u8>::new(vec![], 10, 4, 5);
        assert_eq!(last.total_pages, 2);
        assert!(!last.has_next);
    }

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            handle_error(AppError::validation("bad")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            handle_error(AppError::not_found("recipe", "x")).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            handle_error(crate::calculator::CalculatorError::DivisionByZero.into()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            handle_error(AppError::configuration("missing table")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
