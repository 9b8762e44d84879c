//! Request extractors and validation

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Query, Request, rejection::JsonRejection},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, de::DeserializeOwned};

use super::responses::ApiResponse;

/// Pagination and filter parameters for recipe listings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub category: Option<String>,
}

impl ListParams {
    /// Resolve page and limit against configured bounds
    pub fn resolve(&self, default_limit: u32, max_limit: u32) -> Result<(u32, u32), String> {
        let page = self.page.unwrap_or(1);
        if page < 1 {
            return Err("Page must be >= 1".to_string());
        }

        let limit = self.limit.unwrap_or(default_limit);
        if limit < 1 || limit > max_limit {
            return Err(format!("Limit must be between 1 and {max_limit}"));
        }

        Ok((page, limit))
    }
}

impl<S> FromRequestParts<S> for ListParams
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params): Query<ListParams> = Query::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                (
                    StatusCode::BAD_REQUEST,
                    Json(ApiResponse::<()>::error("Invalid list parameters".to_string())),
                )
                    .into_response()
            })?;

        Ok(params)
    }
}

/// JSON body extractor whose rejections use the [`ApiResponse`] envelope
///
/// Keeps axum's status (400 for malformed JSON, 422 for a body that does
/// not match the target type, 415 for a missing content type).
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| {
                (
                    rejection.status(),
                    Json(ApiResponse::<()>::error(rejection.body_text())),
                )
                    .into_response()
            })?;

        Ok(Self(value))
    }
}

/// Search query parameters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}
