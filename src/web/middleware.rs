//! HTTP middleware

use axum::{
    extract::Request,
    http::{HeaderValue, Method, Uri},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, warn};

/// Request logging middleware
///
/// Logs every request with timing information and tags the response with
/// an `x-request-id` header.
pub async fn request_logging_middleware(
    method: Method,
    uri: Uri,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let request_id = uuid::Uuid::new_v4().to_string();

    info!(
        method = %method,
        uri = %uri,
        request_id = %request_id,
        "HTTP request started"
    );

    let mut response = next.run(request).await;
    let status = response.status().as_u16();
    let duration = start.elapsed();

    if status >= 400 {
        warn!(
            method = %method,
            uri = %uri,
            status = status,
            request_id = %request_id,
            duration_ms = duration.as_millis(),
            "HTTP request completed with error"
        );
    } else {
        info!(
            method = %method,
            uri = %uri,
            status = status,
            request_id = %request_id,
            duration_ms = duration.as_millis(),
            "HTTP request completed"
        );
    }

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert("x-request-id", value);
    }

    response
}
