//! Health check HTTP handler

use axum::{extract::State, response::IntoResponse};

use crate::web::{
    AppState,
    responses::{HealthResponse, ok},
};

/// Basic liveness plus catalog and resolver cache sizes
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    ok(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        recipes: state.catalog.len(),
        cached_images: state.presenter.resolver().cached_entries(),
    })
}
