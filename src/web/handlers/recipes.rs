//! Recipe browsing, search and submission handlers

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::models::RecipeSubmission;
use crate::web::{
    AppState,
    extractors::{ApiJson, ListParams, SearchParams},
    responses::{PaginatedResponse, bad_request, created, handle_error, handle_result, ok},
};

/// List recipe cards, optionally filtered by category
pub async fn list_recipes(State(state): State<AppState>, params: ListParams) -> Response {
    let catalog_config = &state.config.catalog;
    let (page, limit) =
        match params.resolve(catalog_config.default_page_size, catalog_config.max_page_size) {
            Ok(bounds) => bounds,
            Err(message) => return bad_request(&message),
        };

    let result = state.catalog.list(params.category.as_deref(), page, limit);
    let cards = state.presenter.cards(&result.items);

    ok(PaginatedResponse::new(cards, result.total, page, limit)).into_response()
}

pub async fn get_recipe(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let Ok(id) = Uuid::parse_str(&id) else {
        return bad_request(&format!("Invalid UUID format: {id}"));
    };

    handle_result(state.catalog.get(id).map(|r| state.presenter.detail(&r)))
}

pub async fn search_recipes(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let results = state.catalog.search(&params.q);
    ok(state.presenter.cards(&results))
}

pub async fn list_videos(State(state): State<AppState>) -> impl IntoResponse {
    ok(state.presenter.cards(&state.catalog.videos()))
}

pub async fn list_categories(State(state): State<AppState>) -> impl IntoResponse {
    let categories: Vec<_> = state
        .catalog
        .categories()
        .iter()
        .map(|name| state.presenter.category(name))
        .collect();
    ok(categories)
}

pub async fn submit_recipe(
    State(state): State<AppState>,
    ApiJson(submission): ApiJson<RecipeSubmission>,
) -> Response {
    match state.catalog.submit(submission) {
        Ok(recipe) => created(state.presenter.detail(&recipe)).into_response(),
        Err(e) => handle_error(e),
    }
}
