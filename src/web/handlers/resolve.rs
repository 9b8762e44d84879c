//! Direct access to the image resolver and diet classifier
//!
//! Clients call `/resolve/image` with an empty title to get the category
//! image after a recipe image fails to load. Query input is arbitrary, so
//! image resolution here never touches the resolution cache.

use axum::{extract::Query, response::IntoResponse};
use serde::{Deserialize, Serialize};

use crate::presentation::DietBadge;
use crate::resolver::{classify_diet, resolve_uncached};
use crate::web::responses::ok;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResolveImageParams {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedImage {
    pub image_url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClassifyDietParams {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: String,
}

pub async fn resolve_image(Query(params): Query<ResolveImageParams>) -> impl IntoResponse {
    let (image_url, source) =
        resolve_uncached(&params.title, &params.category, params.url.as_deref());
    tracing::trace!("Resolved image for '{}' from {}", params.title, source);
    ok(ResolvedImage { image_url })
}

pub async fn classify(Query(params): Query<ClassifyDietParams>) -> impl IntoResponse {
    ok(DietBadge::from(classify_diet(&params.title, &params.category)))
}
