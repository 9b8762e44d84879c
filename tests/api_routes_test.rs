use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use recipe_presenter::{
    config::Config,
    web::{AppState, create_app},
};

fn app() -> Router {
    create_app(AppState::new(Config::default()))
}

// Helper function to send requests to the app
async fn send_request(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request_builder = Request::builder().method(method).uri(uri);

    let request = if let Some(body) = body {
        request_builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap()
    } else {
        request_builder.body(Body::empty()).unwrap()
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let json: Value = if body_bytes.is_empty() {
        json!({})
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(json!({}))
    };

    (status, json)
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = app();
    let (status, response) = send_request(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["success"], true);
    assert_eq!(response["data"]["status"], "healthy");
    assert_eq!(response["data"]["recipes"], 10);
}

#[tokio::test]
async fn test_list_recipes_paginated() {
    let app = app();
    let (status, response) =
        send_request(&app, Method::GET, "/api/v1/recipes?page=2&limit=4", None).await;

    assert_eq!(status, StatusCode::OK);
    let data = &response["data"];
    assert_eq!(data["total"], 10);
    assert_eq!(data["page"], 2);
    assert_eq!(data["total_pages"], 3);
    assert_eq!(data["items"].as_array().unwrap().len(), 4);
    assert_eq!(data["has_next"], true);
    assert_eq!(data["has_previous"], true);
}

#[tokio::test]
async fn test_list_recipes_by_category() {
    let app = app();
    let (status, response) =
        send_request(&app, Method::GET, "/api/v1/recipes?category=Indian", None).await;

    assert_eq!(status, StatusCode::OK);
    let items = response["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 3);
    for item in items {
        assert_eq!(item["category"], "Indian");
    }
    let butter_chicken = items.iter().find(|i| i["title"] == "Butter Chicken").unwrap();
    assert_eq!(butter_chicken["diet"]["kind"], "non-vegetarian");
    let palak = items.iter().find(|i| i["title"] == "Palak Paneer").unwrap();
    assert_eq!(palak["diet"]["kind"], "vegetarian");
}

#[tokio::test]
async fn test_list_recipes_rejects_bad_limit() {
    let app = app();
    let (status, response) =
        send_request(&app, Method::GET, "/api/v1/recipes?limit=1000", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["success"], false);

    let (status, _) = send_request(&app, Method::GET, "/api/v1/recipes?page=abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_recipe_errors() {
    let app = app();
    let (status, _) = send_request(&app, Method::GET, "/api/v1/recipes/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, response) = send_request(
        &app,
        Method::GET,
        "/api/v1/recipes/00000000-0000-0000-0000-000000000000",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(response["error"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn test_submit_then_fetch_recipe() {
    let app = app();
    let submission = json!({
        "title": "Paneer Butter Masala",
        "category": "Indian",
        "description": "Rich paneer curry",
        "prep_minutes": 40,
        "servings": 4,
        "ingredients": ["Paneer", "Butter", "Tomatoes"],
        "instructions": ["Make gravy", "Add paneer"]
    });

    let (status, response) =
        send_request(&app, Method::POST, "/api/v1/recipes", Some(submission)).await;
    assert_eq!(status, StatusCode::CREATED);

    let detail = &response["data"];
    assert_eq!(detail["title"], "Paneer Butter Masala");
    assert_eq!(detail["diet"]["kind"], "vegetarian");
    // No dish image matches, so the Indian category image is used
    assert_eq!(detail["image_url"], detail["fallback_image_url"]);

    let id = detail["id"].as_str().unwrap();
    let (status, fetched) =
        send_request(&app, Method::GET, &format!("/api/v1/recipes/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["data"]["ingredients"], json!(["Paneer", "Butter", "Tomatoes"]));
}

#[tokio::test]
async fn test_submit_invalid_recipe() {
    let app = app();
    let (status, response) = send_request(
        &app,
        Method::POST,
        "/api/v1/recipes",
        Some(json!({ "title": "", "category": "Indian" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(response["details"]["title"].is_string());
    assert!(response["details"]["ingredients"].is_string());
}

#[tokio::test]
async fn test_submit_malformed_json_uses_envelope() {
    let app = app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/recipes")
        .header("content-type", "application/json")
        .body(Body::from("{\"title\": \"Dal\","))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(body["success"], false);
    assert!(body["error"].is_string());
}
