//! Integration tests for API endpoints.
//!
//! Each test drives the real router over a fresh in-memory SQLite
//! database, so no external services are needed.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use user_management_api::api::{create_router, AppState};
use user_management_api::config::Config;
use user_management_api::infra::Database;
use user_management_api::notification::EmailNotifier;

// =============================================================================
// Test Helpers
// =============================================================================

async fn test_app() -> Router {
    let db = Database::connect(&Config::with_database_url("sqlite::memory:"))
        .await
        .expect("Failed to open test database");
    let notifier = Arc::new(EmailNotifier::new("noreply@example.com", "Welcome"));

    create_router(AppState::new(db, notifier))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, value)
}

async fn create(app: &Router, name: &str, email: &str) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/users",
        Some(json!({ "name": name, "email": email })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

// =============================================================================
// List
// =============================================================================

#[tokio::test]
async fn test_list_users_empty() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/users", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_list_users_returns_created() {
    let app = test_app().await;
    let created = create(&app, "John Doe", "john@example.com").await;

    let (status, body) = send(&app, Method::GET, "/users", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([created]));
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn test_create_user_returns_created_record() {
    let app = test_app().await;

    let body = create(&app, "Jane Doe", "jane@example.com").await;

    assert!(body["id"].as_i64().is_some());
    assert_eq!(body["name"], "Jane Doe");
    assert_eq!(body["email"], "jane@example.com");
}

#[tokio::test]
async fn test_create_user_with_invalid_email_is_rejected() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({ "name": "Jane", "email": "not-an-email" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let (_, list) = send(&app, Method::GET, "/users", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_create_user_with_non_string_name_is_rejected() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({ "name": 12, "email": "jane@example.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_user_with_duplicate_email_conflicts() {
    let app = test_app().await;
    create(&app, "John Doe", "john@example.com").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({ "name": "Other", "email": "john@example.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "CONSTRAINT_VIOLATION");

    let (_, list) = send(&app, Method::GET, "/users", None).await;
    assert_eq!(list.as_array().map(Vec::len), Some(1));
}

// =============================================================================
// Get
// =============================================================================

#[tokio::test]
async fn test_get_user_by_id() {
    let app = test_app().await;
    let created = create(&app, "John Doe", "john@example.com").await;
    let uri = format!("/users/{}", created["id"]);

    let (status, body) = send(&app, Method::GET, &uri, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);
}

#[tokio::test]
async fn test_get_unknown_user_is_not_found() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/users/999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert_eq!(body["error"]["message"], "User with id 999 not found");
}

#[tokio::test]
async fn test_get_user_with_non_numeric_id_is_bad_request() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/users/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let (status, body) = send(&app, Method::DELETE, "/users/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

// =============================================================================
// Update
// =============================================================================

#[tokio::test]
async fn test_patch_user_updates_only_given_fields() {
    let app = test_app().await;
    let created = create(&app, "John Doe", "john@example.com").await;
    let uri = format!("/users/{}", created["id"]);

    let (status, body) = send(&app, Method::PATCH, &uri, Some(json!({ "name": "X" }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "X");
    assert_eq!(body["email"], "john@example.com");

    let (_, fetched) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(fetched, body);
}

#[tokio::test]
async fn test_patch_unknown_user_is_not_found() {
    let app = test_app().await;

    let (status, _) = send(&app, Method::PATCH, "/users/77", Some(json!({ "name": "X" }))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_patch_with_invalid_email_is_rejected() {
    let app = test_app().await;
    let created = create(&app, "John Doe", "john@example.com").await;
    let uri = format!("/users/{}", created["id"]);

    let (status, _) = send(&app, Method::PATCH, &uri, Some(json!({ "email": "broken" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn test_delete_user_twice() {
    let app = test_app().await;
    let created = create(&app, "John Doe", "john@example.com").await;
    let uri = format!("/users/{}", created["id"]);

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        format!("User with id {} deleted", created["id"])
    );

    let (status, _) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Ambient endpoints
// =============================================================================

#[tokio::test]
async fn test_health_reports_database_status() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["services"]["database"]["status"], "healthy");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/users"].is_object());
    assert!(body["paths"]["/users/{id}"].is_object());
}
