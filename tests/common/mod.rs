//! Shared test fixtures
//!
//! Builds the full application around the in-memory store so the suite
//! runs without a database, and provides small helpers for driving the
//! router and reading JSON envelopes.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use userhub::routes::create_router;
use userhub::users::memory::MemoryUserStore;
use userhub::{AppState, TokenService, TOKEN_HEADER};

/// Secret used by every integration test app
pub const TEST_SECRET: &str = "integration-test-secret";

/// Build the application with an empty in-memory store
pub fn test_app() -> (Router, AppState) {
    let state = AppState::new(
        Arc::new(MemoryUserStore::new()),
        TokenService::new(TEST_SECRET),
    );
    (create_router(state.clone()), state)
}

/// Send a request without a body
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(TOKEN_HEADER, token);
    }
    let request = builder.body(Body::empty()).unwrap();
    dispatch(app, request).await
}

/// Send a request with a JSON body
pub async fn send_json(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header(TOKEN_HEADER, token);
    }
    let request = builder
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    dispatch(app, request).await
}

async fn dispatch(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

/// Register a user through the public endpoint, returning the token and id
pub async fn register(app: &Router, name: &str, email: &str, password: &str) -> (String, String) {
    let (status, body) = send_json(
        app,
        Method::POST,
        "/api/users",
        None,
        serde_json::json!({ "name": name, "email": email, "password": password }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "registration failed: {}", body);
    (
        body["token"].as_str().unwrap().to_string(),
        body["user"]["id"].as_str().unwrap().to_string(),
    )
}

/// Assert that a JSON value nowhere contains a password field
pub fn assert_no_password(value: &serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            for (key, inner) in map {
                assert!(
                    !key.contains("password"),
                    "response leaked a password field: {}",
                    key
                );
                assert_no_password(inner);
            }
        }
        serde_json::Value::Array(items) => {
            for inner in items {
                assert_no_password(inner);
            }
        }
        _ => {}
    }
}
