#![allow(dead_code)]

//! Test infrastructure for ua-server API tests

use ua_config::AuthConfig;
use ua_db::MIGRATOR;
use ua_server::{build_app_state, build_router};
use ua_service::AppState;

use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "api-test-secret-that-is-at-least-32-chars";
pub const STRONG_PASSWORD: &str = "Sup3r-Secret!";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect(":memory:")
        .await
        .expect("Failed to create test database");

    MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub fn test_auth_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: Some(TEST_SECRET.to_string()),
        token_ttl_secs: 3600,
        hash_cost: 4,
    }
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    build_app_state(
        create_test_pool().await,
        &test_auth_config(),
        Duration::from_secs(5),
    )
    .expect("Failed to build app state")
}

pub async fn create_test_app() -> Router {
    build_router(create_test_app_state().await)
}

/// Send a request, returning the status and the JSON body (Null when empty)
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}

/// Register an account and return its id
pub async fn register(app: &Router, email: &str) -> String {
    let (status, json) = send(
        app,
        "POST",
        "/v1/users",
        None,
        Some(json!({ "name": "Ann", "email": email, "password": STRONG_PASSWORD })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "register failed: {json}");

    json["account"]["id"].as_str().unwrap().to_string()
}

/// Log in and return the bearer token
pub async fn login(app: &Router, email: &str) -> String {
    let (status, json) = send(
        app,
        "POST",
        "/v1/users/login",
        None,
        Some(json!({ "email": email, "password": STRONG_PASSWORD })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {json}");

    json["token"].as_str().unwrap().to_string()
}
