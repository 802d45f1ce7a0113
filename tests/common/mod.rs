// tests/common/mod.rs
// Shared test utilities: in-memory app, request helpers

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode, header};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use reelbox_backend::config::AppConfig;
use reelbox_backend::db;
use reelbox_backend::state::AppState;

pub const TEST_SECRET: &str = "integration-test-secret-0123456789abcdef";
pub const COOKIE_NAME: &str = "reelbox_session";

pub fn test_config() -> AppConfig {
    let mut config = AppConfig::for_secret(TEST_SECRET);
    // Minimum bcrypt cost keeps the suite fast
    config.session.bcrypt_cost = 4;
    config.session.cookie_secure = false;
    config
}

pub async fn test_state_with(config: AppConfig) -> Arc<AppState> {
    let pool = db::memory_pool().await.unwrap();
    Arc::new(AppState::new(pool, config))
}

pub async fn test_app() -> (Router, Arc<AppState>) {
    let state = test_state_with(test_config()).await;
    (reelbox_backend::api::create_router(state.clone()), state)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    pub fn location(&self) -> Option<&str> {
        self.headers.get(header::LOCATION).and_then(|v| v.to_str().ok())
    }

    pub fn set_cookie(&self) -> Option<&str> {
        self.headers.get(header::SET_COOKIE).and_then(|v| v.to_str().ok())
    }
}

pub async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    TestResponse {
        status,
        headers,
        body,
    }
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn post_json_with_cookie(uri: &str, token: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header(header::COOKIE, format!("{}={}", COOKIE_NAME, token))
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn get_with_cookie(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::COOKIE, format!("{}={}", COOKIE_NAME, token))
        .body(Body::empty())
        .unwrap()
}

pub async fn register(app: &Router, email: &str, password: &str) -> TestResponse {
    send(
        app,
        post_json(
            "/api/auth/register",
            serde_json::json!({ "email": email, "password": password }),
        ),
    )
    .await
}

pub async fn login(app: &Router, email: &str, password: &str) -> TestResponse {
    send(
        app,
        post_json(
            "/api/auth/login",
            serde_json::json!({ "email": email, "password": password }),
        ),
    )
    .await
}

/// Register + login, returning the session token
pub async fn signed_in(app: &Router, email: &str) -> String {
    let response = register(app, email, "hunter22").await;
    assert_eq!(response.status, StatusCode::CREATED);

    let response = login(app, email, "hunter22").await;
    assert_eq!(response.status, StatusCode::OK);
    response.body["token"].as_str().unwrap().to_string()
}
