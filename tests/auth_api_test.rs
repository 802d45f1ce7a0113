// tests/auth_api_test.rs
// Registration, login, session, and logout over HTTP

mod common;

use axum::http::{StatusCode, header};
use serde_json::json;

use common::*;

#[tokio::test]
async fn test_register_then_login_sets_session_cookie() {
    let (app, _) = test_app().await;

    let response = register(&app, "ana@example.com", "hunter22").await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["success"], json!(true));

    let response = login(&app, "ana@example.com", "hunter22").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["user"]["email"], json!("ana@example.com"));
    assert!(response.body["user"]["id"].as_str().is_some());
    assert!(response.body["expiresAt"].as_str().is_some());

    let token = response.body["token"].as_str().unwrap();
    let cookie = response.set_cookie().unwrap();
    assert!(cookie.starts_with(&format!("{}={}", COOKIE_NAME, token)));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Max-Age=2592000"));
}

#[tokio::test]
async fn test_login_errors_distinguish_missing_account_from_wrong_password() {
    let (app, _) = test_app().await;
    register(&app, "ana@example.com", "hunter22").await;

    let response = login(&app, "ana@example.com", "wrong-password").await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], json!("Invalid password. Please try again."));
    assert!(response.set_cookie().is_none());

    let response = login(&app, "ghost@example.com", "hunter22").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.body["error"],
        json!("No account found with this email. Please sign up first.")
    );
}

#[tokio::test]
async fn test_login_requires_both_fields() {
    let (app, _) = test_app().await;

    let response = send(&app, post_json("/api/auth/login", json!({ "email": "ana@example.com" }))).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], json!("Please enter email and password"));
}

#[tokio::test]
async fn test_register_validation() {
    let (app, _) = test_app().await;

    let response = register(&app, "ana@example.com", "12345").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], json!("Password must be at least 6 characters"));

    let response = register(&app, "", "hunter22").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = send(&app, post_json("/api/auth/register", json!({}))).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_duplicate_registration_is_conflict() {
    let (app, _) = test_app().await;

    assert_eq!(
        register(&app, "ana@example.com", "hunter22").await.status,
        StatusCode::CREATED
    );
    let response = register(&app, "ana@example.com", "different1").await;
    assert_eq!(response.status, StatusCode::CONFLICT);

    // Original password still works
    assert_eq!(login(&app, "ana@example.com", "hunter22").await.status, StatusCode::OK);
}

#[tokio::test]
async fn test_malformed_json_is_validation_error() {
    let (app, _) = test_app().await;

    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();
    let response = send(&app, request).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], json!("Invalid request body"));
}

#[tokio::test]
async fn test_session_endpoint_reports_identity() {
    let (app, _) = test_app().await;
    let token = signed_in(&app, "ana@example.com").await;

    let response = send(&app, get_with_cookie("/api/auth/session", &token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["user"]["email"], json!("ana@example.com"));

    let response = send(&app, get("/api/auth/session")).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["user"], json!(null));

    let response = send(&app, get_with_cookie("/api/auth/session", "tampered.token.value")).await;
    assert_eq!(response.body["user"], json!(null));
}

#[tokio::test]
async fn test_bearer_header_accepted() {
    let (app, _) = test_app().await;
    let token = signed_in(&app, "ana@example.com").await;

    let request = axum::http::Request::builder()
        .method("GET")
        .uri("/api/auth/session")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(axum::body::Body::empty())
        .unwrap();
    let response = send(&app, request).await;
    assert_eq!(response.body["user"]["email"], json!("ana@example.com"));
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let (app, _) = test_app().await;

    let response = send(&app, post_json("/api/auth/logout", json!({}))).await;
    assert_eq!(response.status, StatusCode::OK);
    let cookie = response.set_cookie().unwrap();
    assert!(cookie.starts_with(&format!("{}=;", COOKIE_NAME)));
    assert!(cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn test_login_response_never_contains_password_hash() {
    let (app, _) = test_app().await;
    register(&app, "ana@example.com", "hunter22").await;

    let response = login(&app, "ana@example.com", "hunter22").await;
    let rendered = response.body.to_string();
    assert!(!rendered.contains("password"));
    assert!(!rendered.contains("$2"));
}

#[tokio::test]
async fn test_login_store_failure_is_generic_server_error() {
    let (app, state) = test_app().await;
    state.sqlite_pool.close().await;

    let response = login(&app, "ana@example.com", "hunter22").await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["error"], json!("Failed to look up account"));
    assert!(response.set_cookie().is_none());
}
