// src/api/http/auth.rs

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use std::sync::Arc;
use tracing::info;

use super::extract::{ApiJson, MaybeSessionUser};
use crate::auth::transport::{logout_cookie, session_cookie, to_header_value};
use crate::auth::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, SessionResponse};
use crate::error::AppResult;
use crate::state::AppState;

pub fn create_auth_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/session", get(session))
}

async fn register(
    State(app_state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> AppResult<impl IntoResponse> {
    app_state.auth_service.register(req).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            success: true,
            message: "User registered successfully".to_string(),
        }),
    ))
}

async fn login(
    State(app_state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let identity = app_state
        .auth_service
        .authenticate(&req.email, &req.password)
        .await?;

    let issued = app_state.session_issuer.issue(&identity)?;
    let cookie = session_cookie(&issued.token, &app_state.config.session);
    info!("Issued session for user {}", identity.id);

    Ok((
        [(header::SET_COOKIE, to_header_value(&cookie)?)],
        Json(LoginResponse {
            user: identity,
            token: issued.token,
            expires_at: issued.expires_at,
        }),
    ))
}

/// Tokens are stateless; logging out just drops the cookie
async fn logout(State(app_state): State<Arc<AppState>>) -> AppResult<impl IntoResponse> {
    let cookie = logout_cookie(&app_state.config.session);

    Ok((
        [(header::SET_COOKIE, to_header_value(&cookie)?)],
        Json(serde_json::json!({ "success": true })),
    ))
}

async fn session(MaybeSessionUser(user): MaybeSessionUser) -> Json<SessionResponse> {
    Json(SessionResponse { user })
}
