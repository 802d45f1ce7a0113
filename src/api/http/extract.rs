// src/api/http/extract.rs
// Session extractors for handlers

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Request, rejection::JsonRejection},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use std::convert::Infallible;
use std::sync::Arc;
use tracing::debug;

use crate::auth::Identity;
use crate::auth::transport::token_from_headers;
use crate::error::AppError;
use crate::state::AppState;

/// Caller with a valid session. Re-verifies the token instead of trusting
/// anything upstream; a missing or invalid session is a 401.
#[derive(Debug, Clone)]
pub struct SessionUser(pub Identity);

impl FromRequestParts<Arc<AppState>> for SessionUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let token = token_from_headers(&parts.headers, &state.config.session.cookie_name);
        state
            .session_verifier
            .verify(token.as_deref())
            .map(SessionUser)
            .ok_or_else(|| AppError::auth("Unauthorized"))
    }
}

/// Caller identity when present; anonymous is not an error
#[derive(Debug, Clone)]
pub struct MaybeSessionUser(pub Option<Identity>);

impl FromRequestParts<Arc<AppState>> for MaybeSessionUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let token = token_from_headers(&parts.headers, &state.config.session.cookie_name);
        Ok(MaybeSessionUser(state.session_verifier.verify(token.as_deref())))
    }
}

/// `Json` whose rejections come back as a 400 validation error. The
/// deserializer's message is logged, not returned.
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Json::<T>::from_request(req, state)
            .await
            .map(|Json(value)| ApiJson(value))
            .map_err(|rejection: JsonRejection| {
                debug!("Rejected request body: {}", rejection.body_text());
                AppError::validation("Invalid request body")
            })
    }
}
