// src/gate/middleware.rs
// axum layer that runs the authorization gate ahead of every handler

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use std::sync::Arc;
use tracing::debug;

use super::{GateDecision, InboundRequest};
use crate::auth::transport::token_from_headers;
use crate::state::AppState;

/// Handlers behind the gate still verify the session themselves
pub async fn authorization_gate(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let token = token_from_headers(request.headers(), &state.config.session.cookie_name);
    let path = request.uri().path().to_string();

    let decision = state.gate.evaluate(&InboundRequest {
        path: &path,
        token: token.as_deref(),
    });

    match decision {
        GateDecision::Allow(_) => next.run(request).await,
        GateDecision::Redirect(location) => {
            debug!("Gate redirect {} -> {}", path, location);
            Redirect::temporary(&location).into_response()
        }
    }
}
