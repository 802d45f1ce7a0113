// src/api/http/mod.rs

pub mod auth;
pub mod extract;
pub mod health;
pub mod media;
pub mod videos;

use axum::{Router, middleware, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::gate::authorization_gate;
use crate::state::AppState;

pub use auth::create_auth_router;
pub use extract::{MaybeSessionUser, SessionUser};
pub use health::{health_check, liveness_check, readiness_check};
pub use videos::create_video_router;

/// Full application router. The authorization gate wraps every route and
/// the fallback, so gated page paths never reach a handler unchecked.
pub fn create_router(state: Arc<AppState>) -> Router {
    let api_router = Router::new()
        .nest("/auth", create_auth_router())
        .nest("/videos", create_video_router())
        .route("/imagekit-auth", get(media::upload_auth));

    let router = Router::new()
        // Health endpoints for load balancers and Kubernetes
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/live", get(liveness_check))
        .nest("/api", api_router);

    // Frontend pages come from the static build when one is configured
    let router = match &state.config.server.static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router.fallback(not_found),
    };

    router
        .layer(middleware::from_fn_with_state(state.clone(), authorization_gate))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::not_found("Not found")
}
