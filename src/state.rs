// src/state.rs
// Application state shared across handlers

use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::{AuthService, PasswordHasher, SessionIssuer, SessionVerifier, SqliteUserRepository};
use crate::config::AppConfig;
use crate::gate::{AuthorizationGate, RoutePolicyTable};
use crate::media::MediaSigner;
use crate::videos::{SqliteVideoRepository, VideoService};

/// Everything here is read-only after startup; no locking needed
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub sqlite_pool: SqlitePool,
    pub auth_service: Arc<AuthService>,
    pub session_issuer: SessionIssuer,
    pub session_verifier: SessionVerifier,
    pub gate: AuthorizationGate,
    pub video_service: Arc<VideoService>,
    pub media_signer: Option<MediaSigner>,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: AppConfig) -> Self {
        Self::with_policies(pool, config, RoutePolicyTable::default())
    }

    pub fn with_policies(pool: SqlitePool, config: AppConfig, policies: RoutePolicyTable) -> Self {
        let session_issuer = SessionIssuer::new(&config.session);
        let session_verifier = SessionVerifier::new(&config.session);
        let gate = AuthorizationGate::new(policies, session_verifier.clone());

        let auth_service = Arc::new(AuthService::new(
            Arc::new(SqliteUserRepository::new(pool.clone())),
            PasswordHasher::new(config.session.bcrypt_cost),
        ));
        let video_service = Arc::new(VideoService::new(Arc::new(SqliteVideoRepository::new(
            pool.clone(),
        ))));

        let media_signer = MediaSigner::from_config(&config.media);
        if media_signer.is_none() {
            warn!("Media CDN credentials not configured; upload signing disabled");
        }

        info!(
            "Route policies: {}",
            gate.policies()
                .rules()
                .iter()
                .map(|r| format!("{} => {:?}", r.prefix, r.access))
                .collect::<Vec<_>>()
                .join(", ")
        );

        Self {
            config: Arc::new(config),
            sqlite_pool: pool,
            auth_service,
            session_issuer,
            session_verifier,
            gate,
            video_service,
            media_signer,
        }
    }
}
