// src/api/http/media.rs

use axum::{Json, extract::State};
use std::sync::Arc;

use super::extract::SessionUser;
use crate::error::{AppError, AppResult};
use crate::media::UploadAuthParams;
use crate::state::AppState;

/// Signed parameters the browser needs to upload straight to the media CDN
///
/// GET /api/imagekit-auth
pub async fn upload_auth(
    State(app_state): State<Arc<AppState>>,
    SessionUser(_user): SessionUser,
) -> AppResult<Json<UploadAuthParams>> {
    let signer = app_state
        .media_signer
        .as_ref()
        .ok_or_else(|| AppError::upstream("authenticate upload", "media CDN credentials not configured"))?;

    Ok(Json(signer.upload_params()?))
}
