// src/api/http/videos.rs

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use std::sync::Arc;

use super::extract::{ApiJson, SessionUser};
use crate::error::AppResult;
use crate::state::AppState;
use crate::videos::{CreateVideoRequest, VideoCreatedResponse, VideoListResponse};

pub fn create_video_router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(list_videos).post(create_video))
}

/// Public feed, newest first
async fn list_videos(State(app_state): State<Arc<AppState>>) -> AppResult<Json<VideoListResponse>> {
    let videos = app_state.video_service.list().await?;
    Ok(Json(VideoListResponse {
        success: true,
        videos,
    }))
}

async fn create_video(
    State(app_state): State<Arc<AppState>>,
    SessionUser(owner): SessionUser,
    ApiJson(req): ApiJson<CreateVideoRequest>,
) -> AppResult<impl IntoResponse> {
    let video = app_state.video_service.create(&owner, req).await?;

    Ok((
        StatusCode::CREATED,
        Json(VideoCreatedResponse {
            success: true,
            message: "Video created successfully".to_string(),
            video,
        }),
    ))
}
