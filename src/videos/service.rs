// src/videos/service.rs
// Video creation and feed listing

use chrono::Utc;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use super::store::VideoRepository;
use super::types::{
    CreateVideoRequest, MAX_DESCRIPTION_LEN, MAX_TITLE_LEN, VideoOwner, VideoRecord,
};
use crate::auth::Identity;
use crate::error::{AppError, AppResult};

pub struct VideoService {
    videos: Arc<dyn VideoRepository>,
}

impl VideoService {
    pub fn new(videos: Arc<dyn VideoRepository>) -> Self {
        Self { videos }
    }

    /// Persist metadata for a video already uploaded to the media CDN.
    /// The owner must come from a verified session.
    pub async fn create(&self, owner: &Identity, req: CreateVideoRequest) -> AppResult<VideoRecord> {
        let title = req.title.trim();
        let video_url = req.video_url.trim();
        if title.is_empty() || video_url.is_empty() {
            return Err(AppError::validation("Title and video URL are required"));
        }
        if title.chars().count() > MAX_TITLE_LEN {
            return Err(AppError::validation(format!(
                "Title cannot exceed {} characters",
                MAX_TITLE_LEN
            )));
        }

        let description = req.description.as_deref().unwrap_or("").trim();
        if description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(AppError::validation(format!(
                "Description cannot exceed {} characters",
                MAX_DESCRIPTION_LEN
            )));
        }

        let transformation = req.transformation.unwrap_or_default().resolve();
        if transformation.height == 0 || transformation.width == 0 {
            return Err(AppError::validation("Transformation height and width must be positive"));
        }

        let now = Utc::now();
        let video = VideoRecord {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            description: description.to_string(),
            video_url: video_url.to_string(),
            thumbnail_url: req.thumbnail_url.unwrap_or_default(),
            controls: req.controls.unwrap_or(true),
            transformation,
            user: VideoOwner {
                id: owner.id.clone(),
                email: owner.email.clone(),
            },
            created_at: now,
            updated_at: now,
        };

        self.videos.insert(&video).await?;
        info!("User {} created video {}", owner.id, video.id);

        Ok(video)
    }

    pub async fn list(&self) -> AppResult<Vec<VideoRecord>> {
        self.videos.list_newest_first().await
    }
}
