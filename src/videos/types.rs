// src/videos/types.rs
// Type definitions for video records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_HEIGHT: u32 = 1920;
pub const DEFAULT_WIDTH: u32 = 1080;
pub const DEFAULT_QUALITY: u8 = 80;
pub const MIN_QUALITY: f64 = 1.0;
pub const MAX_QUALITY: f64 = 100.0;

pub const MAX_TITLE_LEN: usize = 100;
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Rendering hints passed through to the media CDN
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transformation {
    pub height: u32,
    pub width: u32,
    pub quality: u8,
}

impl Default for Transformation {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            quality: DEFAULT_QUALITY,
        }
    }
}

/// Client-supplied transformation; any missing field takes its default
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct TransformationInput {
    pub height: Option<u32>,
    pub width: Option<u32>,
    pub quality: Option<f64>,
}

impl TransformationInput {
    /// Quality is rounded, then clamped into 1..=100
    pub fn resolve(self) -> Transformation {
        let defaults = Transformation::default();
        Transformation {
            height: self.height.unwrap_or(defaults.height),
            width: self.width.unwrap_or(defaults.width),
            quality: self
                .quality
                .map(|q| q.round().clamp(MIN_QUALITY, MAX_QUALITY) as u8)
                .unwrap_or(defaults.quality),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVideoRequest {
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub controls: Option<bool>,
    pub transformation: Option<TransformationInput>,
}

/// Owner info attached to a listed video. Email only, never credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoOwner {
    pub id: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub thumbnail_url: String,
    pub controls: bool,
    pub transformation: Transformation,
    pub user: VideoOwner,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct VideoListResponse {
    pub success: bool,
    pub videos: Vec<VideoRecord>,
}

#[derive(Debug, Serialize)]
pub struct VideoCreatedResponse {
    pub success: bool,
    pub message: String,
    pub video: VideoRecord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_transformation_fields_take_defaults() {
        let t = TransformationInput {
            height: Some(720),
            ..Default::default()
        }
        .resolve();
        assert_eq!(t, Transformation { height: 720, width: 1080, quality: 80 });
    }

    #[test]
    fn test_quality_clamped() {
        let high = TransformationInput { quality: Some(250.0), ..Default::default() }.resolve();
        assert_eq!(high.quality, 100);

        let low = TransformationInput { quality: Some(-3.0), ..Default::default() }.resolve();
        assert_eq!(low.quality, 1);

        let zero = TransformationInput { quality: Some(0.0), ..Default::default() }.resolve();
        assert_eq!(zero.quality, 1);
    }

    #[test]
    fn test_fractional_quality_rounds() {
        let req: CreateVideoRequest = serde_json::from_value(serde_json::json!({
            "title": "My Reel",
            "videoUrl": "https://cdn/x.mp4",
            "transformation": { "quality": 80.5 }
        }))
        .unwrap();
        assert_eq!(req.transformation.unwrap().resolve().quality, 81);

        let t = TransformationInput { quality: Some(99.6), ..Default::default() }.resolve();
        assert_eq!(t.quality, 100);
    }

    #[test]
    fn test_create_request_accepts_camel_case() {
        let req: CreateVideoRequest = serde_json::from_value(serde_json::json!({
            "title": "My Reel",
            "videoUrl": "https://cdn/x.mp4",
            "thumbnailUrl": "https://cdn/x.jpg",
            "transformation": { "quality": 55 }
        }))
        .unwrap();
        assert_eq!(req.video_url, "https://cdn/x.mp4");
        assert_eq!(req.thumbnail_url.as_deref(), Some("https://cdn/x.jpg"));
        assert_eq!(req.controls, None);
        assert_eq!(req.transformation.unwrap().resolve().quality, 55);
    }
}
