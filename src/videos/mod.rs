// src/videos/mod.rs
// Video metadata records; the media itself lives on the CDN

pub mod service;
pub mod store;
pub mod types;

pub use service::VideoService;
pub use store::{SqliteVideoRepository, VideoRepository};
pub use types::{
    CreateVideoRequest, Transformation, TransformationInput, VideoCreatedResponse,
    VideoListResponse, VideoOwner, VideoRecord,
};
