// src/videos/store.rs
// Database operations for video records

use async_trait::async_trait;
use chrono::DateTime;
use sqlx::{Row, SqlitePool};

use super::types::{Transformation, VideoOwner, VideoRecord};
use crate::error::{AppError, AppResult};

#[async_trait]
pub trait VideoRepository: Send + Sync {
    async fn insert(&self, video: &VideoRecord) -> AppResult<()>;

    /// All videos, newest first, with owner email joined in
    async fn list_newest_first(&self) -> AppResult<Vec<VideoRecord>>;
}

/// Database store for videos
pub struct SqliteVideoRepository {
    pool: SqlitePool,
}

impl SqliteVideoRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_video(row: &sqlx::sqlite::SqliteRow) -> VideoRecord {
        let height: i64 = row.get("height");
        let width: i64 = row.get("width");
        let quality: i64 = row.get("quality");
        let created_at: i64 = row.get("created_at");
        let updated_at: i64 = row.get("updated_at");

        VideoRecord {
            id: row.get("id"),
            title: row.get("title"),
            description: row.get("description"),
            video_url: row.get("video_url"),
            thumbnail_url: row.get("thumbnail_url"),
            controls: row.get("controls"),
            transformation: Transformation {
                height: height as u32,
                width: width as u32,
                quality: quality as u8,
            },
            user: VideoOwner {
                id: row.get("user_id"),
                email: row.get("email"),
            },
            created_at: DateTime::from_timestamp_millis(created_at).unwrap_or_default(),
            updated_at: DateTime::from_timestamp_millis(updated_at).unwrap_or_default(),
        }
    }
}

#[async_trait]
impl VideoRepository for SqliteVideoRepository {
    async fn insert(&self, video: &VideoRecord) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO videos
            (id, user_id, title, description, video_url, thumbnail_url, controls,
             height, width, quality, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&video.id)
        .bind(&video.user.id)
        .bind(&video.title)
        .bind(&video.description)
        .bind(&video.video_url)
        .bind(&video.thumbnail_url)
        .bind(video.controls)
        .bind(video.transformation.height as i64)
        .bind(video.transformation.width as i64)
        .bind(video.transformation.quality as i64)
        .bind(video.created_at.timestamp_millis())
        .bind(video.updated_at.timestamp_millis())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::from_store("create video", e))?;

        Ok(())
    }

    async fn list_newest_first(&self) -> AppResult<Vec<VideoRecord>> {
        // rowid breaks ties between inserts within the same millisecond
        let rows = sqlx::query(
            "SELECT v.id, v.user_id, v.title, v.description, v.video_url, v.thumbnail_url,
             v.controls, v.height, v.width, v.quality, v.created_at, v.updated_at,
             u.email
             FROM videos v
             JOIN users u ON u.id = v.user_id
             ORDER BY v.created_at DESC, v.rowid DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::from_store("fetch videos", e))?;

        Ok(rows.iter().map(Self::row_to_video).collect())
    }
}
