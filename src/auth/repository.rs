// src/auth/repository.rs
// Credential store: persisted user records

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use super::models::{NewUser, PasswordDigest, UserRecord};
use crate::error::{AppError, AppResult};

/// Narrow interface over whatever holds user records.
///
/// Email matching is exact (case-sensitive as stored); uniqueness is the
/// store's job and a duplicate insert surfaces as `AppError::Conflict`.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserRecord>>;

    async fn insert(&self, user: NewUser) -> AppResult<UserRecord>;
}

pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &sqlx::sqlite::SqliteRow) -> UserRecord {
        let created_at: i64 = row.get("created_at");
        UserRecord {
            id: row.get("id"),
            email: row.get("email"),
            password_hash: PasswordDigest::from_stored(row.get("password_hash")),
            created_at: DateTime::from_timestamp_millis(created_at).unwrap_or_default(),
        }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserRecord>> {
        let row = sqlx::query(
            "SELECT id, email, password_hash, created_at FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::from_store("look up account", e))?;

        Ok(row.as_ref().map(Self::row_to_user))
    }

    async fn insert(&self, user: NewUser) -> AppResult<UserRecord> {
        let record = UserRecord {
            id: Uuid::new_v4().to_string(),
            email: user.email,
            password_hash: user.password_hash,
            created_at: Utc::now(),
        };

        sqlx::query(
            "INSERT INTO users (id, email, password_hash, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&record.id)
        .bind(&record.email)
        .bind(record.password_hash.as_str())
        .bind(record.created_at.timestamp_millis())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::from_store("create account", e))?;

        Ok(record)
    }
}
