// src/error.rs
// Error taxonomy shared by the auth, session and video layers

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// Typed failure for every fallible operation in the service
#[derive(Error, Debug)]
pub enum AppError {
    /// Bad or missing input the client can fix
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    /// Wrong password, or a missing/invalid session
    #[error("{0}")]
    Auth(String),
    #[error("{0}")]
    Conflict(String),
    /// Store or media-service failure. The string names the failed action.
    #[error("failed to {action}: {detail}")]
    Upstream { action: String, detail: String },
    /// Malformed stored digest or token
    #[error("malformed {0}")]
    Format(String),
    /// Hashing or signing failed for reasons the client cannot influence
    #[error("internal error: {0}")]
    Internal(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn auth(msg: impl Into<String>) -> Self {
        Self::Auth(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn upstream(action: impl Into<String>, detail: impl std::fmt::Display) -> Self {
        Self::Upstream {
            action: action.into(),
            detail: detail.to_string(),
        }
    }

    pub fn format(what: impl Into<String>) -> Self {
        Self::Format(what.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Auth(_) | Self::Format(_) => StatusCode::UNAUTHORIZED,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Upstream { .. } | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to the client. Internal detail stays in the logs.
    pub fn client_message(&self) -> String {
        match self {
            Self::Validation(msg) | Self::NotFound(msg) | Self::Auth(msg) | Self::Conflict(msg) => {
                msg.clone()
            }
            Self::Format(_) => "Invalid credentials".to_string(),
            Self::Upstream { action, .. } => format!("Failed to {}", action),
            Self::Internal(_) => "Something went wrong".to_string(),
        }
    }

    /// Tag a store error with the action that failed. Unique-constraint
    /// violations surface as conflicts. A video whose owner row is gone
    /// means the session names a user that no longer exists.
    pub fn from_store(action: &str, err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            if db_err.is_unique_violation() {
                return Self::Conflict(format!("{} already exists", conflict_subject(action)));
            }
            if db_err.is_foreign_key_violation() && action == "create video" {
                return Self::auth("Unauthorized");
            }
        }
        Self::upstream(action, err)
    }
}

fn conflict_subject(action: &str) -> &str {
    match action {
        "create account" => "An account with this email",
        "create video" => "Video",
        _ => "Record",
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            Self::Upstream { .. } | Self::Internal(_) => error!("Request failed: {}", self),
            Self::Format(_) => error!("Rejected malformed input: {}", self),
            _ => {}
        }

        (
            status,
            Json(serde_json::json!({
                "error": self.client_message()
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::validation("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::not_found("x").status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::auth("x").status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::format("digest").status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::conflict("x").status(), StatusCode::CONFLICT);
        assert_eq!(
            AppError::upstream("fetch videos", "disk I/O error").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_client_message_hides_internal_detail() {
        let err = AppError::upstream("fetch videos", "database is locked at /var/db/reelbox.db");
        assert_eq!(err.client_message(), "Failed to fetch videos");

        let err = AppError::format("password digest: invalid prefix");
        assert_eq!(err.client_message(), "Invalid credentials");
    }

    #[test]
    fn test_client_facing_kinds_pass_message_through() {
        let err = AppError::auth("Invalid password. Please try again.");
        assert_eq!(err.client_message(), "Invalid password. Please try again.");
    }
}
