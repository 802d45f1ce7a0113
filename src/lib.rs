// src/lib.rs

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod gate;
pub mod media;
pub mod state;
pub mod videos;

// Export commonly used items
pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use state::AppState;
