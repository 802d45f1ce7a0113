// src/config/mod.rs
// Central configuration for the Reelbox backend.
//
// Loaded once in `main` and handed to `AppState`; nothing reads the
// environment after startup.

pub mod helpers;
pub mod media;
pub mod server;
pub mod session;

use anyhow::Result;

pub use media::MediaConfig;
pub use server::{DatabaseConfig, LoggingConfig, ServerConfig};
pub use session::SessionConfig;

/// Main configuration structure - composes all domain configs
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub session: SessionConfig,
    pub media: MediaConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        // Load .env file
        dotenv::dotenv().ok(); // Don't fail if .env doesn't exist (for production)

        Ok(Self {
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            logging: LoggingConfig::from_env(),
            session: SessionConfig::from_env()?,
            media: MediaConfig::from_env(),
        })
    }

    /// In-process config for tests and embedding: in-memory database, no media CDN
    pub fn for_secret(secret: impl Into<String>) -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                static_dir: None,
            },
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                max_connections: 1,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            session: SessionConfig::with_secret(secret),
            media: MediaConfig::default(),
        }
    }

    pub fn bind_address(&self) -> String {
        self.server.bind_address()
    }
}
