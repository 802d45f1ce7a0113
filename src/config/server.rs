// src/config/server.rs
// Server, database, and logging configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::helpers::{env_or, env_parsed_or, optional_env};

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Frontend build served behind the authorization gate
    pub static_dir: Option<PathBuf>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: env_or("REELBOX_HOST", "0.0.0.0"),
            port: env_parsed_or("REELBOX_PORT", 3000)?,
            static_dir: optional_env("REELBOX_STATIC_DIR").map(PathBuf::from),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            url: env_or("DATABASE_URL", "sqlite://reelbox.db?mode=rwc"),
            max_connections: env_parsed_or("REELBOX_SQLITE_MAX_CONNECTIONS", 5)?,
        })
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        Self {
            level: env_or("REELBOX_LOG_LEVEL", "info"),
        }
    }

    /// Unknown level names fall back to INFO
    pub fn max_level(&self) -> tracing::Level {
        self.level.parse().unwrap_or(tracing::Level::INFO)
    }
}
