// src/config/helpers.rs
// Helper functions for loading environment variables

use anyhow::{Context, Result, anyhow};
use std::env;

pub fn require_env(key: &str) -> Result<String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        Ok(_) => Err(anyhow!("Required env var {} is empty", key)),
        Err(_) => Err(anyhow!("Missing required env var: {}", key)),
    }
}

pub fn optional_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

pub fn env_or(key: &str, default: &str) -> String {
    optional_env(key).unwrap_or_else(|| default.to_string())
}

pub fn env_bool(key: &str, default: bool) -> bool {
    match optional_env(key) {
        Some(v) => matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"),
        None => default,
    }
}

/// Parse an optional env var, failing loudly on a value that is present but invalid.
pub fn env_parsed_or<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    match optional_env(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow!("{}", e))
            .with_context(|| format!("Failed to parse {}", key)),
        None => Ok(default),
    }
}
