// src/config/session.rs
// Session token, cookie transport, and password hashing configuration

use anyhow::Result;
use tracing::warn;

use super::helpers::{env_bool, env_or, env_parsed_or, require_env};

pub const DEFAULT_MAX_AGE_DAYS: i64 = 30;
pub const DEFAULT_COOKIE_NAME: &str = "reelbox_session";

/// Settings for session issuance and verification.
///
/// Not `Serialize`: the secret must never end up in a dump of the config.
#[derive(Clone)]
pub struct SessionConfig {
    pub secret: String,
    pub max_age_days: i64,
    pub cookie_name: String,
    pub cookie_secure: bool,
    pub bcrypt_cost: u32,
}

impl SessionConfig {
    /// A missing `SESSION_SECRET` is a fatal startup error. There is no fallback secret.
    pub fn from_env() -> Result<Self> {
        let secret = require_env("SESSION_SECRET")?;
        if secret.len() < 32 {
            warn!("SESSION_SECRET is shorter than 32 bytes; use a longer random value");
        }

        let config = Self {
            secret,
            max_age_days: env_parsed_or("SESSION_MAX_AGE_DAYS", DEFAULT_MAX_AGE_DAYS)?,
            cookie_name: env_or("SESSION_COOKIE_NAME", DEFAULT_COOKIE_NAME),
            cookie_secure: env_bool("SESSION_COOKIE_SECURE", true),
            bcrypt_cost: env_parsed_or("BCRYPT_COST", bcrypt::DEFAULT_COST)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Config with the default lifetime, cookie, and cost for a given secret
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            max_age_days: DEFAULT_MAX_AGE_DAYS,
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            cookie_secure: true,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.secret.trim().is_empty() {
            anyhow::bail!("SESSION_SECRET must not be empty");
        }
        if self.max_age_days <= 0 {
            anyhow::bail!("SESSION_MAX_AGE_DAYS must be positive");
        }
        if !(4..=31).contains(&self.bcrypt_cost) {
            anyhow::bail!("BCRYPT_COST must be between 4 and 31");
        }
        Ok(())
    }

    pub fn max_age(&self) -> chrono::Duration {
        chrono::Duration::days(self.max_age_days)
    }
}

impl std::fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionConfig")
            .field("secret", &"<redacted>")
            .field("max_age_days", &self.max_age_days)
            .field("cookie_name", &self.cookie_name)
            .field("cookie_secure", &self.cookie_secure)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::with_secret("s3cret");
        assert_eq!(config.max_age(), chrono::Duration::days(30));
        assert_eq!(config.cookie_name, "reelbox_session");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_secret_rejected() {
        let config = SessionConfig::with_secret("   ");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = SessionConfig::with_secret("do-not-print-me");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("do-not-print-me"));
    }
}
