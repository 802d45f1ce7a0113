// src/auth/jwt.rs
// Session token issuance and verification (HS256 JWT)

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::models::Identity;
use crate::config::SessionConfig;
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id
    pub email: String,
    pub iat: i64, // issued at timestamp
    pub exp: i64, // expiration timestamp
}

/// A freshly minted token and its validity window
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct SessionIssuer {
    key: EncodingKey,
    max_age: chrono::Duration,
}

impl SessionIssuer {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            key: EncodingKey::from_secret(config.secret.as_bytes()),
            max_age: config.max_age(),
        }
    }

    pub fn issue(&self, identity: &Identity) -> AppResult<IssuedSession> {
        self.issue_at(identity, Utc::now())
    }

    pub fn issue_at(&self, identity: &Identity, now: DateTime<Utc>) -> AppResult<IssuedSession> {
        let expires_at = now
            .checked_add_signed(self.max_age)
            .ok_or_else(|| AppError::internal("Failed to calculate expiration"))?;

        let claims = Claims {
            sub: identity.id.clone(),
            email: identity.email.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.key)
            .map_err(|e| AppError::internal(format!("Failed to create token: {}", e)))?;

        Ok(IssuedSession {
            token,
            issued_at: now,
            expires_at,
        })
    }
}

/// Read-only check of a presented token. Never refreshes or extends it.
///
/// Every failure collapses to `None`: the caller only learns
/// "authenticated as X" or "anonymous".
#[derive(Clone)]
pub struct SessionVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl SessionVerifier {
    pub fn new(config: &SessionConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked against our own clock below so `verify_at` stays exact
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
        }
    }

    pub fn verify(&self, token: Option<&str>) -> Option<Identity> {
        self.verify_at(token, Utc::now())
    }

    pub fn verify_at(&self, token: Option<&str>, now: DateTime<Utc>) -> Option<Identity> {
        let token = token.map(str::trim).filter(|t| !t.is_empty())?;

        let claims = match decode::<Claims>(token, &self.key, &self.validation) {
            Ok(data) => data.claims,
            Err(e) => {
                debug!("Rejected session token: {}", e);
                return None;
            }
        };

        if claims.exp <= now.timestamp() {
            debug!("Rejected expired session token for user {}", claims.sub);
            return None;
        }
        if claims.sub.is_empty() {
            return None;
        }

        Some(Identity {
            id: claims.sub,
            email: claims.email,
        })
    }
}
