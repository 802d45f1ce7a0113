// src/media.rs
//
// Upload authentication for the media CDN (ImageKit). The browser uploads
// straight to the CDN; this service only signs short-lived upload
// parameters and later stores the resulting URL.

use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use serde::Serialize;
use sha1::Sha1;
use uuid::Uuid;

use crate::config::MediaConfig;
use crate::error::{AppError, AppResult};

type HmacSha1 = Hmac<Sha1>;

/// The CDN rejects signatures that expire more than an hour out
pub const UPLOAD_SIGNATURE_TTL_MINUTES: i64 = 30;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadAuthParams {
    pub token: String,
    pub expire: i64,
    pub signature: String,
    pub public_key: String,
    pub url_endpoint: String,
}

#[derive(Clone)]
pub struct MediaSigner {
    public_key: String,
    private_key: String,
    url_endpoint: String,
}

impl MediaSigner {
    /// `None` when the CDN credentials are not configured
    pub fn from_config(config: &MediaConfig) -> Option<Self> {
        Some(Self {
            public_key: config.public_key.clone()?,
            private_key: config.private_key.clone()?,
            url_endpoint: config.url_endpoint.clone()?,
        })
    }

    pub fn upload_params(&self) -> AppResult<UploadAuthParams> {
        self.upload_params_at(Uuid::new_v4().to_string(), Utc::now())
    }

    pub fn upload_params_at(&self, token: String, now: DateTime<Utc>) -> AppResult<UploadAuthParams> {
        let expire = (now + Duration::minutes(UPLOAD_SIGNATURE_TTL_MINUTES)).timestamp();
        let signature = self.sign(&token, expire)?;

        Ok(UploadAuthParams {
            token,
            expire,
            signature,
            public_key: self.public_key.clone(),
            url_endpoint: self.url_endpoint.clone(),
        })
    }

    /// Lowercase hex HMAC-SHA1 of `token ++ expire`, keyed with the private key
    fn sign(&self, token: &str, expire: i64) -> AppResult<String> {
        let mut mac = HmacSha1::new_from_slice(self.private_key.as_bytes())
            .map_err(|e| AppError::internal(format!("Invalid media signing key: {}", e)))?;
        mac.update(token.as_bytes());
        mac.update(expire.to_string().as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}
