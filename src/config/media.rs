// src/config/media.rs
// Media CDN (ImageKit) credentials

use super::helpers::optional_env;

/// All three values must be set for upload signing to be available
#[derive(Clone, Default)]
pub struct MediaConfig {
    pub public_key: Option<String>,
    pub private_key: Option<String>,
    pub url_endpoint: Option<String>,
}

impl MediaConfig {
    pub fn from_env() -> Self {
        Self {
            public_key: optional_env("IMAGEKIT_PUBLIC_KEY"),
            private_key: optional_env("IMAGEKIT_PRIVATE_KEY"),
            url_endpoint: optional_env("IMAGEKIT_URL_ENDPOINT"),
        }
    }
}

impl std::fmt::Debug for MediaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaConfig")
            .field("public_key", &self.public_key)
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .field("url_endpoint", &self.url_endpoint)
            .finish()
    }
}
