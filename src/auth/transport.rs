// src/auth/transport.rs
// Session token transport: HttpOnly cookie, with bearer header fallback

use axum::http::{HeaderMap, HeaderValue, header};
use cookie::time::{Duration, OffsetDateTime};
use cookie::{Cookie, SameSite};

use crate::config::SessionConfig;
use crate::error::{AppError, AppResult};

/// Pull the raw session token from the request, cookie first
pub fn token_from_headers(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    token_from_cookies(headers, cookie_name).or_else(|| bearer_token(headers))
}

fn token_from_cookies(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(Cookie::split_parse)
        .filter_map(Result::ok)
        .find(|c| c.name() == cookie_name && !c.value().is_empty())
        .map(|c| c.value().to_string())
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then(|| token.to_string())
}

/// HttpOnly cookie carrying a freshly issued token
pub fn session_cookie(token: &str, config: &SessionConfig) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), token.to_string()))
        .path("/")
        .http_only(true)
        .secure(config.cookie_secure)
        .same_site(SameSite::Lax)
        .max_age(Duration::seconds(config.max_age().num_seconds()))
        .build()
}

/// Expired cookie that makes the browser drop the session
pub fn logout_cookie(config: &SessionConfig) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), String::new()))
        .path("/")
        .http_only(true)
        .secure(config.cookie_secure)
        .same_site(SameSite::Lax)
        .max_age(Duration::ZERO)
        .expires(OffsetDateTime::UNIX_EPOCH)
        .build()
}

pub fn to_header_value(cookie: &Cookie<'_>) -> AppResult<HeaderValue> {
    HeaderValue::from_str(&cookie.to_string())
        .map_err(|e| AppError::internal(format!("Invalid session cookie: {}", e)))
}
