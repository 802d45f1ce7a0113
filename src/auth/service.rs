// src/auth/service.rs
// Registration and credential authentication

use std::sync::Arc;
use tracing::{info, warn};

use super::models::{Identity, NewUser, RegisterRequest};
use super::password::PasswordHasher;
use super::repository::UserRepository;
use crate::error::{AppError, AppResult};

/// Minimum accepted password length, in characters
pub const MIN_PASSWORD_LEN: usize = 6;

pub struct AuthService {
    users: Arc<dyn UserRepository>,
    hasher: PasswordHasher,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>, hasher: PasswordHasher) -> Self {
        Self { users, hasher }
    }

    /// Login check. "No account" and "wrong password" are reported as
    /// different errors so the client can offer the sign-up path.
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<Identity> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AppError::validation("Please enter email and password"));
        }

        let Some(user) = self.users.find_by_email(email).await? else {
            warn!("Failed login: no account");
            return Err(AppError::not_found(
                "No account found with this email. Please sign up first.",
            ));
        };

        let hasher = self.hasher;
        let password = password.to_string();
        let digest = user.password_hash.clone();
        let valid = run_blocking(move || hasher.verify(&password, &digest)).await?;

        if !valid {
            warn!("Failed login for user {}", user.id);
            return Err(AppError::auth("Invalid password. Please try again."));
        }

        info!("User {} authenticated", user.id);
        Ok(user.identity())
    }

    pub async fn register(&self, req: RegisterRequest) -> AppResult<Identity> {
        if req.email.trim().is_empty() || req.password.is_empty() {
            return Err(AppError::validation("Email and password are required"));
        }

        if req.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }

        let hasher = self.hasher;
        let password = req.password;
        let password_hash = run_blocking(move || hasher.hash(&password)).await?;

        let user = self
            .users
            .insert(NewUser {
                email: req.email,
                password_hash,
            })
            .await?;

        info!("Registered user {}", user.id);
        Ok(user.identity())
    }
}

/// bcrypt is deliberately slow; keep it off the async workers
async fn run_blocking<T, F>(f: F) -> AppResult<T>
where
    T: Send + 'static,
    F: FnOnce() -> AppResult<T> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AppError::internal(format!("Password task failed: {}", e)))?
}
