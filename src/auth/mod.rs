// src/auth/mod.rs
// Credential verification, session issuance and verification

pub mod jwt;
pub mod models;
pub mod password;
pub mod repository;
pub mod service;
pub mod transport;

pub use jwt::{Claims, IssuedSession, SessionIssuer, SessionVerifier};
pub use models::{
    Credentials, Identity, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
    SessionResponse, UserRecord,
};
pub use password::PasswordHasher;
pub use repository::{SqliteUserRepository, UserRepository};
pub use service::AuthService;
