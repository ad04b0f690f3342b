//! Authentication utilities library
//!
//! Provides reusable authentication infrastructure for the todo service:
//! - Password hashing (Argon2id)
//! - Access token generation and validation (JWT, HS256)
//! - Authentication coordination
//!
//! The service defines its own identity-resolution path on top of these
//! primitives; this crate stays free of HTTP and storage concerns.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::{AccessClaims, JwtHandler};
//! use chrono::Utc;
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let now = Utc::now();
//! let claims = AccessClaims::for_subject("alice", now);
//! let token = handler.encode(&claims).unwrap();
//! let decoded = handler.decode(&token, now).unwrap();
//! assert_eq!(decoded.subject(), Some("alice"));
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{AccessClaims, Authenticator};
//! use chrono::Utc;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let now = Utc::now();
//! let claims = AccessClaims::for_subject("alice", now);
//! let result = auth.authenticate("password123", &hash, &claims).unwrap();
//!
//! // Validate token
//! let decoded = auth.validate_token(&result.access_token, now).unwrap();
//! assert_eq!(decoded.subject(), Some("alice"));
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::AccessClaims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::ACCESS_TOKEN_EXPIRE_MINUTES;
pub use password::PasswordError;
pub use password::PasswordHasher;
