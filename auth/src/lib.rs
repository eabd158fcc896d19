//! Authentication infrastructure library
//!
//! Provides the credential and token primitives used by the fintrack API:
//! - Password hashing (Argon2id)
//! - Bearer token issuance and verification (JWT, HS256)
//! - Authentication coordination
//!
//! The service defines its own domain ports and adapts these implementations,
//! so the library stays free of storage or HTTP concerns.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("hunter2x").unwrap();
//! assert!(hasher.verify("hunter2x", &hash));
//! assert!(!hasher.verify("wrong", &hash));
//! ```
//!
//! ## Tokens
//! ```
//! use auth::JwtHandler;
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let token = handler.issue("someone@example.com").unwrap();
//! let subject = handler.verify_subject(&token).unwrap();
//! assert_eq!(subject, "someone@example.com");
//! ```
//!
//! ## Complete Login Flow
//! ```
//! use auth::Authenticator;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue a bearer token
//! let result = auth.login("password123", &hash, "someone@example.com").unwrap();
//!
//! // Later: validate the token back to its subject
//! let subject = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(subject, "someone@example.com");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
