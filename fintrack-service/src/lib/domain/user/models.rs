use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::user::errors::EmailError;
use crate::user::errors::PasswordPolicyError;

/// User aggregate entity.
///
/// Represents a registered account. Keyed by email; there is no surrogate
/// identifier, and financial records reference their owner by this email.
#[derive(Debug, Clone)]
pub struct User {
    pub name: String,
    pub email: EmailAddress,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Accepted email shape: `local@domain.tld` with a `.com` or `.br` TLD.
///
/// Deliberately narrower than RFC 5322 — the product only serves these two
/// TLDs, and other addresses must be rejected at the boundary.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w.-]+@[\w.-]+\.(com|br)$").expect("email pattern is valid"));

/// Email address value type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Arguments
    /// * `email` - Raw email string
    ///
    /// # Errors
    /// * `InvalidFormat` - Address does not match the accepted shape
    pub fn new(email: String) -> Result<Self, EmailError> {
        if EMAIL_PATTERN.is_match(&email) {
            Ok(Self(email))
        } else {
            Err(EmailError::InvalidFormat)
        }
    }

    /// Get email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Plaintext password value type
///
/// Ensures the minimum length policy before the password reaches the hasher.
/// No upper bound and no complexity rules.
#[derive(Clone)]
pub struct Password(String);

impl Password {
    const MIN_LENGTH: usize = 6;

    /// Create a new policy-checked password.
    ///
    /// # Errors
    /// * `TooShort` - Password shorter than 6 characters
    pub fn new(password: String) -> Result<Self, PasswordPolicyError> {
        let length = password.chars().count();
        if length < Self::MIN_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            });
        }
        Ok(Self(password))
    }

    /// Get the plaintext for hashing.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Plaintext must never end up in logs
impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Command to register a new user with domain types
#[derive(Debug)]
pub struct RegisterUserCommand {
    pub name: String,
    pub email: EmailAddress,
    pub password: Password,
}

impl RegisterUserCommand {
    /// Construct a new register user command.
    ///
    /// # Arguments
    /// * `name` - Display name
    /// * `email` - Validated email address
    /// * `password` - Policy-checked plaintext password (hashed by the service)
    pub fn new(name: String, email: EmailAddress, password: Password) -> Self {
        Self {
            name,
            email,
            password,
        }
    }
}
