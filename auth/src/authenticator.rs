use chrono::Duration;

use crate::jwt::claims::DEFAULT_TTL_DAYS;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and token
/// issuance.
///
/// Owns the process-wide signing secret and the token lifetime; both are
/// fixed at construction and injected wherever authentication happens.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    token_ttl: Duration,
}

/// Result of successful authentication.
pub struct AuthenticationResult {
    /// Bearer access token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("Token error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator with the default token lifetime.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for token signing
    pub fn new(jwt_secret: &[u8]) -> Self {
        Self::with_token_ttl(jwt_secret, Duration::days(DEFAULT_TTL_DAYS))
    }

    /// Create a new authenticator with an explicit token lifetime.
    pub fn with_token_ttl(jwt_secret: &[u8], token_ttl: Duration) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::new(jwt_secret),
            token_ttl,
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a password against a stored hash.
    ///
    /// Malformed stored hashes count as a mismatch.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Verify credentials and issue a bearer token for the subject.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `subject` - Opaque identity key embedded in the token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `JwtError` - Token issuance failed
    pub fn login(
        &self,
        password: &str,
        stored_hash: &str,
        subject: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.jwt_handler.issue_with_ttl(subject, self.token_ttl)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Issue a token for a subject without password verification.
    ///
    /// For callers that have already established identity by other means.
    ///
    /// # Errors
    /// * `JwtError` - Token issuance failed
    pub fn issue_token(&self, subject: &str) -> Result<String, JwtError> {
        self.jwt_handler.issue_with_ttl(subject, self.token_ttl)
    }

    /// Validate a token and return its subject.
    ///
    /// # Errors
    /// * `TokenExpired` - Token expiry is in the past
    /// * `InvalidToken` - Signature is invalid or the structure is malformed
    /// * `MissingSubject` - Token carries no subject claim
    pub fn validate_token(&self, token: &str) -> Result<String, JwtError> {
        self.jwt_handler.verify_subject(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    #[test]
    fn test_login_success() {
        let authenticator = Authenticator::new(SECRET);

        let password = "my_password";
        let hash = authenticator
            .hash_password(password)
            .expect("Failed to hash password");

        let result = authenticator
            .login(password, &hash, "someone@example.com")
            .expect("Login failed");

        assert!(!result.access_token.is_empty());

        let subject = authenticator
            .validate_token(&result.access_token)
            .expect("Token validation failed");
        assert_eq!(subject, "someone@example.com");
    }

    #[test]
    fn test_login_invalid_password() {
        let authenticator = Authenticator::new(SECRET);

        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        let result = authenticator.login("wrong_password", &hash, "someone@example.com");
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_login_corrupt_stored_hash() {
        let authenticator = Authenticator::new(SECRET);

        // A corrupt row rejects cleanly instead of surfacing a parse error
        let result = authenticator.login("my_password", "corrupt-hash", "someone@example.com");
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_validate_invalid_token() {
        let authenticator = Authenticator::new(SECRET);

        let result = authenticator.validate_token("invalid.token.here");
        assert!(result.is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let authenticator =
            Authenticator::with_token_ttl(SECRET, Duration::seconds(-60));

        let token = authenticator
            .issue_token("someone@example.com")
            .expect("Failed to issue token");

        let result = authenticator.validate_token(&token);
        assert_eq!(result, Err(JwtError::TokenExpired));
    }
}
