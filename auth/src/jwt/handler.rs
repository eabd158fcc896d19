use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::claims::DEFAULT_TTL_DAYS;
use super::errors::JwtError;

/// Token handler for issuing and verifying bearer tokens.
///
/// Uses HS256 (HMAC with SHA-256) with a process-wide secret. Expiry is
/// checked with zero leeway: a token is rejected the moment `exp` passes.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Create a new token handler with a secret key.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in configuration or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Issue a token for a subject with the default lifetime.
    ///
    /// # Arguments
    /// * `subject` - Opaque identity key to embed in the token
    ///
    /// # Returns
    /// URL-safe compact token string
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, subject: &str) -> Result<String, JwtError> {
        self.issue_with_ttl(subject, Duration::days(DEFAULT_TTL_DAYS))
    }

    /// Issue a token for a subject with an explicit lifetime.
    pub fn issue_with_ttl(&self, subject: &str, ttl: Duration) -> Result<String, JwtError> {
        self.encode(&Claims::for_subject(subject, ttl))
    }

    /// Encode claims into a signed token.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode(&self, claims: &Claims) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a token.
    ///
    /// # Arguments
    /// * `token` - Token string to decode
    ///
    /// # Returns
    /// Decoded claims
    ///
    /// # Errors
    /// * `TokenExpired` - Token expiry is in the past
    /// * `InvalidToken` - Signature is invalid or the structure is malformed
    pub fn decode(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                    _ => JwtError::InvalidToken(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }

    /// Decode a token and extract its subject.
    ///
    /// # Returns
    /// The subject claim as an opaque string
    ///
    /// # Errors
    /// * `TokenExpired` - Token expiry is in the past
    /// * `InvalidToken` - Signature is invalid or the structure is malformed
    /// * `MissingSubject` - Token carries no subject claim
    pub fn verify_subject(&self, token: &str) -> Result<String, JwtError> {
        self.decode(token)?.sub.ok_or(JwtError::MissingSubject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"my_secret_key_at_least_32_bytes_long!";

    #[test]
    fn test_issue_and_verify_round_trip() {
        let handler = JwtHandler::new(SECRET);

        let token = handler
            .issue("someone@example.com")
            .expect("Failed to issue token");
        assert!(!token.is_empty());

        let subject = handler
            .verify_subject(&token)
            .expect("Failed to verify token");
        assert_eq!(subject, "someone@example.com");
    }

    #[test]
    fn test_verify_malformed_token() {
        let handler = JwtHandler::new(SECRET);

        let result = handler.verify_subject("invalid.token.here");
        assert!(matches!(result, Err(JwtError::InvalidToken(_))));
    }

    #[test]
    fn test_verify_tampered_token() {
        let handler = JwtHandler::new(SECRET);

        let token = handler.issue("someone@example.com").unwrap();

        // Flip a character in the payload segment
        let mut chars: Vec<char> = token.chars().collect();
        let mid = token.len() / 2;
        chars[mid] = if chars[mid] == 'A' { 'B' } else { 'A' };
        let tampered: String = chars.into_iter().collect();

        assert!(handler.verify_subject(&tampered).is_err());
    }

    #[test]
    fn test_verify_with_wrong_secret() {
        let handler1 = JwtHandler::new(b"secret1_at_least_32_bytes_long_key!");
        let handler2 = JwtHandler::new(b"secret2_at_least_32_bytes_long_key!");

        let token = handler1.issue("someone@example.com").unwrap();

        let result = handler2.verify_subject(&token);
        assert!(matches!(result, Err(JwtError::InvalidToken(_))));
    }

    #[test]
    fn test_verify_expired_token() {
        let handler = JwtHandler::new(SECRET);

        let token = handler
            .issue_with_ttl("someone@example.com", Duration::seconds(-60))
            .unwrap();

        let result = handler.verify_subject(&token);
        assert_eq!(result, Err(JwtError::TokenExpired));
    }

    #[test]
    fn test_verify_token_without_subject() {
        let handler = JwtHandler::new(SECRET);

        let mut claims = Claims::for_subject("x", Duration::hours(1));
        claims.sub = None;
        let token = handler.encode(&claims).unwrap();

        let result = handler.verify_subject(&token);
        assert_eq!(result, Err(JwtError::MissingSubject));
    }
}
