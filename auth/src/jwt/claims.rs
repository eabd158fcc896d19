use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Default token lifetime.
///
/// Tokens are practically non-expiring: there is no refresh or revocation
/// flow, so a login stays usable until this distant expiry.
pub const DEFAULT_TTL_DAYS: i64 = 999;

/// Claims carried by a bearer token.
///
/// The subject is an opaque string key; resolving it to a user is the
/// caller's concern. `iat` and `exp` are Unix timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (opaque identity key)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a subject with an explicit lifetime.
    ///
    /// # Arguments
    /// * `subject` - Opaque identity key to embed
    /// * `ttl` - Time until the token expires
    pub fn for_subject(subject: impl ToString, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            sub: Some(subject.to_string()),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }

    /// Create claims for a subject with the default lifetime.
    pub fn with_default_ttl(subject: impl ToString) -> Self {
        Self::for_subject(subject, Duration::days(DEFAULT_TTL_DAYS))
    }

    /// Check if the token is expired at the given timestamp.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_subject() {
        let claims = Claims::for_subject("someone@example.com", Duration::hours(2));

        assert_eq!(claims.sub, Some("someone@example.com".to_string()));
        assert_eq!(claims.exp - claims.iat, 2 * 60 * 60);
    }

    #[test]
    fn test_default_ttl() {
        let claims = Claims::with_default_ttl("someone@example.com");

        assert_eq!(claims.exp - claims.iat, DEFAULT_TTL_DAYS * 24 * 60 * 60);
    }

    #[test]
    fn test_is_expired() {
        let claims = Claims {
            sub: None,
            iat: 0,
            exp: 1000,
        };

        assert!(!claims.is_expired(999));
        assert!(!claims.is_expired(1000));
        assert!(claims.is_expired(1001));
    }
}
