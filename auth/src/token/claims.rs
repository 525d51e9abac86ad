use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Subject tag carried by every access token.
pub const ACCESS_TOKEN_SUBJECT: &str = "access";

/// Default token lifetime when the caller does not specify one.
pub const DEFAULT_TTL_MINUTES: i64 = 15;

/// Claim set of an access token.
///
/// Tokens are stateless bearer credentials: the email claim points at the
/// credential they were issued for, and expiry is purely a timestamp
/// comparison at verification time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessClaims {
    /// Subject, always [`ACCESS_TOKEN_SUBJECT`]
    pub sub: String,

    /// Identity claim: the email of the client the token was issued for
    pub email: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl AccessClaims {
    /// Create claims for a client with the given time to live.
    ///
    /// # Arguments
    /// * `email` - Identity claim
    /// * `ttl` - Token lifetime; defaults to [`DEFAULT_TTL_MINUTES`]
    pub fn for_client(email: impl ToString, ttl: Option<Duration>) -> Self {
        let ttl = ttl.unwrap_or_else(|| Duration::minutes(DEFAULT_TTL_MINUTES));
        let expiration = Utc::now() + ttl;

        Self {
            sub: ACCESS_TOKEN_SUBJECT.to_string(),
            email: email.to_string(),
            exp: expiration.timestamp(),
        }
    }

    /// Set expiration (Unix timestamp).
    pub fn with_expiration(mut self, exp: i64) -> Self {
        self.exp = exp;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_client_defaults() {
        let claims = AccessClaims::for_client("a@x.com", None);

        assert_eq!(claims.sub, ACCESS_TOKEN_SUBJECT);
        assert_eq!(claims.email, "a@x.com");

        let remaining = claims.exp - Utc::now().timestamp();
        assert!(remaining > 14 * 60 && remaining <= 15 * 60);
    }

    #[test]
    fn test_for_client_explicit_ttl() {
        let claims = AccessClaims::for_client("a@x.com", Some(Duration::minutes(60)));

        let remaining = claims.exp - Utc::now().timestamp();
        assert!(remaining > 59 * 60 && remaining <= 60 * 60);
    }
}
