use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// Signed token payload.
///
/// Exists only inside the compact token string; never persisted. The `jti`
/// is set for refresh tokens only, so individual refresh tokens stay
/// distinguishable from one another.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject: the authenticated user's identifier.
    pub sub: String,

    /// Expiration time (Unix timestamp, seconds).
    pub exp: i64,

    /// Unique token identifier (refresh tokens only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
}

impl Claims {
    /// Claims for a short-lived access token.
    pub fn access(user_id: &str, expires_at: i64) -> Self {
        Self {
            sub: user_id.to_string(),
            exp: expires_at,
            jti: None,
        }
    }

    /// Claims for a long-lived refresh token, with a fresh random `jti`.
    pub fn refresh(user_id: &str, expires_at: i64) -> Self {
        Self {
            sub: user_id.to_string(),
            exp: expires_at,
            jti: Some(Uuid::new_v4().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_claims_carry_no_jti() {
        let claims = Claims::access("user123", 1234567890);
        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.exp, 1234567890);
        assert!(claims.jti.is_none());
    }

    #[test]
    fn test_refresh_claims_get_unique_jti() {
        let first = Claims::refresh("user123", 1234567890);
        let second = Claims::refresh("user123", 1234567890);

        assert!(first.jti.is_some());
        assert!(second.jti.is_some());
        assert_ne!(first.jti, second.jti);
    }
}
