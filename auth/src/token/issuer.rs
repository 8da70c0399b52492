use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// An access/refresh token pair minted in a single issuance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedTokens {
    pub access_token: String,
    pub refresh_token: String,
}

/// Mints and verifies HMAC-signed (HS256) access and refresh tokens.
///
/// Access and refresh tokens are signed with two independent keys, bounding
/// the blast radius of a leaked key to one token class. Keys and lifetimes
/// are immutable for the process lifetime.
pub struct TokenIssuer {
    access_encoding_key: EncodingKey,
    access_decoding_key: DecodingKey,
    refresh_encoding_key: EncodingKey,
    refresh_decoding_key: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenIssuer {
    /// Create a token issuer from explicit configuration.
    ///
    /// # Arguments
    /// * `access_secret` - Key signing access tokens (at least 32 bytes)
    /// * `refresh_secret` - Key signing refresh tokens, independent of the
    ///   access key
    /// * `access_ttl` - Access token lifetime
    /// * `refresh_ttl` - Refresh token lifetime
    pub fn new(
        access_secret: &[u8],
        refresh_secret: &[u8],
        access_ttl: Duration,
        refresh_ttl: Duration,
    ) -> Self {
        Self {
            access_encoding_key: EncodingKey::from_secret(access_secret),
            access_decoding_key: DecodingKey::from_secret(access_secret),
            refresh_encoding_key: EncodingKey::from_secret(refresh_secret),
            refresh_decoding_key: DecodingKey::from_secret(refresh_secret),
            access_ttl,
            refresh_ttl,
        }
    }

    /// Mint a short-lived access token for the given user.
    ///
    /// # Errors
    /// * `SigningFailed` - Token encoding failed
    pub fn create_access_token(&self, user_id: &str) -> Result<String, TokenError> {
        let claims = Claims::access(user_id, self.expires_at(self.access_ttl));
        self.sign(&claims, &self.access_encoding_key)
    }

    /// Mint a long-lived refresh token for the given user.
    ///
    /// The refresh claims carry a fresh random `jti`, a prerequisite for any
    /// future revocation list; it is not checked against one today.
    ///
    /// # Errors
    /// * `SigningFailed` - Token encoding failed
    pub fn create_refresh_token(&self, user_id: &str) -> Result<String, TokenError> {
        let claims = Claims::refresh(user_id, self.expires_at(self.refresh_ttl));
        self.sign(&claims, &self.refresh_encoding_key)
    }

    /// Mint an access/refresh pair. Never returns one token without the other.
    ///
    /// # Errors
    /// * `SigningFailed` - Either encoding failed
    pub fn create_token_pair(&self, user_id: &str) -> Result<IssuedTokens, TokenError> {
        let access_token = self.create_access_token(user_id)?;
        let refresh_token = self.create_refresh_token(user_id)?;

        Ok(IssuedTokens {
            access_token,
            refresh_token,
        })
    }

    /// Verify an access token and extract the user id it was issued to.
    ///
    /// # Errors
    /// * `InvalidToken` - Bad signature, wrong algorithm, malformed
    ///   structure, or expired. Sub-causes are not distinguished.
    pub fn parse_access_token(&self, token: &str) -> Result<String, TokenError> {
        self.parse(token, &self.access_decoding_key)
    }

    /// Verify a refresh token and extract the user id it was issued to.
    ///
    /// # Errors
    /// * `InvalidToken` - Bad signature, wrong algorithm, malformed
    ///   structure, or expired. Sub-causes are not distinguished.
    pub fn parse_refresh_token(&self, token: &str) -> Result<String, TokenError> {
        self.parse(token, &self.refresh_decoding_key)
    }

    fn expires_at(&self, ttl: Duration) -> i64 {
        Utc::now().timestamp() + ttl.as_secs() as i64
    }

    fn sign(&self, claims: &Claims, key: &EncodingKey) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, key)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }

    fn parse(&self, token: &str, key: &DecodingKey) -> Result<String, TokenError> {
        // Pinning the algorithm rejects "none" and any non-HS256 header
        // before the signature is even checked.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let data = decode::<Claims>(token, key, &validation).map_err(|_| TokenError::InvalidToken)?;

        Ok(data.claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issuer() -> TokenIssuer {
        TokenIssuer::new(
            b"test-access-key-at-least-32-bytes!!",
            b"test-refresh-key-at-least-32-bytes!",
            Duration::from_secs(15 * 60),
            Duration::from_secs(24 * 3600),
        )
    }

    // base64url without padding, for hand-built token fixtures.
    fn b64url(input: &[u8]) -> String {
        const ALPHABET: &[u8] =
            b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";
        let mut out = String::new();
        for chunk in input.chunks(3) {
            let b = [
                chunk[0],
                chunk.get(1).copied().unwrap_or(0),
                chunk.get(2).copied().unwrap_or(0),
            ];
            let n = ((b[0] as u32) << 16) | ((b[1] as u32) << 8) | b[2] as u32;
            out.push(ALPHABET[(n >> 18) as usize & 63] as char);
            out.push(ALPHABET[(n >> 12) as usize & 63] as char);
            if chunk.len() > 1 {
                out.push(ALPHABET[(n >> 6) as usize & 63] as char);
            }
            if chunk.len() > 2 {
                out.push(ALPHABET[n as usize & 63] as char);
            }
        }
        out
    }

    #[test]
    fn test_access_token_round_trip() {
        let issuer = issuer();

        let token = issuer.create_access_token("user123").unwrap();
        let user_id = issuer.parse_access_token(&token).unwrap();

        assert_eq!(user_id, "user123");
    }

    #[test]
    fn test_refresh_token_round_trip() {
        let issuer = issuer();

        let token = issuer.create_refresh_token("user123").unwrap();
        let user_id = issuer.parse_refresh_token(&token).unwrap();

        assert_eq!(user_id, "user123");
    }

    #[test]
    fn test_token_pair_is_two_distinct_tokens() {
        let tokens = issuer().create_token_pair("user123").unwrap();

        assert!(!tokens.access_token.is_empty());
        assert!(!tokens.refresh_token.is_empty());
        assert_ne!(tokens.access_token, tokens.refresh_token);
    }

    #[test]
    fn test_keys_are_not_interchangeable() {
        let issuer = issuer();

        let access = issuer.create_access_token("user123").unwrap();
        let refresh = issuer.create_refresh_token("user123").unwrap();

        assert_eq!(
            issuer.parse_refresh_token(&access),
            Err(TokenError::InvalidToken)
        );
        assert_eq!(
            issuer.parse_access_token(&refresh),
            Err(TokenError::InvalidToken)
        );
    }

    #[test]
    fn test_token_from_another_issuer_is_rejected() {
        let other = TokenIssuer::new(
            b"some-other-access-key-32-bytes-long",
            b"some-other-refresh-key-32-bytes-lon",
            Duration::from_secs(900),
            Duration::from_secs(86400),
        );

        let token = other.create_access_token("user123").unwrap();

        assert_eq!(
            issuer().parse_access_token(&token),
            Err(TokenError::InvalidToken)
        );
    }

    #[test]
    fn test_expired_token_is_rejected_despite_valid_signature() {
        let issuer = issuer();

        let claims = Claims::access("user123", Utc::now().timestamp() - 3600);
        let token = issuer.sign(&claims, &issuer.access_encoding_key).unwrap();

        assert_eq!(
            issuer.parse_access_token(&token),
            Err(TokenError::InvalidToken)
        );
    }

    #[test]
    fn test_none_algorithm_is_rejected() {
        let header = b64url(br#"{"alg":"none","typ":"JWT"}"#);
        let payload = b64url(br#"{"sub":"user123","exp":32503680000}"#);
        let token = format!("{}.{}.", header, payload);

        assert_eq!(
            issuer().parse_access_token(&token),
            Err(TokenError::InvalidToken)
        );
    }

    #[test]
    fn test_other_hmac_algorithm_is_rejected() {
        let issuer = issuer();

        // Same key, but HS384 in the header: the algorithm pin must reject it.
        let claims = Claims::access("user123", Utc::now().timestamp() + 3600);
        let token = encode(
            &Header::new(Algorithm::HS384),
            &claims,
            &EncodingKey::from_secret(b"test-access-key-at-least-32-bytes!!"),
        )
        .unwrap();

        assert_eq!(
            issuer.parse_access_token(&token),
            Err(TokenError::InvalidToken)
        );
    }

    #[test]
    fn test_malformed_token_is_rejected() {
        let issuer = issuer();

        assert_eq!(
            issuer.parse_access_token("not.a.jwt"),
            Err(TokenError::InvalidToken)
        );
        assert_eq!(issuer.parse_access_token(""), Err(TokenError::InvalidToken));
    }

    #[test]
    fn test_concurrent_issuance_is_independent() {
        let issuer = std::sync::Arc::new(issuer());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let issuer = std::sync::Arc::clone(&issuer);
                std::thread::spawn(move || {
                    let user_id = format!("user{}", i);
                    let token = issuer.create_access_token(&user_id).unwrap();
                    assert_eq!(issuer.parse_access_token(&token).unwrap(), user_id);
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    }
}
