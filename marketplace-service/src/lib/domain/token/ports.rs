use async_trait::async_trait;
use auth::IssuedTokens;

use crate::token::errors::TokenPairError;
use crate::token::models::TokenPair;
use crate::user::models::UserId;

/// Port for token issuance and refresh operations.
#[async_trait]
pub trait TokenServicePort: Send + Sync + 'static {
    /// Mint and persist a fresh access/refresh pair for an existing user.
    ///
    /// # Errors
    /// * `UserNotFound` - No user with this id
    /// * `SigningFailed` - Token encoding failed
    /// * `DatabaseError` - Persistence failed
    async fn issue(&self, user_id: &UserId) -> Result<IssuedTokens, TokenPairError>;

    /// Exchange a refresh token for a new access token.
    ///
    /// The stored pair (matched by refresh-token value and user id) has its
    /// access token replaced in place.
    ///
    /// # Errors
    /// * `InvalidToken` - Refresh token failed verification
    /// * `UserNotFound` - The user the token references no longer exists
    /// * `SigningFailed` - Token encoding failed
    /// * `DatabaseError` - Persistence failed
    async fn refresh(&self, refresh_token: &str) -> Result<String, TokenPairError>;

    /// Retrieve every issuance record, for audit.
    ///
    /// # Errors
    /// * `DatabaseError` - Lookup failed
    async fn list(&self) -> Result<Vec<TokenPair>, TokenPairError>;
}

/// Persistence operations for token pairs.
#[async_trait]
pub trait TokenPairRepository: Send + Sync + 'static {
    /// Persist a new issuance record.
    ///
    /// # Errors
    /// * `DatabaseError` - Insert failed
    async fn save(&self, pair: TokenPair) -> Result<TokenPair, TokenPairError>;

    /// Replace the access token of the pair matched by refresh-token value
    /// and user id, bumping its updated_at.
    ///
    /// # Errors
    /// * `DatabaseError` - Update failed
    async fn update_access_token(
        &self,
        user_id: &UserId,
        refresh_token: &str,
        access_token: &str,
    ) -> Result<(), TokenPairError>;

    /// Retrieve all issuance records.
    ///
    /// # Errors
    /// * `DatabaseError` - Lookup failed
    async fn list_all(&self) -> Result<Vec<TokenPair>, TokenPairError>;
}
