use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::user::models::UserId;

/// Token pair unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenPairId(pub Uuid);

impl TokenPairId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TokenPairId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TokenPairId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One token issuance event, persisted for audit/lookup.
///
/// Always references an existing user. The access token is replaced in place
/// on refresh; stale rows are never swept.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub id: TokenPairId,
    pub user_id: UserId,
    pub access_token: String,
    pub refresh_token: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TokenPair {
    /// Build a new issuance record for the given user.
    pub fn new(user_id: UserId, access_token: String, refresh_token: String) -> Self {
        let now = Utc::now();
        Self {
            id: TokenPairId::new(),
            user_id,
            access_token,
            refresh_token,
            created_at: now,
            updated_at: now,
        }
    }
}
