use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::business_account::errors::BusinessAccountIdError;
use crate::user::models::UserId;

/// Business account unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BusinessAccountId(pub Uuid);

impl BusinessAccountId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a business account ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, BusinessAccountIdError> {
        Uuid::parse_str(s)
            .map(BusinessAccountId)
            .map_err(|e| BusinessAccountIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for BusinessAccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BusinessAccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Business account aggregate entity.
///
/// A user-owned storefront that posts jobs.
#[derive(Debug, Clone)]
pub struct BusinessAccount {
    pub id: BusinessAccountId,
    pub user_id: UserId,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Command to create a business account for the authenticated user.
#[derive(Debug)]
pub struct CreateBusinessAccountCommand {
    pub name: String,
    pub description: String,
}
