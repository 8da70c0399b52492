use thiserror::Error;

use crate::user::errors::UserIdError;

/// Top-level error for token issuance, refresh, and persistence.
#[derive(Debug, Clone, Error)]
pub enum TokenPairError {
    #[error("Invalid user ID: {0}")]
    InvalidUserId(#[from] UserIdError),

    #[error("User not found: {0}")]
    UserNotFound(String),

    /// Presented token failed verification. Sub-causes (signature,
    /// algorithm, structure, expiry) are deliberately not distinguished.
    #[error("Invalid or expired JWT")]
    InvalidToken,

    #[error("Failed to sign token: {0}")]
    SigningFailed(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<auth::TokenError> for TokenPairError {
    fn from(err: auth::TokenError) -> Self {
        match err {
            auth::TokenError::SigningFailed(msg) => TokenPairError::SigningFailed(msg),
            auth::TokenError::InvalidToken => TokenPairError::InvalidToken,
        }
    }
}
