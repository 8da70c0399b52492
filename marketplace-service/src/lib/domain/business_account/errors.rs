use thiserror::Error;

/// Error for BusinessAccountId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BusinessAccountIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for business account operations
#[derive(Debug, Clone, Error)]
pub enum BusinessAccountError {
    #[error("Invalid business account ID: {0}")]
    InvalidId(#[from] BusinessAccountIdError),

    #[error("Business account not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
