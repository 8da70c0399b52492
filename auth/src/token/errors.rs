use thiserror::Error;

/// Error type for token issuance and validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    /// Token could not be signed. Never carries key material.
    #[error("Failed to sign token: {0}")]
    SigningFailed(String),

    /// Signature mismatch, wrong algorithm, malformed structure, or expiry.
    ///
    /// Deliberately a single variant: callers (and therefore clients) cannot
    /// tell the sub-causes apart.
    #[error("Invalid or expired JWT")]
    InvalidToken,
}
