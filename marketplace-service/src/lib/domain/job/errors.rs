use thiserror::Error;

use crate::business_account::errors::BusinessAccountError;

/// Error for JobId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JobIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for job operations
#[derive(Debug, Clone, Error)]
pub enum JobError {
    #[error("Invalid job ID: {0}")]
    InvalidId(#[from] JobIdError),

    #[error("Job not found: {0}")]
    NotFound(String),

    #[error("Business account not found: {0}")]
    BusinessAccountNotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<BusinessAccountError> for JobError {
    fn from(err: BusinessAccountError) -> Self {
        match err {
            BusinessAccountError::NotFound(id) => JobError::BusinessAccountNotFound(id),
            other => JobError::DatabaseError(other.to_string()),
        }
    }
}
