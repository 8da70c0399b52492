use thiserror::Error;

use crate::job::errors::JobError;
use crate::user::errors::UserError;

/// Top-level error for job application operations
#[derive(Debug, Clone, Error)]
pub enum JobApplicationError {
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Job not found: {0}")]
    JobNotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<UserError> for JobApplicationError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(id) => JobApplicationError::UserNotFound(id),
            other => JobApplicationError::DatabaseError(other.to_string()),
        }
    }
}

impl From<JobError> for JobApplicationError {
    fn from(err: JobError) -> Self {
        match err {
            JobError::NotFound(id) => JobApplicationError::JobNotFound(id),
            other => JobApplicationError::DatabaseError(other.to_string()),
        }
    }
}
