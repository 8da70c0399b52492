use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::business_account::models::BusinessAccountId;
use crate::job::errors::JobIdError;

/// Job unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JobId(pub Uuid);

impl JobId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a job ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, JobIdError> {
        Uuid::parse_str(s)
            .map(JobId)
            .map_err(|e| JobIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Job aggregate entity.
///
/// A posting published by a business account, open for applications.
#[derive(Debug, Clone)]
pub struct Job {
    pub id: JobId,
    pub business_account_id: BusinessAccountId,
    pub name: String,
    pub description: String,
    pub price: f32,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Command to post a job under one of the caller's business accounts.
#[derive(Debug)]
pub struct CreateJobCommand {
    pub business_account_id: BusinessAccountId,
    pub name: String,
    pub description: String,
    pub price: f32,
    pub category: String,
}
