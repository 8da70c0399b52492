use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::business_account::models::BusinessAccountId;
use crate::job::models::JobId;
use crate::user::models::UserId;

/// Job application unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JobApplicationId(pub Uuid);

impl JobApplicationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for JobApplicationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for JobApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Job application aggregate entity.
///
/// Records that a user applied to a job.
#[derive(Debug, Clone)]
pub struct JobApplication {
    pub id: JobApplicationId,
    pub job_id: JobId,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Command to apply to a job. The business account id pins which account
/// the job is expected to belong to.
#[derive(Debug)]
pub struct ApplyToJobCommand {
    pub job_id: JobId,
    pub business_account_id: BusinessAccountId,
}
