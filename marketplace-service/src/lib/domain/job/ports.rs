use async_trait::async_trait;

use crate::business_account::models::BusinessAccountId;
use crate::job::errors::JobError;
use crate::job::models::CreateJobCommand;
use crate::job::models::Job;
use crate::job::models::JobId;
use crate::user::models::UserId;

/// Port for job domain service operations.
#[async_trait]
pub trait JobServicePort: Send + Sync + 'static {
    /// Post a new job. The target business account must exist and be owned
    /// by the calling user.
    ///
    /// # Errors
    /// * `BusinessAccountNotFound` - No such account, or owned by someone else
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user_id: &UserId, command: CreateJobCommand) -> Result<Job, JobError>;

    /// Retrieve all posted jobs.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list(&self) -> Result<Vec<Job>, JobError>;
}

/// Persistence operations for jobs.
#[async_trait]
pub trait JobRepository: Send + Sync + 'static {
    /// Persist a new job.
    ///
    /// # Errors
    /// * `DatabaseError` - Insert failed
    async fn create(&self, job: Job) -> Result<Job, JobError>;

    /// Retrieve a job by id, scoped to the business account that posted it
    /// (None if the job does not exist under that account).
    ///
    /// # Errors
    /// * `DatabaseError` - Lookup failed
    async fn find_by_id_and_business_account_id(
        &self,
        id: &JobId,
        business_account_id: &BusinessAccountId,
    ) -> Result<Option<Job>, JobError>;

    /// Retrieve all jobs.
    ///
    /// # Errors
    /// * `DatabaseError` - Lookup failed
    async fn list_all(&self) -> Result<Vec<Job>, JobError>;
}
