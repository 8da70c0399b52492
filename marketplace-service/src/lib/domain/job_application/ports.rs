use async_trait::async_trait;

use crate::job_application::errors::JobApplicationError;
use crate::job_application::models::ApplyToJobCommand;
use crate::job_application::models::JobApplication;
use crate::user::models::UserId;

/// Port for job application domain service operations.
#[async_trait]
pub trait JobApplicationServicePort: Send + Sync + 'static {
    /// Apply the authenticated user to a job.
    ///
    /// # Errors
    /// * `UserNotFound` - The applicant no longer exists
    /// * `JobNotFound` - No such job under the given business account
    /// * `DatabaseError` - Database operation failed
    async fn apply(
        &self,
        user_id: &UserId,
        command: ApplyToJobCommand,
    ) -> Result<JobApplication, JobApplicationError>;

    /// Retrieve all applications.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list(&self) -> Result<Vec<JobApplication>, JobApplicationError>;
}

/// Persistence operations for job applications.
#[async_trait]
pub trait JobApplicationRepository: Send + Sync + 'static {
    /// Persist a new application.
    ///
    /// # Errors
    /// * `DatabaseError` - Insert failed
    async fn create(
        &self,
        application: JobApplication,
    ) -> Result<JobApplication, JobApplicationError>;

    /// Retrieve all applications.
    ///
    /// # Errors
    /// * `DatabaseError` - Lookup failed
    async fn list_all(&self) -> Result<Vec<JobApplication>, JobApplicationError>;
}
