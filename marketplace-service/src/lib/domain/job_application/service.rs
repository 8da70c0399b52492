use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::job::ports::JobRepository;
use crate::job_application::errors::JobApplicationError;
use crate::job_application::models::ApplyToJobCommand;
use crate::job_application::models::JobApplication;
use crate::job_application::models::JobApplicationId;
use crate::job_application::ports::JobApplicationRepository;
use crate::job_application::ports::JobApplicationServicePort;
use crate::user::models::UserId;
use crate::user::ports::UserRepository;

/// Domain service implementation for job applications.
pub struct JobApplicationService<AR, JR, UR>
where
    AR: JobApplicationRepository,
    JR: JobRepository,
    UR: UserRepository,
{
    repository: Arc<AR>,
    job_repository: Arc<JR>,
    user_repository: Arc<UR>,
}

impl<AR, JR, UR> JobApplicationService<AR, JR, UR>
where
    AR: JobApplicationRepository,
    JR: JobRepository,
    UR: UserRepository,
{
    pub fn new(repository: Arc<AR>, job_repository: Arc<JR>, user_repository: Arc<UR>) -> Self {
        Self {
            repository,
            job_repository,
            user_repository,
        }
    }
}

#[async_trait]
impl<AR, JR, UR> JobApplicationServicePort for JobApplicationService<AR, JR, UR>
where
    AR: JobApplicationRepository,
    JR: JobRepository,
    UR: UserRepository,
{
    async fn apply(
        &self,
        user_id: &UserId,
        command: ApplyToJobCommand,
    ) -> Result<JobApplication, JobApplicationError> {
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await
            .map_err(|e| JobApplicationError::DatabaseError(e.to_string()))?;

        if user.is_none() {
            return Err(JobApplicationError::UserNotFound(user_id.to_string()));
        }

        let job = self
            .job_repository
            .find_by_id_and_business_account_id(&command.job_id, &command.business_account_id)
            .await
            .map_err(|e| JobApplicationError::DatabaseError(e.to_string()))?;

        if job.is_none() {
            return Err(JobApplicationError::JobNotFound(command.job_id.to_string()));
        }

        let now = Utc::now();
        let application = JobApplication {
            id: JobApplicationId::new(),
            job_id: command.job_id,
            user_id: *user_id,
            created_at: now,
            updated_at: now,
        };

        let created = self.repository.create(application).await?;

        tracing::info!(
            job_application_id = %created.id,
            job_id = %created.job_id,
            user_id = %user_id,
            "Job application submitted"
        );

        Ok(created)
    }

    async fn list(&self) -> Result<Vec<JobApplication>, JobApplicationError> {
        self.repository.list_all().await
    }
}
