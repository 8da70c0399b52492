use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::business_account::ports::BusinessAccountRepository;
use crate::job::errors::JobError;
use crate::job::models::CreateJobCommand;
use crate::job::models::Job;
use crate::job::models::JobId;
use crate::job::ports::JobRepository;
use crate::job::ports::JobServicePort;
use crate::user::models::UserId;

/// Domain service implementation for job operations.
pub struct JobService<JR, BR>
where
    JR: JobRepository,
    BR: BusinessAccountRepository,
{
    repository: Arc<JR>,
    business_account_repository: Arc<BR>,
}

impl<JR, BR> JobService<JR, BR>
where
    JR: JobRepository,
    BR: BusinessAccountRepository,
{
    pub fn new(repository: Arc<JR>, business_account_repository: Arc<BR>) -> Self {
        Self {
            repository,
            business_account_repository,
        }
    }
}

#[async_trait]
impl<JR, BR> JobServicePort for JobService<JR, BR>
where
    JR: JobRepository,
    BR: BusinessAccountRepository,
{
    async fn create(&self, user_id: &UserId, command: CreateJobCommand) -> Result<Job, JobError> {
        // Only the owner of the business account may post under it.
        let account = self
            .business_account_repository
            .find_by_id_and_user_id(&command.business_account_id, user_id)
            .await?;

        if account.is_none() {
            return Err(JobError::BusinessAccountNotFound(
                command.business_account_id.to_string(),
            ));
        }

        let now = Utc::now();
        let job = Job {
            id: JobId::new(),
            business_account_id: command.business_account_id,
            name: command.name,
            description: command.description,
            price: command.price,
            category: command.category,
            created_at: now,
            updated_at: now,
        };

        let created = self.repository.create(job).await?;

        tracing::info!(
            job_id = %created.id,
            business_account_id = %created.business_account_id,
            "Job posted"
        );

        Ok(created)
    }

    async fn list(&self) -> Result<Vec<Job>, JobError> {
        self.repository.list_all().await
    }
}
