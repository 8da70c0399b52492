use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::job::models::JobId;
use crate::job_application::errors::JobApplicationError;
use crate::job_application::models::JobApplication;
use crate::job_application::models::JobApplicationId;
use crate::job_application::ports::JobApplicationRepository;
use crate::user::models::UserId;

pub struct PostgresJobApplicationRepository {
    pool: PgPool,
}

impl PostgresJobApplicationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct JobApplicationRow {
    id: Uuid,
    job_id: Uuid,
    user_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<JobApplicationRow> for JobApplication {
    fn from(row: JobApplicationRow) -> Self {
        JobApplication {
            id: JobApplicationId(row.id),
            job_id: JobId(row.job_id),
            user_id: UserId(row.user_id),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl JobApplicationRepository for PostgresJobApplicationRepository {
    async fn create(
        &self,
        application: JobApplication,
    ) -> Result<JobApplication, JobApplicationError> {
        sqlx::query(
            r#"
            INSERT INTO job_applications (id, job_id, user_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(application.id.0)
        .bind(application.job_id.0)
        .bind(application.user_id.0)
        .bind(application.created_at)
        .bind(application.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| JobApplicationError::DatabaseError(e.to_string()))?;

        Ok(application)
    }

    async fn list_all(&self) -> Result<Vec<JobApplication>, JobApplicationError> {
        let rows = sqlx::query_as::<_, JobApplicationRow>(
            r#"
            SELECT id, job_id, user_id, created_at, updated_at
            FROM job_applications
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| JobApplicationError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(JobApplication::from).collect())
    }
}
