use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::business_account::models::BusinessAccountId;
use crate::job::errors::JobError;
use crate::job::models::Job;
use crate::job::models::JobId;
use crate::job::ports::JobRepository;

pub struct PostgresJobRepository {
    pool: PgPool,
}

impl PostgresJobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct JobRow {
    id: Uuid,
    business_account_id: Uuid,
    name: String,
    description: String,
    price: f32,
    category: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<JobRow> for Job {
    fn from(row: JobRow) -> Self {
        Job {
            id: JobId(row.id),
            business_account_id: BusinessAccountId(row.business_account_id),
            name: row.name,
            description: row.description,
            price: row.price,
            category: row.category,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const SELECT_JOB: &str = r#"
    SELECT id, business_account_id, name, description, price, category, created_at, updated_at
    FROM jobs
"#;

#[async_trait]
impl JobRepository for PostgresJobRepository {
    async fn create(&self, job: Job) -> Result<Job, JobError> {
        sqlx::query(
            r#"
            INSERT INTO jobs (id, business_account_id, name, description, price, category, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(job.id.0)
        .bind(job.business_account_id.0)
        .bind(&job.name)
        .bind(&job.description)
        .bind(job.price)
        .bind(&job.category)
        .bind(job.created_at)
        .bind(job.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| JobError::DatabaseError(e.to_string()))?;

        Ok(job)
    }

    async fn find_by_id_and_business_account_id(
        &self,
        id: &JobId,
        business_account_id: &BusinessAccountId,
    ) -> Result<Option<Job>, JobError> {
        let row = sqlx::query_as::<_, JobRow>(&format!(
            "{SELECT_JOB} WHERE id = $1 AND business_account_id = $2"
        ))
        .bind(id.0)
        .bind(business_account_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| JobError::DatabaseError(e.to_string()))?;

        Ok(row.map(Job::from))
    }

    async fn list_all(&self) -> Result<Vec<Job>, JobError> {
        let rows = sqlx::query_as::<_, JobRow>(&format!("{SELECT_JOB} ORDER BY created_at"))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| JobError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Job::from).collect())
    }
}
