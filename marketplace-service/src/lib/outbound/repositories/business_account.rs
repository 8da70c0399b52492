use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::business_account::errors::BusinessAccountError;
use crate::business_account::models::BusinessAccount;
use crate::business_account::models::BusinessAccountId;
use crate::business_account::ports::BusinessAccountRepository;
use crate::user::models::UserId;

pub struct PostgresBusinessAccountRepository {
    pool: PgPool,
}

impl PostgresBusinessAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct BusinessAccountRow {
    id: Uuid,
    user_id: Uuid,
    name: String,
    description: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<BusinessAccountRow> for BusinessAccount {
    fn from(row: BusinessAccountRow) -> Self {
        BusinessAccount {
            id: BusinessAccountId(row.id),
            user_id: UserId(row.user_id),
            name: row.name,
            description: row.description,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const SELECT_ACCOUNT: &str = r#"
    SELECT id, user_id, name, description, created_at, updated_at
    FROM business_accounts
"#;

#[async_trait]
impl BusinessAccountRepository for PostgresBusinessAccountRepository {
    async fn create(
        &self,
        account: BusinessAccount,
    ) -> Result<BusinessAccount, BusinessAccountError> {
        sqlx::query(
            r#"
            INSERT INTO business_accounts (id, user_id, name, description, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(account.id.0)
        .bind(account.user_id.0)
        .bind(&account.name)
        .bind(&account.description)
        .bind(account.created_at)
        .bind(account.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| BusinessAccountError::DatabaseError(e.to_string()))?;

        Ok(account)
    }

    async fn find_by_id_and_user_id(
        &self,
        id: &BusinessAccountId,
        user_id: &UserId,
    ) -> Result<Option<BusinessAccount>, BusinessAccountError> {
        let row = sqlx::query_as::<_, BusinessAccountRow>(&format!(
            "{SELECT_ACCOUNT} WHERE id = $1 AND user_id = $2"
        ))
        .bind(id.0)
        .bind(user_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| BusinessAccountError::DatabaseError(e.to_string()))?;

        Ok(row.map(BusinessAccount::from))
    }

    async fn list_all(&self) -> Result<Vec<BusinessAccount>, BusinessAccountError> {
        let rows =
            sqlx::query_as::<_, BusinessAccountRow>(&format!("{SELECT_ACCOUNT} ORDER BY created_at"))
                .fetch_all(&self.pool)
                .await
                .map_err(|e| BusinessAccountError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(BusinessAccount::from).collect())
    }
}
