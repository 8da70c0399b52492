use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::token::errors::TokenPairError;
use crate::token::models::TokenPair;
use crate::token::models::TokenPairId;
use crate::token::ports::TokenPairRepository;
use crate::user::models::UserId;

pub struct PostgresTokenPairRepository {
    pool: PgPool,
}

impl PostgresTokenPairRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct TokenPairRow {
    id: Uuid,
    user_id: Uuid,
    access_token: String,
    refresh_token: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<TokenPairRow> for TokenPair {
    fn from(row: TokenPairRow) -> Self {
        TokenPair {
            id: TokenPairId(row.id),
            user_id: UserId(row.user_id),
            access_token: row.access_token,
            refresh_token: row.refresh_token,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl TokenPairRepository for PostgresTokenPairRepository {
    async fn save(&self, pair: TokenPair) -> Result<TokenPair, TokenPairError> {
        sqlx::query(
            r#"
            INSERT INTO token_pairs (id, user_id, access_token, refresh_token, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(pair.id.0)
        .bind(pair.user_id.0)
        .bind(&pair.access_token)
        .bind(&pair.refresh_token)
        .bind(pair.created_at)
        .bind(pair.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| TokenPairError::DatabaseError(e.to_string()))?;

        Ok(pair)
    }

    async fn update_access_token(
        &self,
        user_id: &UserId,
        refresh_token: &str,
        access_token: &str,
    ) -> Result<(), TokenPairError> {
        sqlx::query(
            r#"
            UPDATE token_pairs
            SET access_token = $1, updated_at = $2
            WHERE user_id = $3 AND refresh_token = $4
            "#,
        )
        .bind(access_token)
        .bind(Utc::now())
        .bind(user_id.0)
        .bind(refresh_token)
        .execute(&self.pool)
        .await
        .map_err(|e| TokenPairError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<TokenPair>, TokenPairError> {
        let rows = sqlx::query_as::<_, TokenPairRow>(
            r#"
            SELECT id, user_id, access_token, refresh_token, created_at, updated_at
            FROM token_pairs
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| TokenPairError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(TokenPair::from).collect())
    }
}
