use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::token::models::TokenPair;

pub async fn list_tokens(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<TokenPairResponseData>>, ApiError> {
    let pairs = state.token_service.list().await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        pairs.iter().map(TokenPairResponseData::from).collect(),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPairResponseData {
    pub id: String,
    pub user_id: String,
    pub access_token: String,
    pub refresh_token: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&TokenPair> for TokenPairResponseData {
    fn from(pair: &TokenPair) -> Self {
        Self {
            id: pair.id.to_string(),
            user_id: pair.user_id.to_string(),
            access_token: pair.access_token.clone(),
            refresh_token: pair.refresh_token.clone(),
            created_at: pair.created_at,
            updated_at: pair.updated_at,
        }
    }
}
