use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::create_user::TokenResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserIdError;
use crate::user::models::UserId;

/// Mint a fresh token pair for an existing user.
pub async fn create_tokens(
    State(state): State<AppState>,
    Json(body): Json<CreateTokensRequest>,
) -> Result<ApiSuccess<TokenResponseData>, ApiError> {
    let user_id = body.try_into_user_id()?;

    let tokens = state.token_service.issue(&user_id).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        TokenResponseData {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateTokensRequest {
    #[serde(rename = "userID")]
    user_id: String,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateTokensRequestError {
    #[error("User ID must be a valid UUID")]
    UserId(#[from] UserIdError),
}

impl CreateTokensRequest {
    fn try_into_user_id(self) -> Result<UserId, ParseCreateTokensRequestError> {
        Ok(UserId::from_string(&self.user_id)?)
    }
}

impl From<ParseCreateTokensRequestError> for ApiError {
    fn from(err: ParseCreateTokensRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_uuid_parses() {
        let req = CreateTokensRequest {
            user_id: UserId::new().to_string(),
        };
        assert!(req.try_into_user_id().is_ok());
    }

    #[test]
    fn test_malformed_uuid_is_rejected() {
        let req = CreateTokensRequest {
            user_id: "abc".to_string(),
        };
        assert!(req.try_into_user_id().is_err());
    }
}
