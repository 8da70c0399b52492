use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use crate::business_account::models::BusinessAccount;
use crate::business_account::models::CreateBusinessAccountCommand;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Open a business account owned by the authenticated user.
pub async fn create_business_account(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Json(body): Json<CreateBusinessAccountRequest>,
) -> Result<ApiSuccess<BusinessAccountResponseData>, ApiError> {
    let command = body.try_into_command()?;

    let account = state
        .business_account_service
        .create(&caller.user_id, command)
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        BusinessAccountResponseData::from(&account),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateBusinessAccountRequest {
    name: String,
    description: String,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateBusinessAccountRequestError {
    #[error("Business name must be at least 2 characters")]
    NameTooShort,
}

impl CreateBusinessAccountRequest {
    fn try_into_command(
        self,
    ) -> Result<CreateBusinessAccountCommand, ParseCreateBusinessAccountRequestError> {
        if self.name.chars().count() < 2 {
            return Err(ParseCreateBusinessAccountRequestError::NameTooShort);
        }

        Ok(CreateBusinessAccountCommand {
            name: self.name,
            description: self.description,
        })
    }
}

impl From<ParseCreateBusinessAccountRequestError> for ApiError {
    fn from(err: ParseCreateBusinessAccountRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessAccountResponseData {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&BusinessAccount> for BusinessAccountResponseData {
    fn from(account: &BusinessAccount) -> Self {
        Self {
            id: account.id.to_string(),
            user_id: account.user_id.to_string(),
            name: account.name.clone(),
            description: account.description.clone(),
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}
