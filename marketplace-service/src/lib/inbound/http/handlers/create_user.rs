use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::user::errors::EmailError;
use crate::user::models::EmailAddress;
use crate::user::models::RegisterUserCommand;

pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequest>,
) -> Result<ApiSuccess<CreateUserResponseData>, ApiError> {
    let command = body.try_into_command()?;

    let (_, tokens) = state.user_service.register(command).await?;

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        CreateUserResponseData {
            message: "User Created Successfully".to_string(),
            response: TokenResponseData {
                access_token: tokens.access_token,
                refresh_token: tokens.refresh_token,
            },
        },
    ))
}

/// HTTP request body for registering a user (raw JSON)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    first_name: String,
    last_name: String,
    email: String,
    password: String,
    age: i32,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateUserRequestError {
    #[error("First name must be at least 2 characters")]
    FirstNameTooShort,

    #[error("Last name is required")]
    LastNameMissing,

    #[error("Email format is not correct")]
    Email(#[from] EmailError),

    #[error("Password must be between 8 and 16 characters")]
    PasswordLength,

    #[error("Age must be between 0 and 130")]
    AgeOutOfRange,
}

impl CreateUserRequest {
    fn try_into_command(self) -> Result<RegisterUserCommand, ParseCreateUserRequestError> {
        if self.first_name.chars().count() < 2 {
            return Err(ParseCreateUserRequestError::FirstNameTooShort);
        }
        if self.last_name.is_empty() {
            return Err(ParseCreateUserRequestError::LastNameMissing);
        }
        if !(8..=16).contains(&self.password.chars().count()) {
            return Err(ParseCreateUserRequestError::PasswordLength);
        }
        if !(0..=130).contains(&self.age) {
            return Err(ParseCreateUserRequestError::AgeOutOfRange);
        }

        let email = EmailAddress::new(self.email)?;

        Ok(RegisterUserCommand {
            first_name: self.first_name,
            last_name: self.last_name,
            email,
            password: self.password,
            age: self.age,
        })
    }
}

impl From<ParseCreateUserRequestError> for ApiError {
    fn from(err: ParseCreateUserRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateUserResponseData {
    pub message: String,
    pub response: TokenResponseData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponseData {
    pub access_token: String,
    pub refresh_token: String,
}
