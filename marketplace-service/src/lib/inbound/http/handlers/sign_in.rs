use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::create_user::TokenResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::user::errors::EmailError;
use crate::user::models::EmailAddress;
use crate::user::models::SignInCommand;

pub async fn sign_in(
    State(state): State<AppState>,
    Json(body): Json<SignInRequest>,
) -> Result<ApiSuccess<SignInResponseData>, ApiError> {
    let command = body.try_into_command()?;

    let (_, tokens) = state.user_service.sign_in(command).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        SignInResponseData {
            message: "User Successfully Sign In".to_string(),
            response: TokenResponseData {
                access_token: tokens.access_token,
                refresh_token: tokens.refresh_token,
            },
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SignInRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, Error)]
enum ParseSignInRequestError {
    #[error("Email format is not correct")]
    Email(#[from] EmailError),

    #[error("Password is required")]
    PasswordMissing,
}

impl SignInRequest {
    fn try_into_command(self) -> Result<SignInCommand, ParseSignInRequestError> {
        if self.password.is_empty() {
            return Err(ParseSignInRequestError::PasswordMissing);
        }

        let email = EmailAddress::new(self.email)?;

        Ok(SignInCommand {
            email,
            password: self.password,
        })
    }
}

impl From<ParseSignInRequestError> for ApiError {
    fn from(err: ParseSignInRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignInResponseData {
    pub message: String,
    pub response: TokenResponseData,
}
