use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::business_account::errors::BusinessAccountError;
use crate::job::errors::JobError;
use crate::job_application::errors::JobApplicationError;
use crate::token::errors::TokenPairError;
use crate::user::errors::UserError;

pub mod create_business_account;
pub mod create_job;
pub mod create_job_application;
pub mod create_tokens;
pub mod create_user;
pub mod get_user;
pub mod list_business_accounts;
pub mod list_job_applications;
pub mod list_jobs;
pub mod list_tokens;
pub mod list_users;
pub mod refresh_tokens;
pub mod sign_in;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize>(StatusCode, Json<T>);

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Uniform error envelope: `{"statusCode": ..., "message": ...}`.
///
/// No internal error type or stack detail crosses this boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    pub status_code: u16,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    Unauthorized(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalServerError(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        (
            status,
            Json(ApiErrorBody {
                status_code: status.as_u16(),
                message,
            }),
        )
            .into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => ApiError::NotFound(err.to_string()),
            UserError::EmailAlreadyExists(_) => ApiError::BadRequest(err.to_string()),
            UserError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            UserError::InvalidUserId(_) | UserError::InvalidEmail(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            UserError::PasswordHash(_)
            | UserError::TokenIssuance(_)
            | UserError::DatabaseError(_)
            | UserError::Unknown(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<TokenPairError> for ApiError {
    fn from(err: TokenPairError) -> Self {
        match err {
            TokenPairError::UserNotFound(_) => ApiError::NotFound(err.to_string()),
            // A refresh token whose subject is not a valid id is as good as
            // forged; report it like any other invalid token.
            TokenPairError::InvalidToken | TokenPairError::InvalidUserId(_) => {
                ApiError::Unauthorized("Invalid or expired JWT".to_string())
            }
            TokenPairError::SigningFailed(_) | TokenPairError::DatabaseError(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<BusinessAccountError> for ApiError {
    fn from(err: BusinessAccountError) -> Self {
        match err {
            BusinessAccountError::NotFound(_) => ApiError::NotFound(err.to_string()),
            BusinessAccountError::InvalidId(_) => ApiError::UnprocessableEntity(err.to_string()),
            BusinessAccountError::DatabaseError(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<JobError> for ApiError {
    fn from(err: JobError) -> Self {
        match err {
            JobError::NotFound(_) | JobError::BusinessAccountNotFound(_) => {
                ApiError::NotFound(err.to_string())
            }
            JobError::InvalidId(_) => ApiError::UnprocessableEntity(err.to_string()),
            JobError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<JobApplicationError> for ApiError {
    fn from(err: JobApplicationError) -> Self {
        match err {
            JobApplicationError::UserNotFound(_) | JobApplicationError::JobNotFound(_) => {
                ApiError::NotFound(err.to_string())
            }
            JobApplicationError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}
