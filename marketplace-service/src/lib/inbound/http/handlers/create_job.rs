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
use crate::business_account::errors::BusinessAccountIdError;
use crate::business_account::models::BusinessAccountId;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::job::models::CreateJobCommand;
use crate::job::models::Job;

/// Post a job under one of the caller's business accounts.
pub async fn create_job(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Json(body): Json<CreateJobRequest>,
) -> Result<ApiSuccess<JobResponseData>, ApiError> {
    let command = body.try_into_command()?;

    let job = state.job_service.create(&caller.user_id, command).await?;

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        JobResponseData::from(&job),
    ))
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    business_account_id: String,
    name: String,
    description: String,
    price: f32,
    category: String,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateJobRequestError {
    #[error("Business account ID must be a valid UUID")]
    BusinessAccountId(#[from] BusinessAccountIdError),

    #[error("Job name is required")]
    NameMissing,

    #[error("Price must be greater than zero")]
    PriceNotPositive,
}

impl CreateJobRequest {
    fn try_into_command(self) -> Result<CreateJobCommand, ParseCreateJobRequestError> {
        if self.name.is_empty() {
            return Err(ParseCreateJobRequestError::NameMissing);
        }
        if !(self.price > 0.0) {
            return Err(ParseCreateJobRequestError::PriceNotPositive);
        }

        let business_account_id = BusinessAccountId::from_string(&self.business_account_id)?;

        Ok(CreateJobCommand {
            business_account_id,
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
        })
    }
}

impl From<ParseCreateJobRequestError> for ApiError {
    fn from(err: ParseCreateJobRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobResponseData {
    pub id: String,
    pub business_account_id: String,
    pub name: String,
    pub description: String,
    pub price: f32,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Job> for JobResponseData {
    fn from(job: &Job) -> Self {
        Self {
            id: job.id.to_string(),
            business_account_id: job.business_account_id.to_string(),
            name: job.name.clone(),
            description: job.description.clone(),
            price: job.price,
            category: job.category.clone(),
            created_at: job.created_at,
            updated_at: job.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateJobRequest {
        CreateJobRequest {
            business_account_id: BusinessAccountId::new().to_string(),
            name: "Backend engineer".to_string(),
            description: "Build the thing".to_string(),
            price: 500.0,
            category: "engineering".to_string(),
        }
    }

    #[test]
    fn test_valid_request_parses() {
        assert!(request().try_into_command().is_ok());
    }

    #[test]
    fn test_non_positive_price_is_rejected() {
        for price in [0.0, -1.0, f32::NAN] {
            let mut req = request();
            req.price = price;
            assert!(matches!(
                req.try_into_command(),
                Err(ParseCreateJobRequestError::PriceNotPositive)
            ));
        }
    }

    #[test]
    fn test_malformed_account_id_is_rejected() {
        let mut req = request();
        req.business_account_id = "xyz".to_string();
        assert!(matches!(
            req.try_into_command(),
            Err(ParseCreateJobRequestError::BusinessAccountId(_))
        ));
    }
}
