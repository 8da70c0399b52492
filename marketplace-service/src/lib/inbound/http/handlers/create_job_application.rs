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
use crate::job::errors::JobIdError;
use crate::job::models::JobId;
use crate::job_application::models::ApplyToJobCommand;
use crate::job_application::models::JobApplication;

/// Apply the authenticated user to a job.
pub async fn create_job_application(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Json(body): Json<CreateJobApplicationRequest>,
) -> Result<ApiSuccess<JobApplicationResponseData>, ApiError> {
    let command = body.try_into_command()?;

    let application = state
        .job_application_service
        .apply(&caller.user_id, command)
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        JobApplicationResponseData::from(&application),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobApplicationRequest {
    job_id: String,
    business_account_id: String,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateJobApplicationRequestError {
    #[error("Job ID must be a valid UUID")]
    JobId(#[from] JobIdError),

    #[error("Business account ID must be a valid UUID")]
    BusinessAccountId(#[from] BusinessAccountIdError),
}

impl CreateJobApplicationRequest {
    fn try_into_command(
        self,
    ) -> Result<ApplyToJobCommand, ParseCreateJobApplicationRequestError> {
        let job_id = JobId::from_string(&self.job_id)?;
        let business_account_id = BusinessAccountId::from_string(&self.business_account_id)?;

        Ok(ApplyToJobCommand {
            job_id,
            business_account_id,
        })
    }
}

impl From<ParseCreateJobApplicationRequestError> for ApiError {
    fn from(err: ParseCreateJobApplicationRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplicationResponseData {
    pub id: String,
    pub job_id: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&JobApplication> for JobApplicationResponseData {
    fn from(application: &JobApplication) -> Self {
        Self {
            id: application.id.to_string(),
            job_id: application.job_id.to_string(),
            user_id: application.user_id.to_string(),
            created_at: application.created_at,
            updated_at: application.updated_at,
        }
    }
}
