use axum::extract::State;
use axum::http::StatusCode;

use super::create_job_application::JobApplicationResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_job_applications(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<JobApplicationResponseData>>, ApiError> {
    let applications = state.job_application_service.list().await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        applications
            .iter()
            .map(JobApplicationResponseData::from)
            .collect(),
    ))
}
