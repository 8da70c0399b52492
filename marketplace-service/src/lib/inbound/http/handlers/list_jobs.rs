use axum::extract::State;
use axum::http::StatusCode;

use super::create_job::JobResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_jobs(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<JobResponseData>>, ApiError> {
    let jobs = state.job_service.list().await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        jobs.iter().map(JobResponseData::from).collect(),
    ))
}
