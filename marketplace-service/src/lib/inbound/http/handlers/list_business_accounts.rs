use axum::extract::State;
use axum::http::StatusCode;

use super::create_business_account::BusinessAccountResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_business_accounts(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<BusinessAccountResponseData>>, ApiError> {
    let accounts = state.business_account_service.list().await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        accounts.iter().map(BusinessAccountResponseData::from).collect(),
    ))
}
