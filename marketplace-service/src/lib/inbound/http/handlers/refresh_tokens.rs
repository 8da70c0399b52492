use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Header carrying the refresh token, separate from `Authorization` so an
/// expired access token never interferes with the exchange.
pub const REFRESH_HEADER: &str = "X-Refresh";

/// Exchange a refresh token for a new access token.
pub async fn refresh_tokens(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<ApiSuccess<RefreshTokensResponseData>, ApiError> {
    let refresh_token = headers
        .get(REFRESH_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Refresh token is required".to_string()))?;

    let access_token = state.token_service.refresh(refresh_token).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        RefreshTokensResponseData { access_token },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokensResponseData {
    pub access_token: String,
}
