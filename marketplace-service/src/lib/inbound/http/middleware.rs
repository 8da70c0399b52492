use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;
use crate::user::models::UserId;

/// Strongly-typed request extension carrying the authenticated user's id.
///
/// Downstream handlers read this; nothing re-fetches the user record here.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Authentication gate for protected routes.
///
/// Requires an `Authorization: Bearer <token>` header exactly. A missing or
/// malformed header short-circuits before any token parsing; a well-formed
/// header is handed to the access-token validator. Failure never invokes the
/// downstream handler.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&req)?;

    let subject = state.token_issuer.parse_access_token(token).map_err(|e| {
        tracing::warn!("Access token validation failed: {}", e);
        invalid_token_response()
    })?;

    let user_id = UserId::from_string(&subject).map_err(|e| {
        tracing::warn!("Access token carried a malformed subject: {}", e);
        invalid_token_response()
    })?;

    req.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(req).await)
}

fn extract_bearer_token(req: &Request) -> Result<&str, Response> {
    let header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(malformed_header_response)?;

    let header = header.to_str().map_err(|_| malformed_header_response())?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(malformed_header_response)?;

    if token.is_empty() {
        return Err(malformed_header_response());
    }

    Ok(token)
}

fn malformed_header_response() -> Response {
    ApiError::Unauthorized("Missing or malformed JWT".to_string()).into_response()
}

fn invalid_token_response() -> Response {
    ApiError::Unauthorized("Invalid or expired JWT".to_string()).into_response()
}
