use std::sync::Arc;
use std::time::Duration;

use auth::TokenIssuer;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_business_account::create_business_account;
use super::handlers::create_job::create_job;
use super::handlers::create_job_application::create_job_application;
use super::handlers::create_tokens::create_tokens;
use super::handlers::create_user::create_user;
use super::handlers::get_user::get_user;
use super::handlers::list_business_accounts::list_business_accounts;
use super::handlers::list_job_applications::list_job_applications;
use super::handlers::list_jobs::list_jobs;
use super::handlers::list_tokens::list_tokens;
use super::handlers::list_users::list_users;
use super::handlers::refresh_tokens::refresh_tokens;
use super::handlers::sign_in::sign_in;
use super::middleware::authenticate as auth_middleware;
use crate::business_account::ports::BusinessAccountServicePort;
use crate::job::ports::JobServicePort;
use crate::job_application::ports::JobApplicationServicePort;
use crate::token::ports::TokenServicePort;
use crate::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub token_service: Arc<dyn TokenServicePort>,
    pub business_account_service: Arc<dyn BusinessAccountServicePort>,
    pub job_service: Arc<dyn JobServicePort>,
    pub job_application_service: Arc<dyn JobApplicationServicePort>,
    pub token_issuer: Arc<TokenIssuer>,
}

pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/healthcheck", get(|| async { StatusCode::OK }))
        .route("/api/v1/users", post(create_user).get(list_users))
        .route("/api/v1/users/sign-in", post(sign_in))
        .route("/api/v1/tokens", post(create_tokens).get(list_tokens))
        .route("/api/v1/tokens/refresh", post(refresh_tokens))
        .route("/api/v1/business-accounts", get(list_business_accounts))
        .route("/api/v1/jobs", get(list_jobs))
        .route("/api/v1/job-applications", get(list_job_applications));

    let protected_routes = Router::new()
        .route("/api/v1/users/:user_id", get(get_user))
        .route("/api/v1/business-accounts", post(create_business_account))
        .route("/api/v1/jobs", post(create_job))
        .route("/api/v1/job-applications", post(create_job_application))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
