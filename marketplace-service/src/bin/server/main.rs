use std::sync::Arc;

use marketplace_service::business_account::service::BusinessAccountService;
use marketplace_service::config::Config;
use marketplace_service::inbound::http::router::create_router;
use marketplace_service::inbound::http::router::AppState;
use marketplace_service::job::service::JobService;
use marketplace_service::job_application::service::JobApplicationService;
use marketplace_service::repositories::business_account::PostgresBusinessAccountRepository;
use marketplace_service::repositories::job::PostgresJobRepository;
use marketplace_service::repositories::job_application::PostgresJobApplicationRepository;
use marketplace_service::repositories::token::PostgresTokenPairRepository;
use marketplace_service::repositories::user::PostgresUserRepository;
use marketplace_service::token::service::TokenService;
use marketplace_service::user::service::UserService;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "marketplace_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "marketplace-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        access_ttl = %config.jwt.access_ttl,
        refresh_ttl = %config.jwt.refresh_ttl,
        "Configuration loaded"
    );

    let token_issuer = Arc::new(config.jwt.build_issuer()?);

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let token_repository = Arc::new(PostgresTokenPairRepository::new(pg_pool.clone()));
    let business_account_repository =
        Arc::new(PostgresBusinessAccountRepository::new(pg_pool.clone()));
    let job_repository = Arc::new(PostgresJobRepository::new(pg_pool.clone()));
    let job_application_repository = Arc::new(PostgresJobApplicationRepository::new(pg_pool));

    let token_service = Arc::new(TokenService::new(
        token_repository,
        Arc::clone(&user_repository),
        Arc::clone(&token_issuer),
    ));
    let user_service = Arc::new(UserService::new(
        Arc::clone(&user_repository),
        Arc::clone(&token_service),
    ));
    let business_account_service = Arc::new(BusinessAccountService::new(Arc::clone(
        &business_account_repository,
    )));
    let job_service = Arc::new(JobService::new(
        Arc::clone(&job_repository),
        business_account_repository,
    ));
    let job_application_service = Arc::new(JobApplicationService::new(
        job_application_repository,
        job_repository,
        user_repository,
    ));

    let state = AppState {
        user_service,
        token_service,
        business_account_service,
        job_service,
        job_application_service,
        token_issuer,
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, create_router(state)).await?;

    Ok(())
}
