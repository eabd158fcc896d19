use std::sync::Arc;

use auth::Authenticator;
use chrono::Duration;
use fintrack_service::config::Config;
use fintrack_service::domain::record::service::RecordService;
use fintrack_service::domain::user::service::UserService;
use fintrack_service::inbound::http::router::create_router;
use fintrack_service::outbound::repositories::PostgresRecordRepository;
use fintrack_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fintrack_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "fintrack-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    // The JWT secret never reaches the log stream
    tracing::info!(
        http_port = config.server.http_port,
        token_ttl_days = config.jwt.token_ttl_days,
        "Configuration loaded"
    );

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

    let authenticator = Arc::new(Authenticator::with_token_ttl(
        config.jwt.secret.as_bytes(),
        Duration::days(config.jwt.token_ttl_days),
    ));
    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let record_repository = Arc::new(PostgresRecordRepository::new(pg_pool));

    let user_service = Arc::new(UserService::new(Arc::clone(&user_repository)));
    let record_service = Arc::new(RecordService::new(record_repository, user_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(user_service, record_service, authenticator);

    axum::serve(http_listener, http_application).await?;

    Ok(())
}
