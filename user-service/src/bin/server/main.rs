use std::sync::Arc;

use auth::IdentityGate;
use auth::TokenCodec;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use user_service::config::Config;
use user_service::domain::user::service::UserService;
use user_service::inbound::http::router::create_router;
use user_service::outbound::repositories::PostgresUserRepository;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "user_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "user-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        access_ttl_minutes = config.auth.access_ttl_minutes,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(max_connections = 5, "Database connection pool created");

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!("Database migrations completed");

    let secret = config.auth.secret.as_bytes();
    let token_codec = Arc::new(TokenCodec::new(secret));
    let gate = Arc::new(IdentityGate::new(secret));

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool));
    let user_service = Arc::new(UserService::new(user_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(address = %http_address, "Http server listening");

    let http_application = create_router(
        user_service,
        token_codec,
        gate,
        config.auth.access_ttl_minutes,
    );
    axum::serve(http_listener, http_application).await?;

    Ok(())
}
