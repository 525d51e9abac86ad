use std::sync::Arc;

use auth::Authenticator;
use auth::TokenCodec;
use catalog_service::config::Config;
use catalog_service::domain::client::service::ClientService;
use catalog_service::domain::product::service::ProductService;
use catalog_service::inbound::http::authorization::ClientAuthorizer;
use catalog_service::inbound::http::router::create_router;
use catalog_service::outbound::repositories::PostgresClientRepository;
use catalog_service::outbound::repositories::PostgresProductRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "catalog-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        token_prefix = %config.auth.token_prefix,
        token_ttl_minutes = config.auth.token_ttl_minutes,
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

    let authenticator = Arc::new(Authenticator::new(config.auth.secret.as_bytes()));
    let client_repository = Arc::new(PostgresClientRepository::new(pg_pool.clone()));
    let product_repository = Arc::new(PostgresProductRepository::new(pg_pool));

    let client_service = Arc::new(ClientService::new(Arc::clone(&client_repository)));
    let product_service = Arc::new(ProductService::new(product_repository));
    let authorizer = Arc::new(ClientAuthorizer::new(
        client_repository,
        TokenCodec::new(config.auth.secret.as_bytes()),
        config.auth.token_prefix.clone(),
    ));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(
        client_service,
        product_service,
        authorizer,
        authenticator,
        config.auth.token_ttl_minutes,
    );

    axum::serve(http_listener, http_application).await?;

    Ok(())
}
