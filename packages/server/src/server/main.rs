// Main entry point for the gift exchange API server

use anyhow::{Context, Result};
use exchange_core::kernel::{PostgresExchangeStore, ResendAdapter, ServerDeps};
use exchange_core::{server::build_app, Config};
use resend::{ResendOptions, ResendService};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,exchange_core=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Gift Exchange Coordinator API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        target_size = config.target_size,
        groups = config.group_quotas.len(),
        "Configuration loaded"
    );

    // Connect to database
    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    // Run migrations
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Migrations complete");

    // Wire up dependencies
    let resend = Arc::new(ResendService::new(ResendOptions {
        api_key: config.resend_api_key.clone(),
    }));
    let store = Arc::new(PostgresExchangeStore::new(pool));
    let mailer = Arc::new(ResendAdapter::new(resend, config.mail_from.clone()));
    let deps = Arc::new(ServerDeps::new(store, mailer, config.exchange_settings()));

    // Build application
    let app = build_app(deps);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
