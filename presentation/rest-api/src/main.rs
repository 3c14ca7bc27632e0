use anyhow::Context;
use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::{app_config::AppConfig, database_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API entry point
///
/// Loads configuration, connects to PostgreSQL, applies migrations, wires
/// dependencies and serves HTTP until interrupted.
/// - config/: server, CORS and database settings
/// - setup/: dependency injection and server setup
/// - api/: route handlers, DTOs and error mapping
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration
    let config = AppConfig::from_env().context("invalid configuration")?;

    // 4. Initialize database
    let pool = database_config::init_database(&config.database)
        .await
        .context("database initialization failed")?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(pool.clone());

    // 6. Run server
    let result = Server::run(config, container).await;
    pool.close().await;
    result
}
