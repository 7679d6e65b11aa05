//! Cloudbox server entry point.
//!
//! Loads configuration, initialises logging, connects to PostgreSQL,
//! applies migrations and serves the HTTP API.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use cloudbox_core::config::AppConfig;
use cloudbox_core::result::AppResult;
use cloudbox_database::DatabasePool;
use cloudbox_database::migration::run_migrations;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load configuration from files and environment
fn load_configuration() -> AppResult<AppConfig> {
    let base = std::env::var("CLOUDBOX_CONFIG").unwrap_or_else(|_| "config/default".to_string());
    let env = std::env::var("CLOUDBOX_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load_from(&base, &env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> AppResult<()> {
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting Cloudbox");

    let pool = DatabasePool::connect(&config.database).await?;
    run_migrations(pool.pool()).await?;

    let result = cloudbox_api::run_server(config, Arc::new(pool.entry_store())).await;

    pool.close().await;
    result
}
