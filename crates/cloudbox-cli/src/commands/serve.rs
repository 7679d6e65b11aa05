//! Start the Cloudbox server.

use std::sync::Arc;

use clap::Args;
use tracing::warn;

use cloudbox_core::config::AppConfig;
use cloudbox_core::result::AppResult;
use cloudbox_database::migration::run_migrations;
use cloudbox_database::{EntryStore, MemoryEntryStore};

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,

    /// Skip database migrations on startup
    #[arg(long)]
    pub skip_migrations: bool,

    /// Keep entries in process memory instead of PostgreSQL
    #[arg(long)]
    pub memory: bool,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, mut config: AppConfig) -> AppResult<()> {
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }

    let store: Arc<dyn EntryStore> = if args.memory {
        warn!("Serving from the in-memory store; entries are lost on exit");
        Arc::new(MemoryEntryStore::new())
    } else {
        let pool = super::connect(&config).await?;
        if !args.skip_migrations {
            run_migrations(pool.pool()).await?;
        }
        Arc::new(pool.entry_store())
    };

    cloudbox_api::run_server(config, store).await
}
