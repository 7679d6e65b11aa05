//! CLI command definitions and dispatch.

pub mod migrate;
pub mod serve;
pub mod token;

use clap::{Parser, Subcommand};

use cloudbox_core::config::AppConfig;
use cloudbox_core::result::AppResult;
use cloudbox_database::DatabasePool;

/// Cloudbox: file and folder metadata for a hosted-asset drive
#[derive(Debug, Parser)]
#[command(name = "cloudbox", version, about, long_about = None)]
pub struct Cli {
    /// Base configuration file (extension optional)
    #[arg(short, long, default_value = "config/default")]
    pub config: String,

    /// Environment overlay loaded from `config/{env}.toml`
    #[arg(short, long, env = "CLOUDBOX_ENV", default_value = "development")]
    pub env: String,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Apply database migrations
    Migrate,
    /// Mint a development session token
    Token(token::TokenArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> AppResult<()> {
        let config = AppConfig::load_from(&self.config, &self.env)?;

        match &self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Migrate => migrate::execute(config).await,
            Commands::Token(args) => token::execute(args, &config),
        }
    }
}

/// Helper: open the database pool from config
pub async fn connect(config: &AppConfig) -> AppResult<DatabasePool> {
    DatabasePool::connect(&config.database).await
}
