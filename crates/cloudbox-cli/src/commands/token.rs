//! Mint HS256 session tokens for local development.

use clap::Args;

use cloudbox_auth::JwtEncoder;
use cloudbox_core::config::{AppConfig, TokenAlgorithm};
use cloudbox_core::error::AppError;
use cloudbox_core::result::AppResult;

/// Arguments for the token command
#[derive(Debug, Args)]
pub struct TokenArgs {
    /// Owner ID to place in the `sub` claim
    pub owner_id: String,

    /// Session ID to place in the `sid` claim
    #[arg(long)]
    pub session: Option<String>,
}

/// Execute the token command
pub fn execute(args: &TokenArgs, config: &AppConfig) -> AppResult<()> {
    if config.auth.algorithm != TokenAlgorithm::Hs256 {
        return Err(AppError::configuration(
            "Development tokens require auth.algorithm = \"hs256\"",
        ));
    }

    let token = JwtEncoder::new(&config.auth).issue(&args.owner_id, args.session.as_deref())?;
    println!("{token}");
    Ok(())
}
