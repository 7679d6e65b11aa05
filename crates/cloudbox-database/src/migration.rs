//! Schema migrations embedded at compile time.

use sqlx::PgPool;
use tracing::info;

use cloudbox_core::error::{AppError, ErrorKind};
use cloudbox_core::result::AppResult;

/// Apply every pending migration from the workspace `migrations/` directory.
pub async fn run_migrations(pool: &PgPool) -> AppResult<()> {
    info!("Applying entry schema migrations");

    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Schema migration failed", e))?;

    info!("Entry schema is up to date");
    Ok(())
}
