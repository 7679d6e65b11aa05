//! Apply pending schema migrations.

use cloudbox_core::config::AppConfig;
use cloudbox_core::result::AppResult;
use cloudbox_database::migration::run_migrations;

/// Execute the migrate command
pub async fn execute(config: AppConfig) -> AppResult<()> {
    let pool = super::connect(&config).await?;
    run_migrations(pool.pool()).await?;
    pool.close().await;

    println!("Migrations applied.");
    Ok(())
}
