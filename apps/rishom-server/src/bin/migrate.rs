//! One-shot migration: runs a SQL script and lists the resulting tables.
//!
//! Usage: `rishom-migrate [script]` (default `migrations/001_init.sql`)

use std::path::PathBuf;
use tracing::info;

use rishom_infrastructure::{create_pool, MigrationRunner};
use rishom_shared::config::AppConfig;

const DEFAULT_SCRIPT: &str = "migrations/001_init.sql";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    let _log_guard = rishom_shared::telemetry::init_telemetry(&config.log, "rishom-migrate")?;

    let script = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SCRIPT));

    let pool = create_pool(&config.database).await?;
    let runner = MigrationRunner::new(pool.clone());
    let tables = runner.run_file(&script).await?;

    for table in &tables {
        info!(table = %table, "Table present");
    }

    pool.close().await;
    Ok(())
}
