//! One-shot SQL migration runner

use sqlx::PgPool;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum MigrationError {
    #[error("Cannot read migration script {path}: {source}")]
    ScriptRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Migration script is empty: {0}")]
    EmptyScript(PathBuf),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Executes a static SQL script, then reports the tables it left behind.
pub struct MigrationRunner {
    pool: PgPool,
}

impl MigrationRunner {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn run_file(&self, path: &Path) -> Result<Vec<String>, MigrationError> {
        let script = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| MigrationError::ScriptRead { path: path.to_path_buf(), source })?;

        if script.trim().is_empty() {
            return Err(MigrationError::EmptyScript(path.to_path_buf()));
        }

        info!("Running migration script {}", path.display());
        sqlx::raw_sql(&script).execute(&self.pool).await?;

        let tables = self.list_tables().await?;
        info!("Migration finished, {} tables in public schema", tables.len());
        Ok(tables)
    }

    pub async fn list_tables(&self) -> Result<Vec<String>, MigrationError> {
        let tables = sqlx::query_scalar::<_, String>(
            r#"
            SELECT table_name::text
            FROM information_schema.tables
            WHERE table_schema = 'public' AND table_type = 'BASE TABLE'
            ORDER BY table_name
            "#
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(tables)
    }
}
