use async_trait::async_trait;
use sqlx::PgPool;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info, warn};

use rishom_api::{build_router, AppState, ReadinessCheck};
use rishom_core::services::DirectoryService;
use rishom_infrastructure::database::{connection, PgCatalogRepository, PgEntityRepository};
use rishom_shared::config::AppConfig;

struct PoolReadiness(PgPool);

#[async_trait]
impl ReadinessCheck for PoolReadiness {
    async fn check(&self) -> Result<(), String> {
        connection::ping(&self.0).await.map_err(|e| e.to_string())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize telemetry
    let _log_guard = rishom_shared::telemetry::init_telemetry(&config.log, "rishom-server")?;

    info!("Rishom server starting ({})...", config.app.env);

    // Connect to Database
    info!("Connecting to database...");
    let pool = match connection::create_pool(&config.database).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };
    info!("Database connection established.");

    // Create App State
    let directory = DirectoryService::new(
        Arc::new(PgEntityRepository::new(pool.clone())),
        Arc::new(PgCatalogRepository::new(pool.clone())),
    );
    let state = AppState {
        directory: Arc::new(directory),
        readiness: Arc::new(PoolReadiness(pool)),
    };

    // Rendered site, when present
    let static_dir = Path::new(&config.app.static_dir);
    let static_dir = if static_dir.is_dir() {
        Some(static_dir)
    } else {
        warn!("Static directory {} not found, serving API only", static_dir.display());
        None
    };

    let app = build_router(state, static_dir);

    // Bind address
    let addr: SocketAddr = config.server_addr().parse()?;
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
