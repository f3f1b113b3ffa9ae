use async_trait::async_trait;
use std::sync::Arc;

use rishom_core::services::DirectoryService;

/// Dependency probed by `GET /health/ready`.
#[async_trait]
pub trait ReadinessCheck: Send + Sync {
    async fn check(&self) -> Result<(), String>;
}

#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<DirectoryService>,
    pub readiness: Arc<dyn ReadinessCheck>,
}
