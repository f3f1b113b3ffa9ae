//! Fetches content from the backend and writes the rendered pages.
//!
//! Usage: `rishom-site-render [projects.json]` (default `content/projects.json`)

use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use rishom_shared::config::AppConfig;
use rishom_site::{load_projects, ApiClient, SitePublisher};

const DEFAULT_PROJECTS: &str = "content/projects.json";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    let _log_guard = rishom_shared::telemetry::init_telemetry(&config.log, "rishom-site-render")?;

    let projects_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PROJECTS));
    let projects = load_projects(&projects_path).await?;

    info!("Rendering site from {} into {}", config.api.base_url, config.site.output_dir);
    let client = ApiClient::new(&config.api)?;
    let publisher = SitePublisher::new(Arc::new(client), &config.site.output_dir)?;
    let written = publisher.publish(projects).await?;

    for path in &written {
        info!(path = %path.display(), "Page written");
    }
    Ok(())
}
