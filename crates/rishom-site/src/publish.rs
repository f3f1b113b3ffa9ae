//! Renders every built-in page to a static directory

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

use crate::client::ContentSource;
use crate::error::SiteError;
use crate::page::{routes, PageComposer, PageSpec, Project};
use crate::view::SiteViews;

pub struct SitePublisher {
    source: Arc<dyn ContentSource>,
    views: SiteViews,
    output_dir: PathBuf,
}

impl SitePublisher {
    pub fn new(source: Arc<dyn ContentSource>, output_dir: impl Into<PathBuf>) -> Result<Self, SiteError> {
        Ok(Self {
            source,
            views: SiteViews::new()?,
            output_dir: output_dir.into(),
        })
    }

    /// Home and projects first; their entity directory decides which
    /// landing pages exist. Returns the written files.
    pub async fn publish(&self, projects: Vec<Project>) -> Result<Vec<PathBuf>, SiteError> {
        let mut written = Vec::new();

        let home = self.compose(routes::home(projects.clone())).await?;
        written.push(self.write(&home).await?);

        let entities = home.entities().to_vec();
        if entities.is_empty() {
            warn!("No entities available, skipping entity landing pages");
        }

        let projects_page = self.compose(routes::projects(projects)).await?;
        written.push(self.write(&projects_page).await?);

        for entity in &entities {
            let spec = match routes::entity_landing(entity) {
                Ok(spec) => spec,
                Err(e) => {
                    warn!(code = %entity.code, error = %e, "Skipping entity landing page");
                    continue;
                }
            };
            let landing = self.compose(spec).await?;
            written.push(self.write(&landing).await?);
        }

        info!("Published {} pages to {}", written.len(), self.output_dir.display());
        Ok(written)
    }

    async fn compose(&self, spec: PageSpec) -> Result<PageComposer, SiteError> {
        let mut composer = PageComposer::new(spec, Arc::clone(&self.source))?;
        composer.mount();
        composer.settle().await;
        Ok(composer)
    }

    async fn write(&self, composer: &PageComposer) -> Result<PathBuf, SiteError> {
        let html = composer.render(&self.views)?;
        let path = self.output_dir.join(composer.spec().output_path());
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, html).await?;
        Ok(path)
    }
}

/// Project showcase entries; a missing file means an empty grid.
pub async fn load_projects(path: &Path) -> Result<Vec<Project>, SiteError> {
    match tokio::fs::read_to_string(path).await {
        Ok(raw) => serde_json::from_str(&raw)
            .map_err(|e| SiteError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!("No project file at {}, rendering empty grids", path.display());
            Ok(Vec::new())
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockContentSource;
    use rishom_core::domain::Entity;

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("rishom-site-{}-{}", name, std::process::id()))
    }

    #[tokio::test]
    async fn test_publish_writes_landing_pages_for_filterable_entities() {
        let mut source = MockContentSource::new();
        source.expect_fetch_entities().returning(|| {
            Ok(vec![
                Entity::new("GROUPE".to_string(), "Groupe".to_string()).unwrap(),
                Entity::new("RBF".to_string(), "BTP".to_string()).unwrap(),
            ])
        });
        source.expect_fetch_catalog().returning(|_, _| Ok(vec![]));

        let dir = scratch_dir("publish");
        let publisher = SitePublisher::new(Arc::new(source), &dir).unwrap();
        let written = publisher.publish(vec![]).await.unwrap();

        assert_eq!(written.len(), 3);
        assert!(dir.join("index.html").exists());
        assert!(dir.join("projects/index.html").exists());
        assert!(dir.join("entities/rbf/index.html").exists());
        assert!(!dir.join("entities/groupe").exists());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_entity_with_unusable_slug_is_skipped() {
        let mut source = MockContentSource::new();
        source.expect_fetch_entities().returning(|| {
            Ok(vec![
                Entity::new("R&D".to_string(), "Recherche".to_string()).unwrap(),
                Entity::new("RBF".to_string(), "BTP".to_string()).unwrap(),
            ])
        });
        source.expect_fetch_catalog().returning(|_, _| Ok(vec![]));

        let dir = scratch_dir("skip-slug");
        let publisher = SitePublisher::new(Arc::new(source), &dir).unwrap();
        let written = publisher.publish(vec![]).await.unwrap();

        assert_eq!(written.len(), 3);
        assert!(dir.join("entities/rbf/index.html").exists());
        assert!(!dir.join("entities/r&d").exists());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_missing_projects_file_is_empty() {
        let projects = load_projects(&scratch_dir("missing").join("projects.json")).await.unwrap();
        assert!(projects.is_empty());
    }
}
