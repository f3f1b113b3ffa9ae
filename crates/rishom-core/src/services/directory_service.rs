// ============================================================================
// Rishom Core - Directory Service
// File: crates/rishom-core/src/services/directory_service.rs
// Description: Read path for entities and their catalog
// ============================================================================

use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::{is_valid_slug, CatalogItem, CatalogKind, Entity};
use crate::error::DomainError;
use crate::repositories::{CatalogRepository, EntityRepository};

pub struct DirectoryService {
    entities: Arc<dyn EntityRepository>,
    catalog: Arc<dyn CatalogRepository>,
}

impl DirectoryService {
    pub fn new(entities: Arc<dyn EntityRepository>, catalog: Arc<dyn CatalogRepository>) -> Self {
        Self { entities, catalog }
    }

    /// Every entity, the holding company included. Filtering is a client concern.
    pub async fn list_entities(&self) -> Result<Vec<Entity>, DomainError> {
        let entities = self.entities.list().await?;
        debug!("Listed {} entities", entities.len());
        Ok(entities)
    }

    pub async fn get_entity(&self, slug: &str) -> Result<Entity, DomainError> {
        let slug = slug.trim().to_lowercase();
        if !is_valid_slug(&slug) {
            return Err(DomainError::InvalidSlug(slug));
        }

        let found = self.entities.find_by_slug(&slug).await?;
        found.ok_or(DomainError::EntityNotFound(slug))
    }

    /// Catalog items of one entity. Unknown entities are an error, an entity
    /// without items is not.
    pub async fn list_catalog(&self, slug: &str, kind: CatalogKind) -> Result<Vec<CatalogItem>, DomainError> {
        let entity = self.get_entity(slug).await?;
        let items = self.catalog.list_for_entity(&entity.code, kind).await?;
        info!("Listed {} {} items for {}", items.len(), kind, entity.code);
        Ok(items)
    }
}
