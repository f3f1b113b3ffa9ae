//! Catalog repository trait (port)

use async_trait::async_trait;
use crate::domain::{CatalogItem, CatalogKind};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn list_for_entity(&self, entity_code: &str, kind: CatalogKind) -> Result<Vec<CatalogItem>, DomainError>;
}
