//! Entity repository trait (port)

use async_trait::async_trait;
use crate::domain::Entity;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntityRepository: Send + Sync {
    /// All entities ordered by display order, then code.
    async fn list(&self) -> Result<Vec<Entity>, DomainError>;
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Entity>, DomainError>;
}
