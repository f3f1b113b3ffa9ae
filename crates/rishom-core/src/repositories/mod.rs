//! Repository traits (ports)

pub mod entity_repository;
pub mod catalog_repository;

pub use entity_repository::EntityRepository;
pub use catalog_repository::CatalogRepository;

#[cfg(test)]
pub use entity_repository::MockEntityRepository;
#[cfg(test)]
pub use catalog_repository::MockCatalogRepository;
