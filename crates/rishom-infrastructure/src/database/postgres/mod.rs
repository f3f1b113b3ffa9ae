//! PostgreSQL repository implementations

pub mod entity_repo_impl;
pub mod catalog_repo_impl;

pub use entity_repo_impl::PgEntityRepository;
pub use catalog_repo_impl::PgCatalogRepository;
