//! # Rishom Infrastructure
//! 
//! PostgreSQL adapters and the one-shot migration runner.

pub mod database;
pub mod migration;

pub use database::{create_pool, PgCatalogRepository, PgEntityRepository};
pub use migration::{MigrationError, MigrationRunner};
