//! # Rishom Core - Domain Module
//! 
//! Business units, their catalog, and the filter options derived from them.

pub mod entity;
pub mod catalog;
pub mod filter_option;
pub mod slug;

// Re-export all entities and enums
pub use entity::Entity;
pub use catalog::{CatalogItem, CatalogKind};
pub use filter_option::FilterOption;
pub use slug::is_valid_slug;
