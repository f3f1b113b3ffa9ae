//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    EntityNotFound(String),

    #[error("Invalid slug: {0}")]
    InvalidSlug(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
