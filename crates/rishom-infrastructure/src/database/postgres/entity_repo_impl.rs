// ============================================================================
// Rishom Infrastructure - PostgreSQL Entity Repository
// File: crates/rishom-infrastructure/src/database/postgres/entity_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{PgPool, FromRow};
use uuid::Uuid;
use tracing::error;

use rishom_core::domain::Entity;
use rishom_core::error::DomainError;
use rishom_core::repositories::EntityRepository;

pub struct PgEntityRepository {
    pool: PgPool,
}

impl PgEntityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct EntityRow {
    pub id: Uuid,
    pub code: String,
    pub short_name: String,
    pub name: Option<String>,
    pub color_primary: Option<String>,
    pub description: Option<String>,
    pub website_url: Option<String>,
    pub display_order: i32,
}

impl From<EntityRow> for Entity {
    fn from(row: EntityRow) -> Self {
        Entity {
            id: row.id,
            code: row.code,
            short_name: row.short_name,
            name: row.name,
            color_primary: row.color_primary,
            description: row.description,
            website_url: row.website_url,
            display_order: row.display_order,
        }
    }
}

#[async_trait]
impl EntityRepository for PgEntityRepository {
    async fn list(&self) -> Result<Vec<Entity>, DomainError> {
        let rows: Vec<EntityRow> = sqlx::query_as(
            r#"
            SELECT 
                id, code, short_name, name, color_primary,
                description, website_url, display_order
            FROM entities
            ORDER BY display_order, code
            "#
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing entities: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Entity::from).collect())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Entity>, DomainError> {
        let row: Option<EntityRow> = sqlx::query_as(
            r#"
            SELECT 
                id, code, short_name, name, color_primary,
                description, website_url, display_order
            FROM entities
            WHERE LOWER(code) = LOWER($1)
            "#
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding entity by slug: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }
}
