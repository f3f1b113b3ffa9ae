// ============================================================================
// Rishom Infrastructure - PostgreSQL Catalog Repository
// File: crates/rishom-infrastructure/src/database/postgres/catalog_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{PgPool, FromRow};
use uuid::Uuid;
use tracing::error;

use rishom_core::domain::{CatalogItem, CatalogKind};
use rishom_core::error::DomainError;
use rishom_core::repositories::CatalogRepository;

/// Products and services share one row shape in two tables.
pub struct PgCatalogRepository {
    pool: PgPool,
}

impl PgCatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn table_for(kind: CatalogKind) -> &'static str {
    match kind {
        CatalogKind::Product => "products",
        CatalogKind::Service => "services",
    }
}

#[derive(Debug, FromRow)]
struct CatalogRow {
    pub id: Uuid,
    pub entity_code: String,
    pub name: String,
    pub summary: Option<String>,
    pub image_url: Option<String>,
    pub display_order: i32,
}

impl CatalogRow {
    fn into_item(self, kind: CatalogKind) -> CatalogItem {
        CatalogItem {
            id: self.id,
            entity_code: self.entity_code,
            kind,
            name: self.name,
            summary: self.summary,
            image_url: self.image_url,
            display_order: self.display_order,
        }
    }
}

#[async_trait]
impl CatalogRepository for PgCatalogRepository {
    async fn list_for_entity(&self, entity_code: &str, kind: CatalogKind) -> Result<Vec<CatalogItem>, DomainError> {
        // Table name comes from a closed enum, never from input.
        let sql = format!(
            r#"
            SELECT 
                id, entity_code, name, summary, image_url, display_order
            FROM {}
            WHERE entity_code = $1
            ORDER BY display_order, name
            "#,
            table_for(kind)
        );

        let rows: Vec<CatalogRow> = sqlx::query_as(&sql)
            .bind(entity_code)
            .fetch_all(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error listing {} for {}: {}", table_for(kind), entity_code, e);
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(rows.into_iter().map(|r| r.into_item(kind)).collect())
    }
}
