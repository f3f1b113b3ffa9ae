// ============================================================================
// Rishom API - Entity Handlers
// File: crates/rishom-api/src/handlers/entities.rs
// ============================================================================
//! Read endpoints for entities and their products/services

use axum::{
    extract::{Path, State},
    Json,
};

use rishom_core::domain::{CatalogItem, CatalogKind, Entity};

use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/entities
pub async fn list_entities(State(state): State<AppState>) -> Result<Json<Vec<Entity>>, ApiError> {
    let entities = state.directory.list_entities().await?;
    Ok(Json(entities))
}

/// GET /api/entities/{slug}
pub async fn get_entity(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Entity>, ApiError> {
    let entity = state.directory.get_entity(&slug).await?;
    Ok(Json(entity))
}

/// GET /api/entities/{slug}/products
pub async fn list_products(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Vec<CatalogItem>>, ApiError> {
    list_catalog(&state, &slug, CatalogKind::Product).await
}

/// GET /api/entities/{slug}/services
pub async fn list_services(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Vec<CatalogItem>>, ApiError> {
    list_catalog(&state, &slug, CatalogKind::Service).await
}

async fn list_catalog(state: &AppState, slug: &str, kind: CatalogKind) -> Result<Json<Vec<CatalogItem>>, ApiError> {
    let items = state.directory.list_catalog(slug, kind).await?;
    Ok(Json(items))
}
