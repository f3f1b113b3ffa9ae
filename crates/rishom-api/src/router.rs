use axum::{http::Method, routing::get, Router};
use std::path::Path;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::handlers::{entities, health};
use crate::state::AppState;

/// Read-only API, plus the rendered site and its assets when `static_dir` is given.
pub fn build_router(state: AppState, static_dir: Option<&Path>) -> Router {
    let api = Router::new()
        // Health
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        // Entities
        .route("/api/entities", get(entities::list_entities))
        .route("/api/entities/{slug}", get(entities::get_entity))
        .route("/api/entities/{slug}/products", get(entities::list_products))
        .route("/api/entities/{slug}/services", get(entities::list_services))
        .with_state(state);

    let app = match static_dir {
        Some(dir) => api
            .nest_service("/assets", ServeDir::new(dir.join("assets")))
            .fallback_service(ServeDir::new(dir)),
        None => api,
    };

    app
        // CORS
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::OPTIONS])
                .allow_headers(Any),
        )
        // Tracing
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ReadinessCheck;
    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use rishom_core::domain::{CatalogItem, CatalogKind, Entity};
    use rishom_core::repositories::{CatalogRepository, EntityRepository};
    use rishom_core::services::DirectoryService;
    use rishom_core::DomainError;
    use std::sync::Arc;
    use tower::ServiceExt;
    use uuid::Uuid;

    struct InMemoryEntities(Vec<Entity>);

    #[async_trait]
    impl EntityRepository for InMemoryEntities {
        async fn list(&self) -> Result<Vec<Entity>, DomainError> {
            Ok(self.0.clone())
        }

        async fn find_by_slug(&self, slug: &str) -> Result<Option<Entity>, DomainError> {
            Ok(self.0.iter().find(|e| e.slug() == slug).cloned())
        }
    }

    struct InMemoryCatalog(Vec<CatalogItem>);

    #[async_trait]
    impl CatalogRepository for InMemoryCatalog {
        async fn list_for_entity(&self, entity_code: &str, kind: CatalogKind) -> Result<Vec<CatalogItem>, DomainError> {
            Ok(self
                .0
                .iter()
                .filter(|i| i.entity_code == entity_code && i.kind == kind)
                .cloned()
                .collect())
        }
    }

    struct FailingEntities;

    #[async_trait]
    impl EntityRepository for FailingEntities {
        async fn list(&self) -> Result<Vec<Entity>, DomainError> {
            Err(DomainError::DatabaseError("connection refused".to_string()))
        }

        async fn find_by_slug(&self, _slug: &str) -> Result<Option<Entity>, DomainError> {
            Err(DomainError::DatabaseError("connection refused".to_string()))
        }
    }

    struct Ready(bool);

    #[async_trait]
    impl ReadinessCheck for Ready {
        async fn check(&self) -> Result<(), String> {
            if self.0 { Ok(()) } else { Err("pool closed".to_string()) }
        }
    }

    fn entity(code: &str, short_name: &str) -> Entity {
        Entity::new(code.to_string(), short_name.to_string()).unwrap()
    }

    fn service_item(code: &str, name: &str) -> CatalogItem {
        CatalogItem {
            id: Uuid::new_v4(),
            entity_code: code.to_string(),
            kind: CatalogKind::Service,
            name: name.to_string(),
            summary: None,
            image_url: None,
            display_order: 1,
        }
    }

    fn app() -> Router {
        let entities = InMemoryEntities(vec![
            entity("GROUPE", "Groupe"),
            entity("RBF", "BTP"),
            entity("RBA", "Agro"),
        ]);
        let catalog = InMemoryCatalog(vec![service_item("RBF", "Gros œuvre")]);
        let state = AppState {
            directory: Arc::new(DirectoryService::new(Arc::new(entities), Arc::new(catalog))),
            readiness: Arc::new(Ready(true)),
        };
        build_router(state, None)
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    #[tokio::test]
    async fn test_list_entities_returns_array_with_group() {
        let (status, json) = get_json(app(), "/api/entities").await;

        assert_eq!(status, StatusCode::OK);
        let codes: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["code"].as_str().unwrap())
            .collect();
        assert_eq!(codes, vec!["GROUPE", "RBF", "RBA"]);
        assert_eq!(json[1]["shortName"], "BTP");
    }

    #[tokio::test]
    async fn test_get_entity_by_slug() {
        let (status, json) = get_json(app(), "/api/entities/rbf").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["code"], "RBF");
    }

    #[tokio::test]
    async fn test_unknown_entity_is_404_with_json_body() {
        let (status, json) = get_json(app(), "/api/entities/xyz/services").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "NotFound");
    }

    #[tokio::test]
    async fn test_services_for_entity() {
        let (status, json) = get_json(app(), "/api/entities/rbf/services").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json.as_array().unwrap().len(), 1);
        assert_eq!(json[0]["kind"], "service");
        assert_eq!(json[0]["entityCode"], "RBF");
    }

    #[tokio::test]
    async fn test_entity_without_items_returns_empty_array() {
        let (status, json) = get_json(app(), "/api/entities/rba/products").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_database_failure_hides_driver_message() {
        let state = AppState {
            directory: Arc::new(DirectoryService::new(
                Arc::new(FailingEntities),
                Arc::new(InMemoryCatalog(vec![])),
            )),
            readiness: Arc::new(Ready(true)),
        };

        let (status, json) = get_json(build_router(state, None), "/api/entities").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "DatabaseError");
        assert!(!json["message"].as_str().unwrap().contains("refused"));
    }

    #[tokio::test]
    async fn test_health_and_readiness() {
        let (status, json) = get_json(app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "healthy");

        let state = AppState {
            directory: Arc::new(DirectoryService::new(
                Arc::new(InMemoryEntities(vec![])),
                Arc::new(InMemoryCatalog(vec![])),
            )),
            readiness: Arc::new(Ready(false)),
        };
        let (status, _) = get_json(build_router(state, None), "/health/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }
}
