use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

/// Liveness - GET /health
pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// Readiness - GET /health/ready
pub async fn readiness_check(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    state.readiness.check().await.map_err(ApiError::Unavailable)?;
    Ok(StatusCode::OK)
}
