use axum::extract::State;
use axum::{routing::get, Json, Router};
use catalog_core::types::Timestamp;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// `healthy`, or `degraded` when the database does not answer.
    pub status: &'static str,
    /// Server time the check ran.
    pub timestamp: Timestamp,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the database is reachable.
    pub db_healthy: bool,
}

/// GET /health -- always 200; reports database reachability in the body.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = match catalog_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Database health check failed");
            false
        }
    };

    let status = if db_healthy { "healthy" } else { "degraded" };

    Json(HealthResponse {
        status,
        timestamp: chrono::Utc::now(),
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// Mount health check routes at the root.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
