//! Liveness and readiness of the review store.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` when the store is reachable and bootstrapped, else `degraded`.
    pub status: &'static str,
    pub version: &'static str,
    /// Whether the SQLite pool answers a trivial query.
    pub db_healthy: bool,
    /// Whether the `reviews` table exists, i.e. bootstrap has run.
    pub schema_ready: bool,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = ctrl_db::health_check(&state.pool).await.is_ok();
    let schema_ready = db_healthy
        && ctrl_db::schema_exists(&state.pool)
            .await
            .unwrap_or_else(|err| {
                tracing::warn!(error = %err, "Schema check failed");
                false
            });

    let status = if db_healthy && schema_ready { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        schema_ready,
    })
}

/// Mounted at the root, outside `/api`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
