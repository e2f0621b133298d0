//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /api/health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: The persistence backend is unreachable
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "store": { "status": "ok", "message": "42 entries" },
///     "persistence": { "status": "ok", "message": "json file /tmp/short-url-db.json" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let store_check = CheckStatus::ok(format!("{} entries", state.store.len().await));

    let persistence_check = check_persistence(&state).await;

    let all_healthy = store_check.is_ok() && persistence_check.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            store: store_check,
            persistence: persistence_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks that the snapshot backend is reachable.
async fn check_persistence(state: &AppState) -> CheckStatus {
    let backend = state.store.persistence();

    if state.store.persistence_healthy().await {
        CheckStatus::ok(backend)
    } else {
        CheckStatus::error(format!("{} is unreachable", backend))
    }
}
