//! JSON API route configuration, nested under `/api`.

use crate::api::handlers::{health_handler, shorten_json_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// JSON API routes.
///
/// # Endpoints
///
/// - `POST /shorten` - Shorten a URL sent as `{"url": "..."}`
/// - `GET  /health`  - Store and persistence health
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_json_handler))
        .route("/health", get(health_handler))
}
