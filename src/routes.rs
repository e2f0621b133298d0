//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /`              - Shorten a plain-text URL
//! - `GET  /{id}`          - Short link redirect
//! - `POST /api/shorten`   - Shorten a JSON-wrapped URL
//! - `GET  /api/health`    - Store and persistence health
//!
//! # Middleware
//!
//! - **Tracing** - Request spans with latency
//! - **Access log** - One record per request with status and response size
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{redirect_handler, shorten_text_handler};
use crate::api::middleware::{access_log, tracing};
use crate::state::AppState;
use axum::routing::{get, post};
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the router with all routes and middleware, without path normalization.
///
/// Integration tests drive this router directly.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", post(shorten_text_handler))
        .route("/{id}", get(redirect_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(middleware::from_fn(access_log::layer))
        .layer(tracing::layer())
}

/// Constructs the application service: [`router`] wrapped so that `/abc123/`
/// is routed like `/abc123`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
