//! Access log middleware.
//!
//! Emits one structured record per request with the request line, the response
//! status and size, and the handling latency.

use axum::{body::HttpBody, extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// Logs method, URI, status, response size and latency for every request.
///
/// # Integration
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/", post(shorten_text_handler))
///     .layer(axum::middleware::from_fn(access_log::layer));
/// ```
pub async fn layer(req: Request, next: Next) -> Response {
    let start = Instant::now();

    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;

    let bytes_out = response.body().size_hint().exact().unwrap_or(0);
    let latency_ms = start.elapsed().as_millis() as u64;

    tracing::info!(
        method = %method,
        uri = %uri,
        status = response.status().as_u16(),
        bytes_out,
        latency_ms,
        "request served"
    );

    response
}
