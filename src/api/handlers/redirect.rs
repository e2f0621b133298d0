//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::debug;

use crate::error::{AppError, TextError};
use crate::state::AppState;

/// Redirects a short key to its original URL.
///
/// # Endpoint
///
/// `GET /{id}`
///
/// # Response
///
/// `307 Temporary Redirect` with the original URL in the `Location` header.
///
/// # Errors
///
/// Returns `400 Invalid request` if the key was never issued.
pub async fn redirect_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, TextError> {
    let original = state
        .store
        .resolve_original_url(&id)
        .await
        .ok_or_else(|| AppError::not_found("Unknown short key", json!({ "id": id })))?;

    let location = HeaderValue::from_str(&original).map_err(|_| {
        AppError::internal(
            "Stored URL is not a valid Location header",
            json!({ "id": id }),
        )
    })?;

    debug!("Redirecting {} -> {}", id, original);

    Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]).into_response())
}
