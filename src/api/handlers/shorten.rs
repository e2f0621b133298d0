//! Handlers for the shortening endpoints.

use axum::{Json, body::Bytes, extract::State, http::StatusCode};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::{AppError, TextError};
use crate::state::AppState;

/// Shortens the URL sent as a plain-text body.
///
/// # Endpoint
///
/// `POST /`
///
/// # Request Body
///
/// ```text
/// https://example.com/some/long/path
/// ```
///
/// # Response
///
/// `201 Created` with the full short link as `text/plain`:
///
/// ```text
/// http://localhost:8080/Ab3dE9
/// ```
///
/// Shortening the same URL again returns the same link.
///
/// # Errors
///
/// Returns `400 Invalid request` if the body is not UTF-8 or is empty after trimming.
/// Returns `500` if the snapshot cannot be written and the store is configured
/// to fail on save errors.
pub async fn shorten_text_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, String), TextError> {
    let body = String::from_utf8(body.to_vec()).map_err(|e| {
        AppError::bad_request("Body is not UTF-8", json!({ "reason": e.to_string() }))
    })?;
    let original = body.trim();
    if original.is_empty() {
        return Err(AppError::bad_request("Empty request body", json!({})).into());
    }

    let key = state.store.get_or_create_short_url(original).await?;

    Ok((StatusCode::CREATED, state.short_url(&key)))
}

/// Shortens a URL sent as JSON.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// `201 Created`:
///
/// ```json
/// { "result": "http://localhost:8080/Ab3dE9" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request with a `validation_error` envelope if the body is empty,
/// is not valid JSON, or carries a blank `url`.
pub async fn shorten_json_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    if body.is_empty() {
        return Err(AppError::bad_request("Empty request body", json!({})));
    }

    let payload: ShortenRequest = serde_json::from_slice(&body).map_err(|e| {
        AppError::bad_request("Invalid JSON body", json!({ "reason": e.to_string() }))
    })?;
    payload.validate()?;

    let key = state
        .store
        .get_or_create_short_url(payload.url.trim())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            result: state.short_url(&key),
        }),
    ))
}
