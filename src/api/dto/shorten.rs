//! DTOs for the JSON shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten. Surrounding whitespace is ignored.
    #[validate(custom(function = "not_blank", message = "URL must not be empty"))]
    pub url: String,
}

/// Response carrying the full short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub result: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
