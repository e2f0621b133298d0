//! URL pair entity representing one short-key mapping.

use serde::{Deserialize, Serialize};

/// A short key and the original URL it was issued for.
///
/// This is also the on-disk record: a snapshot file is a JSON array of pairs,
/// each serialized as `{"short_url": "...", "original_url": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlPair {
    pub short_url: String,
    pub original_url: String,
}

impl UrlPair {
    /// Creates a new pair.
    pub fn new(short_url: impl Into<String>, original_url: impl Into<String>) -> Self {
        Self {
            short_url: short_url.into(),
            original_url: original_url.into(),
        }
    }
}
