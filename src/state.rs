use std::sync::Arc;

use crate::application::services::UrlStore;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<UrlStore>,
    pub base_url: Arc<str>,
}

impl AppState {
    pub fn new(store: Arc<UrlStore>, base_url: impl Into<String>) -> Self {
        Self {
            store,
            base_url: Arc::from(base_url.into()),
        }
    }

    /// Builds the full short link for `key`.
    ///
    /// The base URL may be configured with or without a trailing slash.
    pub fn short_url(&self, key: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), key)
    }
}
