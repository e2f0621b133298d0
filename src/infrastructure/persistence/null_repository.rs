//! No-op snapshot backend for in-memory mode.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::entities::UrlPair;
use crate::domain::repositories::{SnapshotError, SnapshotRepository};

/// A snapshot repository that stores nothing.
///
/// Used when no file storage path is configured. Loads return an empty
/// snapshot and saves succeed immediately, so the store runs purely in memory.
pub struct NullRepository;

impl NullRepository {
    /// Creates a new NullRepository instance.
    pub fn new() -> Self {
        debug!("Using NullRepository (persistence disabled)");
        Self
    }
}

impl Default for NullRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SnapshotRepository for NullRepository {
    async fn load(&self) -> Result<Vec<UrlPair>, SnapshotError> {
        Ok(Vec::new())
    }

    async fn save(&self, _pairs: &[UrlPair]) -> Result<(), SnapshotError> {
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn describe(&self) -> String {
        "disabled (in-memory)".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_null_repository_forgets_everything() {
        let repository = NullRepository::new();

        repository
            .save(&[UrlPair::new("abc123", "https://example.com")])
            .await
            .unwrap();

        assert!(repository.load().await.unwrap().is_empty());
        assert!(repository.health_check().await);
    }
}
