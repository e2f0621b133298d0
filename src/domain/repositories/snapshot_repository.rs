//! Repository trait for store snapshot persistence.

use std::io;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::entities::UrlPair;

/// Errors raised while loading or saving a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("malformed snapshot {path}: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("inconsistent snapshot: {0}")]
    Inconsistent(String),

    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write snapshot {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// Repository interface for persisting the full set of URL pairs.
///
/// The store never writes deltas: every [`save`](SnapshotRepository::save) receives
/// the complete current state and replaces whatever was stored before.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::JsonFileRepository`] - JSON array on disk
/// - [`crate::infrastructure::persistence::NullRepository`] - Persistence disabled
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SnapshotRepository: Send + Sync {
    /// Loads every persisted pair.
    ///
    /// Backends that start without prior state return an empty vector and prepare
    /// their storage so later saves succeed.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Read`] if the backing storage cannot be read,
    /// [`SnapshotError::Write`] if missing storage cannot be created, and
    /// [`SnapshotError::Malformed`] if its content cannot be parsed.
    async fn load(&self) -> Result<Vec<UrlPair>, SnapshotError>;

    /// Replaces the persisted state with `pairs`.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Write`] on I/O failure.
    async fn save(&self, pairs: &[UrlPair]) -> Result<(), SnapshotError>;

    /// Checks if the backend is reachable.
    ///
    /// Used by the health endpoint to report persistence status.
    async fn health_check(&self) -> bool;

    /// Short human-readable description of the backend, e.g. `json file /tmp/db.json`.
    fn describe(&self) -> String;
}
