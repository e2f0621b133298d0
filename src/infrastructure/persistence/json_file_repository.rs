//! JSON file implementation of the snapshot repository.

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, info};

use crate::domain::entities::UrlPair;
use crate::domain::repositories::{SnapshotError, SnapshotRepository};

/// Snapshot repository backed by a single JSON file.
///
/// The file holds a JSON array of [`UrlPair`] objects. Every save serializes the
/// full state into a sibling `*.tmp` file and renames it over the target, so a
/// reader never observes a half-written snapshot.
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Creates a repository for the snapshot at `path`.
    ///
    /// Nothing is touched on disk until [`SnapshotRepository::load`] runs.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Creates an empty snapshot file, along with any missing parent directories.
    async fn create_empty(&self) -> Result<(), SnapshotError> {
        let write_err = |source| SnapshotError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).await.map_err(write_err)?;
        }

        fs::File::create(&self.path).await.map_err(write_err)?;
        info!(path = %self.path.display(), "Created empty snapshot file");

        Ok(())
    }
}

#[async_trait]
impl SnapshotRepository for JsonFileRepository {
    async fn load(&self) -> Result<Vec<UrlPair>, SnapshotError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                self.create_empty().await?;
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(SnapshotError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        // A file created on a previous first start is empty until the first save.
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        let pairs: Vec<UrlPair> =
            serde_json::from_slice(&bytes).map_err(|source| SnapshotError::Malformed {
                path: self.path.clone(),
                source,
            })?;

        info!(path = %self.path.display(), count = pairs.len(), "Loaded snapshot");

        Ok(pairs)
    }

    async fn save(&self, pairs: &[UrlPair]) -> Result<(), SnapshotError> {
        let data = serde_json::to_vec(pairs)?;
        let temp_path = self.temp_path();

        fs::write(&temp_path, &data)
            .await
            .map_err(|source| SnapshotError::Write {
                path: temp_path.clone(),
                source,
            })?;

        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|source| SnapshotError::Write {
                path: self.path.clone(),
                source,
            })?;

        debug!(path = %self.path.display(), count = pairs.len(), "Saved snapshot");

        Ok(())
    }

    async fn health_check(&self) -> bool {
        fs::metadata(&self.path).await.is_ok()
    }

    fn describe(&self) -> String {
        format!("json file {}", self.path.display())
    }
}
