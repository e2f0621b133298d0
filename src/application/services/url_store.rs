//! Bidirectional short/original URL store.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, error, info};

use crate::config::SaveFailurePolicy;
use crate::domain::entities::UrlPair;
use crate::domain::repositories::{SnapshotError, SnapshotRepository};
use crate::utils::key_generator::KeyGenerator;

/// Both directions of the mapping. Always mutated together under the store lock.
#[derive(Default)]
struct Mappings {
    short_by_original: HashMap<String, String>,
    original_by_short: HashMap<String, String>,
}

impl Mappings {
    fn from_pairs(pairs: Vec<UrlPair>) -> Result<Self, SnapshotError> {
        let mut mappings = Self::default();

        for pair in pairs {
            if mappings.original_by_short.contains_key(&pair.short_url) {
                return Err(SnapshotError::Inconsistent(format!(
                    "short key '{}' appears more than once",
                    pair.short_url
                )));
            }
            if mappings.short_by_original.contains_key(&pair.original_url) {
                return Err(SnapshotError::Inconsistent(format!(
                    "original URL '{}' is mapped to more than one key",
                    pair.original_url
                )));
            }
            mappings.insert(pair.original_url, pair.short_url);
        }

        Ok(mappings)
    }

    fn insert(&mut self, original: String, short: String) {
        self.original_by_short.insert(short.clone(), original.clone());
        self.short_by_original.insert(original, short);
    }

    /// Full snapshot including a pair not yet inserted, sorted by short key so
    /// that files are stable across rewrites.
    fn snapshot_with(&self, short: &str, original: &str) -> Vec<UrlPair> {
        let mut pairs: Vec<UrlPair> = self
            .original_by_short
            .iter()
            .map(|(short, original)| UrlPair::new(short.as_str(), original.as_str()))
            .chain(std::iter::once(UrlPair::new(short, original)))
            .collect();
        pairs.sort_unstable_by(|a, b| a.short_url.cmp(&b.short_url));
        pairs
    }
}

/// Service owning the short ↔ original mapping.
///
/// # Guarantees
///
/// - The same original URL always yields the same short key.
/// - Every short key resolves to exactly one original URL.
/// - A single async mutex guards both maps; its critical section covers
///   read-check-persist-insert, so concurrent requests for the same new URL
///   cannot mint two keys and snapshot writes never interleave.
///
/// # Persistence
///
/// After each new mapping the full state is handed to the [`SnapshotRepository`]
/// before the call returns. What happens when that write fails is governed by
/// [`SaveFailurePolicy`].
pub struct UrlStore {
    mappings: Mutex<Mappings>,
    repository: Arc<dyn SnapshotRepository>,
    generator: Arc<dyn KeyGenerator>,
    save_failure_policy: SaveFailurePolicy,
}

impl UrlStore {
    /// Builds a store from the repository's persisted state.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] if the snapshot cannot be read, cannot be parsed,
    /// or does not describe a one-to-one mapping. Callers should treat this as
    /// fatal: the store must not serve requests from unreliable state.
    pub async fn open(
        repository: Arc<dyn SnapshotRepository>,
        generator: Arc<dyn KeyGenerator>,
        save_failure_policy: SaveFailurePolicy,
    ) -> Result<Self, SnapshotError> {
        let pairs = repository.load().await?;
        let mappings = Mappings::from_pairs(pairs)?;

        info!(
            entries = mappings.original_by_short.len(),
            persistence = %repository.describe(),
            "URL store ready"
        );

        Ok(Self {
            mappings: Mutex::new(mappings),
            repository,
            generator,
            save_failure_policy,
        })
    }

    /// Returns the short key for `original`, creating one if needed.
    ///
    /// New keys are drawn from the generator until one is unused (rejection
    /// sampling). The snapshot including the new pair is saved before the pair
    /// enters memory, so a caller dropped mid-save leaves the store untouched.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] only under [`SaveFailurePolicy::Fail`] when the
    /// snapshot write fails. Nothing is inserted in that case, so memory and disk
    /// stay in agreement and a retry mints a fresh key.
    pub async fn get_or_create_short_url(&self, original: &str) -> Result<String, SnapshotError> {
        let mut mappings = self.mappings.lock().await;

        if let Some(short) = mappings.short_by_original.get(original) {
            return Ok(short.clone());
        }

        let short = loop {
            let candidate = self.generator.generate();
            if !mappings.original_by_short.contains_key(&candidate) {
                break candidate;
            }
            debug!(key = %candidate, "Short key collision, drawing again");
        };

        let snapshot = mappings.snapshot_with(&short, original);
        if let Err(e) = self.repository.save(&snapshot).await {
            match self.save_failure_policy {
                SaveFailurePolicy::Fail => return Err(e),
                SaveFailurePolicy::Log => {
                    error!(key = %short, "Failed to save snapshot, keeping key in memory: {}", e);
                }
            }
        }

        mappings.insert(original.to_string(), short.clone());
        debug!(key = %short, "Created short key");

        Ok(short)
    }

    /// Looks up the original URL for a short key.
    pub async fn resolve_original_url(&self, short: &str) -> Option<String> {
        self.mappings
            .lock()
            .await
            .original_by_short
            .get(short)
            .cloned()
    }

    /// Number of stored pairs.
    pub async fn len(&self) -> usize {
        self.mappings.lock().await.original_by_short.len()
    }

    /// Returns true if no pair has been stored yet.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Checks that the persistence backend is reachable.
    pub async fn persistence_healthy(&self) -> bool {
        self.repository.health_check().await
    }

    /// Describes the persistence backend.
    pub fn persistence(&self) -> String {
        self.repository.describe()
    }
}
