#![allow(dead_code)]

use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use urlpresser::application::services::UrlStore;
use urlpresser::config::SaveFailurePolicy;
use urlpresser::domain::entities::UrlPair;
use urlpresser::domain::repositories::{SnapshotError, SnapshotRepository};
use urlpresser::infrastructure::persistence::{JsonFileRepository, NullRepository};
use urlpresser::state::AppState;
use urlpresser::utils::key_generator::RandomKeyGenerator;

pub const BASE_URL: &str = "http://localhost:8000/";

/// Snapshot backend whose writes always fail.
pub struct BrokenRepository;

#[async_trait]
impl SnapshotRepository for BrokenRepository {
    async fn load(&self) -> Result<Vec<UrlPair>, SnapshotError> {
        Ok(Vec::new())
    }

    async fn save(&self, _pairs: &[UrlPair]) -> Result<(), SnapshotError> {
        Err(SnapshotError::Write {
            path: "/nonexistent/db.json".into(),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        })
    }

    async fn health_check(&self) -> bool {
        false
    }

    fn describe(&self) -> String {
        "broken".to_string()
    }
}

pub async fn create_store(
    repository: Arc<dyn SnapshotRepository>,
    policy: SaveFailurePolicy,
) -> UrlStore {
    UrlStore::open(repository, Arc::new(RandomKeyGenerator::default()), policy)
        .await
        .unwrap()
}

/// In-memory state using [`BASE_URL`].
pub async fn create_test_state() -> AppState {
    let store = create_store(Arc::new(NullRepository::new()), SaveFailurePolicy::Fail).await;
    AppState::new(Arc::new(store), BASE_URL)
}

/// State persisting to a JSON snapshot at `path`.
pub async fn create_file_state(path: &Path) -> AppState {
    let store = create_store(
        Arc::new(JsonFileRepository::new(path)),
        SaveFailurePolicy::Fail,
    )
    .await;
    AppState::new(Arc::new(store), BASE_URL)
}

/// State whose snapshot writes always fail.
pub async fn create_broken_state(policy: SaveFailurePolicy) -> AppState {
    let store = create_store(Arc::new(BrokenRepository), policy).await;
    AppState::new(Arc::new(store), BASE_URL)
}

/// Extracts the key from a full short link.
pub fn key_of(short_url: &str) -> &str {
    short_url.rsplit('/').next().unwrap()
}
