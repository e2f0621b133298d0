//! HTTP server initialization and runtime setup.
//!
//! Handles snapshot loading, store construction, and the Axum server lifecycle.

use crate::application::services::UrlStore;
use crate::config::Config;
use crate::domain::repositories::SnapshotRepository;
use crate::infrastructure::persistence::{JsonFileRepository, NullRepository};
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::key_generator::RandomKeyGenerator;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::sync::Arc;

/// Builds the shared state: snapshot backend, key generator and the loaded store.
///
/// # Errors
///
/// Returns an error if the snapshot file cannot be read or created, or if its
/// content is malformed. The server must not start in that case.
pub async fn build_state(config: &Config) -> Result<AppState> {
    let repository: Arc<dyn SnapshotRepository> = match config.storage_path() {
        Some(path) => {
            tracing::info!("Persistence enabled ({})", path.display());
            Arc::new(JsonFileRepository::new(path))
        }
        None => {
            tracing::info!("Persistence disabled (in-memory store)");
            Arc::new(NullRepository::new())
        }
    };

    let generator = Arc::new(RandomKeyGenerator::new(config.key_length));

    let store = UrlStore::open(repository, generator, config.save_failure_policy)
        .await
        .context("Failed to load URL store snapshot")?;

    Ok(AppState::new(Arc::new(store), config.base_url.clone()))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Snapshot backend (JSON file or in-memory)
/// - URL store, loaded from the snapshot
/// - Axum HTTP server, stopped gracefully on Ctrl-C
///
/// # Errors
///
/// Returns an error if:
/// - The snapshot cannot be loaded
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config).await?;

    let app = app_router(state);

    let listen_addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", listen_addr))?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves when the process receives Ctrl-C.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
