//! Repository trait definitions for the domain layer.
//!
//! # Architecture
//!
//! - Traits define the contract for snapshot persistence
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`SnapshotRepository`] - Full-snapshot load/save of the URL store

pub mod snapshot_repository;

pub use snapshot_repository::{SnapshotError, SnapshotRepository};

#[cfg(test)]
pub use snapshot_repository::MockSnapshotRepository;
