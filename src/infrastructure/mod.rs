//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - Snapshot backends (JSON file and no-op implementations)

pub mod persistence;
