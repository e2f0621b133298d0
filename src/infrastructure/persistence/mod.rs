//! Snapshot repository implementations.
//!
//! # Repositories
//!
//! - [`JsonFileRepository`] - Rewrites a JSON array file on every save
//! - [`NullRepository`] - No-op backend used when persistence is disabled

pub mod json_file_repository;
pub mod null_repository;

pub use json_file_repository::JsonFileRepository;
pub use null_repository::NullRepository;
