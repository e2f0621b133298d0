//! Domain layer containing the URL mapping model and persistence contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures (the short/original URL pair)
//! - [`repositories`] - Snapshot persistence trait definitions
//!
//! The domain layer has no dependencies on the HTTP or infrastructure layers.
//! Concrete snapshot backends live in [`crate::infrastructure::persistence`] and the
//! store that ties everything together lives in [`crate::application::services`].

pub mod entities;
pub mod repositories;
