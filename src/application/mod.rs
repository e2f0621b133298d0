//! Application layer services implementing business logic.
//!
//! This layer orchestrates the key generator and the snapshot repository into the
//! store consumed by HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::url_store::UrlStore`] - Short key creation, lookup and persistence

pub mod services;
