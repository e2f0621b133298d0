//! # urlpresser
//!
//! A small URL shortening service built with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - URL pair entity and the snapshot repository trait
//! - **Application Layer** ([`application`]) - The bidirectional [`UrlStore`](application::services::UrlStore)
//! - **Infrastructure Layer** ([`infrastructure`]) - JSON file and no-op snapshot backends
//! - **API Layer** ([`api`]) - Handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Random 6-character keys over `[a-zA-Z0-9]`, unique by rejection sampling
//! - Idempotent shortening: the same URL always maps to the same key
//! - Optional JSON snapshot rewritten on every new mapping
//! - Plain-text (`POST /`) and JSON (`POST /api/shorten`) shortening
//!
//! ## Quick Start
//!
//! ```bash
//! # In-memory only
//! cargo run -- -a :8080 -b http://localhost:8080/ -f ""
//!
//! # With a snapshot file
//! FILE_STORAGE_PATH=/var/lib/urlpresser/db.json cargo run
//! ```
//!
//! ## Configuration
//!
//! Flags and environment variables are described in [`config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
