//! Business logic services for the application layer.

pub mod url_store;

pub use url_store::UrlStore;
