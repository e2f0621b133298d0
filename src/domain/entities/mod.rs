//! Core domain entities.
//!
//! - [`UrlPair`] - A short key together with the original URL it resolves to

pub mod url_pair;

pub use url_pair::UrlPair;
