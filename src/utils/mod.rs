//! Utility helpers.
//!
//! - [`key_generator`] - Random short key generation

pub mod key_generator;
