//! Application configuration loaded from command-line flags and environment variables.
//!
//! Configuration is parsed once at startup and validated before the server starts.
//! Every option can be given as a flag or through its environment variable; a flag
//! wins over the environment, and the environment wins over the built-in default.
//! `.env` files are honoured because `main` loads them with `dotenvy` before parsing.
//!
//! ## Options
//!
//! | Flag | Environment | Default |
//! |------|-------------|---------|
//! | `-a`, `--address` | `SERVER_ADDRESS` | `:8080` |
//! | `-b`, `--base-url` | `BASE_URL` | `http://localhost:8080/` |
//! | `-f`, `--file-storage-path` | `FILE_STORAGE_PATH` | `/tmp/short-url-db.json` |
//! | `-k`, `--key-length` | `KEY_LENGTH` | `6` |
//! | `--on-save-error` | `SAVE_FAILURE_POLICY` | `fail` |
//! | `--log-level` | `RUST_LOG` | `info` |
//! | `--log-format` | `LOG_FORMAT` | `text` |
//!
//! An empty `--file-storage-path` disables persistence and keeps the store in memory.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::Path;
use url::Url;

use crate::utils::key_generator::{DEFAULT_KEY_LENGTH, MAX_KEY_LENGTH, MIN_KEY_LENGTH};

/// What the store does when a snapshot write fails after a new mapping was created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SaveFailurePolicy {
    /// Roll the new mapping back and fail the request.
    #[default]
    Fail,
    /// Log the error and keep serving the new mapping from memory.
    Log,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Service configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "urlpresser")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// HTTP listen address (`host:port`, or `:port` to bind every interface)
    #[arg(
        short = 'a',
        long = "address",
        env = "SERVER_ADDRESS",
        default_value = ":8080"
    )]
    pub server_address: String,

    /// Prefix prepended to generated keys to build short links
    #[arg(
        short = 'b',
        long,
        env = "BASE_URL",
        default_value = "http://localhost:8080/"
    )]
    pub base_url: String,

    /// Snapshot file; an empty value disables persistence
    #[arg(
        short = 'f',
        long,
        env = "FILE_STORAGE_PATH",
        default_value = "/tmp/short-url-db.json"
    )]
    pub file_storage_path: String,

    /// Length of generated short keys
    #[arg(short = 'k', long, env = "KEY_LENGTH", default_value_t = DEFAULT_KEY_LENGTH)]
    pub key_length: usize,

    /// Behaviour when writing the snapshot fails
    #[arg(
        long = "on-save-error",
        env = "SAVE_FAILURE_POLICY",
        value_enum,
        default_value_t = SaveFailurePolicy::Fail
    )]
    pub save_failure_policy: SaveFailurePolicy,

    /// Tracing filter directive
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Log output format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl Config {
    /// Parses flags and environment, then validates the result.
    ///
    /// Exits the process with a usage message on unknown flags or `--help`.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    pub fn load() -> Result<Self> {
        let config = Self::parse();
        config.validate()?;
        Ok(config)
    }

    /// Returns the address to bind, expanding a bare `:port` to all interfaces.
    pub fn listen_addr(&self) -> String {
        if self.server_address.starts_with(':') {
            format!("0.0.0.0{}", self.server_address)
        } else {
            self.server_address.clone()
        }
    }

    /// Returns the snapshot path, or `None` when persistence is disabled.
    pub fn storage_path(&self) -> Option<&Path> {
        let path = self.file_storage_path.trim();
        (!path.is_empty()).then(|| Path::new(path))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the listen address is not `host:port` / `:port` with a numeric port
    /// - the base URL is not an absolute `http`/`https` URL
    /// - the key length is outside the supported range
    pub fn validate(&self) -> Result<()> {
        let (host, port) = self.server_address.rsplit_once(':').with_context(|| {
            format!(
                "SERVER_ADDRESS must be in format 'host:port' or ':port', got '{}'",
                self.server_address
            )
        })?;

        port.parse::<u16>().with_context(|| {
            format!(
                "SERVER_ADDRESS has an invalid port '{}' (host '{}')",
                port, host
            )
        })?;

        let base_url = Url::parse(&self.base_url)
            .with_context(|| format!("BASE_URL is not a valid URL: '{}'", self.base_url))?;

        if base_url.scheme() != "http" && base_url.scheme() != "https" {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if !(MIN_KEY_LENGTH..=MAX_KEY_LENGTH).contains(&self.key_length) {
            anyhow::bail!(
                "KEY_LENGTH must be between {} and {}, got {}",
                MIN_KEY_LENGTH,
                MAX_KEY_LENGTH,
                self.key_length
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr());
        tracing::info!("  Base URL: {}", self.base_url);

        match self.storage_path() {
            Some(path) => tracing::info!("  File storage: {}", path.display()),
            None => tracing::info!("  File storage: disabled (in-memory)"),
        }

        tracing::info!("  Key length: {}", self.key_length);
        tracing::info!("  On save error: {:?}", self.save_failure_policy);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {:?}", self.log_format);
    }
}
