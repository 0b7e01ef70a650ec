//! Error types for logger setup.
//!
//! # Design
//! Building, rendering and delivering log entries cannot fail, so the only
//! errors in this crate come from loading configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by `LoggerConfig::load`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist.
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// A source could not be parsed or holds a value of the wrong shape.
    #[error("invalid logger config: {0}")]
    Invalid(#[from] figment::Error),
}
