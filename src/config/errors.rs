//! Configuration error types.

use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No saved configuration with the given name
    #[error("Configuration not found: {0}")]
    NotFound(String),

    /// Malformed configuration snapshot
    #[error("Invalid configuration snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
