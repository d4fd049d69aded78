//! Error types for vaultmon operations.

use thiserror::Error;

/// The main error type for vaultmon operations.
///
/// Configuration problems and Vault communication failures both map to the
/// `Undefined` severity at the command level; they are kept apart here so
/// commands can report them with the right wording.
#[derive(Error, Debug)]
pub enum MonitorError {
    /// Configuration-related error (bad output format, unparsable threshold)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Vault communication or protocol error
    #[error("Vault error: {0}")]
    Vault(String),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for vaultmon operations.
pub type Result<T> = std::result::Result<T, MonitorError>;
