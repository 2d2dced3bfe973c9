//! Error types for the application shell.
//!
//! [`Error`] wraps engine errors together with everything that can go wrong
//! around the engine: file access, JSON mapping, HTTP, configuration.

use listkeeper_core::ListError;
use thiserror::Error;

/// The main error type for listkeeper operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The engine rejected an action or user input failed validation.
    #[error(transparent)]
    List(#[from] ListError),

    /// Filesystem operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A snapshot or settings object could not be mapped to or from JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The cloud endpoint could not be reached.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Stored data is unusable.
    #[error("Storage error: {0}")]
    Storage(String),

    /// The cloud endpoint answered with an error.
    #[error("Cloud error: {0}")]
    Cloud(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for listkeeper operations.
pub type Result<T> = std::result::Result<T, Error>;
