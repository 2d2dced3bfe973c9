//! Error types for the list engine
//!
//! Only recoverable conditions are represented here. Addressing a list or item
//! that does not exist is a caller bug and panics instead.

use thiserror::Error;

/// Errors raised by the list engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// A symbolic position outside `top`, `current` and `bottom` was used
    /// where a concrete index is needed.
    #[error("invalid position: {0:?}")]
    InvalidPosition(String),

    /// User input failed validation before reaching the engine.
    #[error("{0}")]
    Validation(String),
}

/// A specialized `Result` type for list engine operations.
pub type Result<T> = std::result::Result<T, ListError>;
