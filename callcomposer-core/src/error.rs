//! Error types for callcomposer.
//!
//! The rendering pipeline itself never fails; these cover loading requests
//! and configuration from disk.

use thiserror::Error;

/// Errors that can occur around the composing pipeline.
#[derive(Error, Debug)]
pub enum ComposerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid call request: {0}")]
    Request(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for callcomposer operations.
pub type ComposerResult<T> = Result<T, ComposerError>;
