//! Error types for bingelog-core

use thiserror::Error;

/// Main error type for the bingelog-core library
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Persisted state blob error
    #[error("storage error: {0}")]
    Storage(String),

    /// AI oracle error
    #[error("oracle error: {0}")]
    Oracle(String),
}

/// Result type alias for bingelog-core
pub type Result<T> = std::result::Result<T, Error>;
