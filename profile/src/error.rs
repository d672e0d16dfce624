//! Unified error types for the profile feed
//!
//! This module defines error types for each layer:
//! - `StorageError`: Durable key-value storage failures
//! - `FeedError`: Persisted feed data that cannot be read back
//! - `ImageError`: Photo decoding/encoding failures
//! - `AppError`: Command layer errors (wraps the others for the terminal UI)

use thiserror::Error;

/// Key-value storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage quota exceeded: {needed} bytes needed, {quota} bytes available")]
    QuotaExceeded { needed: usize, quota: usize },

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage file is corrupt: {0}")]
    Corrupt(String),

    #[error("Failed to encode value: {0}")]
    Encode(String),
}

impl StorageError {
    pub fn is_quota_exceeded(&self) -> bool {
        matches!(self, StorageError::QuotaExceeded { .. })
    }
}

/// Feed persistence errors that are recovered locally
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Malformed persisted data: {0}")]
    MalformedPersistedData(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Image pipeline errors
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Failed to encode image: {0}")]
    Encode(String),

    #[error("Failed to read image file: {0}")]
    Io(#[from] std::io::Error),
}

/// Application layer errors - surfaced by command handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Storage(#[from] StorageError),

    #[error("{0}")]
    Image(#[from] ImageError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Parse error for user commands
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Missing argument for: {0}")]
    MissingArgument(String),
}

impl From<ParseError> for AppError {
    fn from(e: ParseError) -> Self {
        AppError::Parse(e.to_string())
    }
}
