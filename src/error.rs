//! Error types for propstore
//!
//! Provides a unified error type for all store operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using StoreError
pub type Result<T> = std::result::Result<T, StoreError>;

/// Unified error type for propstore operations
#[derive(Debug, Error)]
pub enum StoreError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    /// Reading or writing the backing file failed (permissions, missing
    /// parent directory, invalid UTF-8, disk error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// `reload` was called before the backing file exists
    #[error("Properties file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    // -------------------------------------------------------------------------
    // Access Errors
    // -------------------------------------------------------------------------
    /// `get_raw` was called for a key the store does not hold
    #[error("Key not found: {0}")]
    MissingKey(String),
}

impl StoreError {
    /// True for errors that come from the filesystem rather than from a
    /// caller asking for something that is not there
    pub fn is_io(&self) -> bool {
        matches!(self, StoreError::Io(_) | StoreError::FileNotFound(_))
    }
}
