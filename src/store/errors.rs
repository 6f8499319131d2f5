//! Store error types

use std::io;

use thiserror::Error;

/// Document store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique index rejected the write
    #[error("Duplicate value for unique field '{field}'")]
    DuplicateKey { field: &'static str },

    /// No live connection to the store
    #[error("Store is not connected")]
    NotConnected,

    /// Failed to reach the backing storage
    #[error("Store I/O error: {0}")]
    Io(#[from] io::Error),

    /// A stored document could not be encoded or decoded
    #[error("Store JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A lock was poisoned by a panicking writer
    #[error("Store lock poisoned")]
    LockPoisoned,
}

impl StoreError {
    pub fn duplicate(field: &'static str) -> Self {
        StoreError::DuplicateKey { field }
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
