//! Storage error types for formlet-storage.
//!
//! Not-found and not-yours outcomes are deliberately NOT error variants:
//! the store reports them as `Option`/`bool` returns so callers cannot
//! distinguish a missing row from one they are not allowed to touch.
//! [`StorageError`] covers genuine failures only.

use thiserror::Error;

/// Errors produced by storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The underlying SQLite operation failed.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Applying schema migrations failed.
    #[error("migration error: {0}")]
    Migration(String),

    /// A data integrity violation was detected.
    #[error("integrity error: {reason}")]
    Integrity { reason: String },
}
