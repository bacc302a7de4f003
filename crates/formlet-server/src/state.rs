//! Application state with the shared `FormService` for concurrent access.
//!
//! [`AppState`] wraps the service in `Arc<tokio::sync::Mutex<>>` for use with
//! axum handlers. The async-aware mutex lets handlers await the lock without
//! blocking the tokio runtime; an `RwLock` would permit concurrent reads, but
//! `FormService` holds a `rusqlite::Connection`, which is `!Sync` and cannot
//! live behind one.

use std::sync::Arc;

use crate::error::ApiError;
use crate::service::FormService;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The shared form service (async Mutex -- non-blocking await).
    pub service: Arc<tokio::sync::Mutex<FormService>>,
}

impl AppState {
    /// Creates a new `AppState` with a `FormService` backed by the given
    /// SQLite database path.
    pub fn new(db_path: &str) -> Result<Self, ApiError> {
        let service = FormService::new(db_path)?;
        Ok(AppState {
            service: Arc::new(tokio::sync::Mutex::new(service)),
        })
    }

    /// Creates a new `AppState` with an in-memory database (for testing).
    pub fn in_memory() -> Result<Self, ApiError> {
        let service = FormService::in_memory()?;
        Ok(AppState {
            service: Arc::new(tokio::sync::Mutex::new(service)),
        })
    }
}
