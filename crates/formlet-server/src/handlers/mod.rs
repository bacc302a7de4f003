//! HTTP handler modules for the formlet API.
//!
//! Each sub-module implements thin handlers that parse requests, acquire the
//! service lock, delegate to [`FormService`], and return JSON responses.
//! No business logic lives in handlers.
//!
//! [`FormService`]: crate::service::FormService

pub mod completion;
pub mod forms;
pub mod questions;
pub mod reorder;
