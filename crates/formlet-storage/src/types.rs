//! Storage-layer types for form identity and metadata.
//!
//! [`FormId`] is defined here (not in formlet-core) because form identity is
//! a storage concern -- forms gain an id when persisted.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a stored form.
///
/// A UUIDv4 string assigned by the store at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormId(pub String);

impl FormId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Summary of a stored form (for listing).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormSummary {
    /// Form identifier.
    pub id: FormId,
    /// Form name.
    pub name: String,
}
