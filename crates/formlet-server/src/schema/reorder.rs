//! Reorder request/response types.

use serde::{Deserialize, Serialize};

use formlet_core::QuestionRef;

/// The full desired ordering of every question in the form, as produced by
/// a drag-reorder in the editor.
#[derive(Debug, Clone, Deserialize)]
pub struct ReorderRequest {
    pub order: Vec<QuestionRef>,
}

/// Outcome of applying a reorder: how many per-question index updates were
/// written, and which entries could not be applied. Successful updates are
/// never rolled back on partial failure.
#[derive(Debug, Clone, Serialize)]
pub struct ReorderResponse {
    pub updated: usize,
    pub failed: Vec<QuestionRef>,
}
