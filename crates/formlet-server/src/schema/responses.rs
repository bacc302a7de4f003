//! Response submission request/response types.

use serde::{Deserialize, Serialize};

use formlet_core::ClientResponse;

/// A respondent's complete answer batch: exactly one entry per question of
/// the form, in any order.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitRequest {
    pub responses: Vec<ClientResponse>,
}

/// Outcome of a submission: responses persisted vs. skipped (unknown
/// question ref, failed validation, or write failure).
#[derive(Debug, Clone, Serialize)]
pub struct SubmitResponse {
    pub recorded: usize,
    pub rejected: usize,
}
