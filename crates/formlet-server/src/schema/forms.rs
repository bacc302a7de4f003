//! Form lifecycle request/response types.

use serde::{Deserialize, Serialize};

use formlet_storage::{FormId, FormSummary};

/// Request to create a new form.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFormRequest {
    /// The name for the new form.
    pub name: String,
}

/// Response from creating a form.
#[derive(Debug, Clone, Serialize)]
pub struct CreateFormResponse {
    /// The assigned form identifier.
    pub id: FormId,
    /// The form name.
    pub name: String,
}

/// Response for listing the requestor's forms.
#[derive(Debug, Clone, Serialize)]
pub struct FormListResponse {
    /// All forms owned by the requestor.
    pub forms: Vec<FormSummary>,
}

/// Request to rename a form.
#[derive(Debug, Clone, Deserialize)]
pub struct RenameFormRequest {
    /// The new form name.
    pub name: String,
}
