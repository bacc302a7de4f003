//! Order reconciliation handler.

use axum::extract::{Path, State};
use axum::Json;

use formlet_storage::FormId;

use crate::auth::RequestorId;
use crate::error::ApiError;
use crate::schema::reorder::{ReorderRequest, ReorderResponse};
use crate::state::AppState;

/// Applies the full desired ordering of a form's questions.
///
/// `POST /forms/{id}/reorder`
pub async fn apply_reorder(
    State(state): State<AppState>,
    RequestorId(requestor): RequestorId,
    Path(id): Path<String>,
    Json(req): Json<ReorderRequest>,
) -> Result<Json<ReorderResponse>, ApiError> {
    let mut service = state.service.lock().await;
    let outcome = service.apply_reorder(&FormId(id), &requestor, &req.order)?;
    Ok(Json(outcome))
}
