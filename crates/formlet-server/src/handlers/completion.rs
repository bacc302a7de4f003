//! Respondent-facing handlers: completion view and response submission.
//!
//! Neither endpoint takes a requestor identity -- respondents are anonymous,
//! and only the form's existence is checked.

use axum::extract::{Path, State};
use axum::Json;

use formlet_storage::FormId;

use crate::error::ApiError;
use crate::schema::questions::LoadFormResponse;
use crate::schema::responses::{SubmitRequest, SubmitResponse};
use crate::state::AppState;

/// Loads a form's question list for completion or preview.
///
/// `GET /forms/{id}/completion`
pub async fn completion_view(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LoadFormResponse>, ApiError> {
    let service = state.service.lock().await;
    let (form_name, questions) = service.load_for_completion(&FormId(id))?;
    Ok(Json(LoadFormResponse { form_name, questions }))
}

/// Submits a respondent's complete answer batch.
///
/// `POST /forms/{id}/responses`
pub async fn submit_responses(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<SubmitRequest>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let mut service = state.service.lock().await;
    let outcome = service.submit_responses(&FormId(id), &req.responses)?;
    Ok(Json(outcome))
}
