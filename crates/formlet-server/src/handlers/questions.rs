//! Question editing handlers (load, create, update, delete, options).

use axum::extract::{Path, State};
use axum::Json;

use formlet_core::{QuestionId, QuestionKind, QuestionRef};
use formlet_storage::FormId;

use crate::auth::RequestorId;
use crate::error::ApiError;
use crate::schema::questions::{
    AddOptionRequest, CreateQuestionRequest, CreatedOption, LoadFormResponse,
    UpdateQuestionRequest,
};
use crate::state::AppState;

fn parse_kind(kind: &str) -> Result<QuestionKind, ApiError> {
    kind.parse::<QuestionKind>()
        .map_err(|err| ApiError::BadRequest(err.to_string()))
}

/// Loads a form's aggregated question list for the editor.
///
/// `GET /forms/{id}`
pub async fn load_form(
    State(state): State<AppState>,
    RequestorId(requestor): RequestorId,
    Path(id): Path<String>,
) -> Result<Json<LoadFormResponse>, ApiError> {
    let service = state.service.lock().await;
    let (form_name, questions) = service.load_questions(&FormId(id), &requestor)?;
    Ok(Json(LoadFormResponse { form_name, questions }))
}

/// Creates a question, appended at the end of the form's sequence.
///
/// `POST /forms/{id}/questions`
pub async fn create_question(
    State(state): State<AppState>,
    RequestorId(requestor): RequestorId,
    Path(id): Path<String>,
    Json(req): Json<CreateQuestionRequest>,
) -> Result<Json<formlet_core::Question>, ApiError> {
    let mut service = state.service.lock().await;
    let question = service.create_question(&FormId(id), &requestor, req)?;
    Ok(Json(question))
}

/// Updates a question's text, payload, and order index.
///
/// `PUT /forms/{id}/questions/{kind}/{qid}`
pub async fn update_question(
    State(state): State<AppState>,
    RequestorId(requestor): RequestorId,
    Path((id, kind, qid)): Path<(String, String, i64)>,
    Json(req): Json<UpdateQuestionRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let target = QuestionRef::new(parse_kind(&kind)?, QuestionId(qid));
    let mut service = state.service.lock().await;
    service.update_question(&FormId(id), &requestor, target, req)?;
    Ok(Json(serde_json::json!({ "success": true })))
}

/// Deletes a question (its options cascade).
///
/// `DELETE /forms/{id}/questions/{kind}/{qid}`
pub async fn delete_question(
    State(state): State<AppState>,
    RequestorId(requestor): RequestorId,
    Path((id, kind, qid)): Path<(String, String, i64)>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let target = QuestionRef::new(parse_kind(&kind)?, QuestionId(qid));
    let mut service = state.service.lock().await;
    service.delete_question(&FormId(id), &requestor, target)?;
    Ok(Json(serde_json::json!({ "success": true })))
}

/// Adds an option to a Choice or Ranking question.
///
/// `POST /forms/{id}/questions/{kind}/{qid}/options`
pub async fn add_option(
    State(state): State<AppState>,
    RequestorId(requestor): RequestorId,
    Path((id, kind, qid)): Path<(String, String, i64)>,
    Json(req): Json<AddOptionRequest>,
) -> Result<Json<CreatedOption>, ApiError> {
    let target = QuestionRef::new(parse_kind(&kind)?, QuestionId(qid));
    let mut service = state.service.lock().await;
    let created =
        service.add_option(&FormId(id), &requestor, target, &req.option, req.order_index)?;
    Ok(Json(created))
}

/// Removes an option from a Choice or Ranking question.
///
/// `DELETE /forms/{id}/questions/{kind}/{qid}/options/{oid}`
pub async fn delete_option(
    State(state): State<AppState>,
    RequestorId(requestor): RequestorId,
    Path((id, kind, qid, oid)): Path<(String, String, i64, i64)>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let target = QuestionRef::new(parse_kind(&kind)?, QuestionId(qid));
    let mut service = state.service.lock().await;
    service.delete_option(&FormId(id), &requestor, target, oid)?;
    Ok(Json(serde_json::json!({ "success": true })))
}
