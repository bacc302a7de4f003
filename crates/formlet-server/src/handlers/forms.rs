//! Form lifecycle handlers (create, list, rename, delete).

use axum::extract::{Path, State};
use axum::Json;

use formlet_storage::FormId;

use crate::auth::RequestorId;
use crate::error::ApiError;
use crate::schema::forms::{
    CreateFormRequest, CreateFormResponse, FormListResponse, RenameFormRequest,
};
use crate::state::AppState;

/// Creates a new form owned by the requestor.
///
/// `POST /forms`
pub async fn create_form(
    State(state): State<AppState>,
    RequestorId(requestor): RequestorId,
    Json(req): Json<CreateFormRequest>,
) -> Result<Json<CreateFormResponse>, ApiError> {
    let mut service = state.service.lock().await;
    let id = service.create_form(&req.name, &requestor)?;
    Ok(Json(CreateFormResponse { id, name: req.name }))
}

/// Lists the requestor's forms.
///
/// `GET /forms`
pub async fn list_forms(
    State(state): State<AppState>,
    RequestorId(requestor): RequestorId,
) -> Result<Json<FormListResponse>, ApiError> {
    let service = state.service.lock().await;
    let forms = service.list_forms(&requestor)?;
    Ok(Json(FormListResponse { forms }))
}

/// Renames a form.
///
/// `PUT /forms/{id}/name`
pub async fn rename_form(
    State(state): State<AppState>,
    RequestorId(requestor): RequestorId,
    Path(id): Path<String>,
    Json(req): Json<RenameFormRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let mut service = state.service.lock().await;
    service.rename_form(&FormId(id), &requestor, &req.name)?;
    Ok(Json(serde_json::json!({ "success": true })))
}

/// Deletes a form and everything it owns.
///
/// `DELETE /forms/{id}`
pub async fn delete_form(
    State(state): State<AppState>,
    RequestorId(requestor): RequestorId,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let mut service = state.service.lock().await;
    service.delete_form(&FormId(id), &requestor)?;
    Ok(Json(serde_json::json!({ "success": true })))
}
