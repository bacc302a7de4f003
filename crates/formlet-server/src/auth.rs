//! Requestor identity extraction.
//!
//! Authentication itself is an external collaborator; by the time a request
//! reaches this server, upstream middleware has resolved the caller to an
//! opaque user id carried in the `x-user-id` header. [`RequestorId`] extracts
//! it, rejecting editor-path requests that arrive without one. Completion and
//! submission endpoints do not use the extractor -- respondents are anonymous.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::ApiError;

/// Header carrying the authenticated caller's opaque user id.
pub const REQUESTOR_HEADER: &str = "x-user-id";

/// The authenticated requestor's opaque user id.
#[derive(Debug, Clone)]
pub struct RequestorId(pub String);

impl<S> FromRequestParts<S> for RequestorId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(REQUESTOR_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
            .map(|value| RequestorId(value.to_string()))
            .ok_or(ApiError::Unauthorized)
    }
}
