//! Router assembly for the formlet HTTP API.
//!
//! [`build_router`] wires all handler functions to their routes with
//! CORS and tracing middleware layers.

use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// Routes use axum 0.8 `/{param}` path syntax. CORS is permissive (the
/// editor and completion UIs are served from other origins). TraceLayer
/// provides request-level logging via tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Form lifecycle
        .route(
            "/forms",
            post(handlers::forms::create_form).get(handlers::forms::list_forms),
        )
        .route(
            "/forms/{id}",
            get(handlers::questions::load_form).delete(handlers::forms::delete_form),
        )
        .route("/forms/{id}/name", put(handlers::forms::rename_form))
        // Question editing
        .route(
            "/forms/{id}/questions",
            post(handlers::questions::create_question),
        )
        .route(
            "/forms/{id}/questions/{kind}/{qid}",
            put(handlers::questions::update_question)
                .delete(handlers::questions::delete_question),
        )
        .route(
            "/forms/{id}/questions/{kind}/{qid}/options",
            post(handlers::questions::add_option),
        )
        .route(
            "/forms/{id}/questions/{kind}/{qid}/options/{oid}",
            delete(handlers::questions::delete_option),
        )
        // Order reconciliation
        .route("/forms/{id}/reorder", post(handlers::reorder::apply_reorder))
        // Completion and submission (anonymous)
        .route(
            "/forms/{id}/completion",
            get(handlers::completion::completion_view),
        )
        .route(
            "/forms/{id}/responses",
            post(handlers::completion::submit_responses),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
