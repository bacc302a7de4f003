//! End-to-end integration tests for the formlet HTTP API.
//!
//! Tests exercise the full stack: HTTP request -> axum router -> handler ->
//! FormService -> ordering/validation/storage -> HTTP response.
//!
//! Each test creates a fresh AppState backed by an in-memory SQLite
//! database. Tests use `tower::ServiceExt::oneshot` to send requests
//! directly to the router without starting a network server; the AppState is
//! kept alongside the router so tests can also assert on stored response
//! rows through the service.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use formlet_core::{QuestionId, QuestionKind, QuestionRef};
use formlet_server::router::build_router;
use formlet_server::state::AppState;
use formlet_storage::FormId;

const OWNER: &str = "owner-1";
const STRANGER: &str = "someone-else";

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

/// Creates a fresh state + router pair backed by an in-memory database.
fn test_app() -> (AppState, Router) {
    let state = AppState::in_memory().expect("failed to create in-memory AppState");
    let router = build_router(state.clone());
    (state, router)
}

/// Sends a request and returns (status, json). `user` becomes the
/// `x-user-id` header when present.
async fn send(
    app: &Router,
    method: &str,
    path: &str,
    user: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(user) = user {
        builder = builder.header("x-user-id", user);
    }
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap_or(json!(null));
    (status, json)
}

/// Creates a form owned by `user`, returning its id.
async fn create_form(app: &Router, user: &str, name: &str) -> String {
    let (status, body) = send(app, "POST", "/forms", Some(user), Some(json!({ "name": name }))).await;
    assert_eq!(status, StatusCode::OK, "create form failed: {:?}", body);
    body["id"].as_str().unwrap().to_string()
}

/// Creates a question, returning the created question JSON
/// (`{"type": ..., "data": ...}`).
async fn create_question(app: &Router, user: &str, form: &str, request: Value) -> Value {
    let (status, body) = send(
        app,
        "POST",
        &format!("/forms/{form}/questions"),
        Some(user),
        Some(request),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create question failed: {:?}", body);
    body
}

fn question_ref(question: &Value) -> QuestionRef {
    QuestionRef::new(
        question["type"].as_str().unwrap().parse().unwrap(),
        QuestionId(question["data"]["id"].as_i64().unwrap()),
    )
}

async fn response_rows(state: &AppState, form: &str, target: QuestionRef) -> i64 {
    let service = state.service.lock().await;
    service
        .response_count(&FormId(form.to_string()), target)
        .unwrap()
}

// ---------------------------------------------------------------------------
// Form lifecycle
// ---------------------------------------------------------------------------

#[tokio::test]
async fn form_lifecycle_create_list_rename_delete() {
    let (_state, app) = test_app();
    let form = create_form(&app, OWNER, "my survey").await;

    let (status, body) = send(&app, "GET", "/forms", Some(OWNER), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["forms"][0]["name"], "my survey");

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/forms/{form}/name"),
        Some(OWNER),
        Some(json!({ "name": "renamed" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "GET", &format!("/forms/{form}"), Some(OWNER), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["formName"], "renamed");

    // A stranger cannot rename or delete; the form just "does not exist".
    let (status, _) = send(
        &app,
        "PUT",
        &format!("/forms/{form}/name"),
        Some(STRANGER),
        Some(json!({ "name": "hijacked" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", &format!("/forms/{form}"), Some(OWNER), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, "GET", &format!("/forms/{form}/completion"), None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn identity_header_is_required_on_editor_paths_only() {
    let (_state, app) = test_app();
    let form = create_form(&app, OWNER, "f").await;

    let (status, _) = send(&app, "GET", &format!("/forms/{form}"), None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, "GET", &format!("/forms/{form}"), Some(STRANGER), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Completion is anonymous.
    let (status, body) = send(&app, "GET", &format!("/forms/{form}/completion"), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["formName"], "f");
}

// ---------------------------------------------------------------------------
// Aggregation and ordering
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_form_loads_an_empty_question_list() {
    let (_state, app) = test_app();
    let form = create_form(&app, OWNER, "empty").await;
    let (status, body) = send(&app, "GET", &format!("/forms/{form}"), Some(OWNER), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["questions"], json!([]));
}

#[tokio::test]
async fn created_questions_append_contiguous_order_indices() {
    let (_state, app) = test_app();
    let form = create_form(&app, OWNER, "f").await;

    let q0 = create_question(
        &app,
        OWNER,
        &form,
        json!({ "type": "Choice", "data": { "questionText": "pick", "options": ["A", "B"] } }),
    )
    .await;
    let q1 = create_question(
        &app,
        OWNER,
        &form,
        json!({ "type": "Text", "data": { "questionText": "say" } }),
    )
    .await;
    let q2 = create_question(
        &app,
        OWNER,
        &form,
        json!({ "type": "Rating", "data": { "questionText": "rate" } }),
    )
    .await;

    assert_eq!(q0["data"]["order_index"], 0);
    assert_eq!(q1["data"]["order_index"], 1);
    assert_eq!(q2["data"]["order_index"], 2);
    // Rating defaults to a 5-step scale.
    assert_eq!(q2["data"]["ratingsLevel"], 5);

    let (_, body) = send(&app, "GET", &format!("/forms/{form}"), Some(OWNER), None).await;
    let kinds: Vec<&str> = body["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["type"].as_str().unwrap())
        .collect();
    assert_eq!(kinds, vec!["Choice", "Text", "Rating"]);
}

#[tokio::test]
async fn choice_options_round_trip_in_original_order() {
    let (_state, app) = test_app();
    let form = create_form(&app, OWNER, "f").await;
    create_question(
        &app,
        OWNER,
        &form,
        json!({ "type": "Choice", "data": { "questionText": "pick", "options": ["A", "B"] } }),
    )
    .await;

    let (_, body) = send(&app, "GET", &format!("/forms/{form}"), Some(OWNER), None).await;
    let options = body["questions"][0]["data"]["options"].as_array().unwrap();
    let texts: Vec<&str> = options.iter().map(|o| o["option"].as_str().unwrap()).collect();
    assert_eq!(texts, vec!["A", "B"]);
    assert_ne!(options[0]["id"], options[1]["id"]);
}

#[tokio::test]
async fn reorder_renumbers_to_contiguous_indices_and_is_idempotent() {
    let (_state, app) = test_app();
    let form = create_form(&app, OWNER, "f").await;
    let choice = create_question(
        &app,
        OWNER,
        &form,
        json!({ "type": "Choice", "data": { "questionText": "c", "options": ["A"] } }),
    )
    .await;
    let text = create_question(
        &app,
        OWNER,
        &form,
        json!({ "type": "Text", "data": { "questionText": "t" } }),
    )
    .await;
    let date = create_question(
        &app,
        OWNER,
        &form,
        json!({ "type": "Date", "data": { "questionText": "d" } }),
    )
    .await;

    let desired = json!({ "order": [
        { "type": "Date", "id": date["data"]["id"] },
        { "type": "Choice", "id": choice["data"]["id"] },
        { "type": "Text", "id": text["data"]["id"] },
    ]});
    let (status, body) = send(
        &app,
        "POST",
        &format!("/forms/{form}/reorder"),
        Some(OWNER),
        Some(desired.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["updated"], 3);
    assert_eq!(body["failed"], json!([]));

    let (_, body) = send(&app, "GET", &format!("/forms/{form}"), Some(OWNER), None).await;
    let questions = body["questions"].as_array().unwrap();
    let kinds: Vec<&str> = questions.iter().map(|q| q["type"].as_str().unwrap()).collect();
    assert_eq!(kinds, vec!["Date", "Choice", "Text"]);
    let indices: Vec<i64> = questions
        .iter()
        .map(|q| q["data"]["order_index"].as_i64().unwrap())
        .collect();
    assert_eq!(indices, vec![0, 1, 2]);

    // Same target order again: every entry is already in place.
    let (status, body) = send(
        &app,
        "POST",
        &format!("/forms/{form}/reorder"),
        Some(OWNER),
        Some(desired),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["updated"], 0);
    assert_eq!(body["failed"], json!([]));
}

#[tokio::test]
async fn reorder_reports_stale_entries_and_applies_the_rest() {
    let (_state, app) = test_app();
    let form = create_form(&app, OWNER, "f").await;
    let text = create_question(
        &app,
        OWNER,
        &form,
        json!({ "type": "Text", "data": { "questionText": "t" } }),
    )
    .await;

    // A ref the form never had (e.g. deleted by a concurrent editor).
    let (status, body) = send(
        &app,
        "POST",
        &format!("/forms/{form}/reorder"),
        Some(OWNER),
        Some(json!({ "order": [
            { "type": "Rating", "id": 999 },
            { "type": "Text", "id": text["data"]["id"] },
        ]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["updated"], 1);
    assert_eq!(body["failed"], json!([{ "type": "Rating", "id": 999 }]));

    let (_, body) = send(&app, "GET", &format!("/forms/{form}"), Some(OWNER), None).await;
    assert_eq!(body["questions"][0]["data"]["order_index"], 1);
}

// ---------------------------------------------------------------------------
// Question editing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_and_delete_question() {
    let (_state, app) = test_app();
    let form = create_form(&app, OWNER, "f").await;
    let text = create_question(
        &app,
        OWNER,
        &form,
        json!({ "type": "Text", "data": { "questionText": "original" } }),
    )
    .await;
    let qid = text["data"]["id"].as_i64().unwrap();

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/forms/{form}/questions/Text/{qid}"),
        Some(OWNER),
        Some(json!({ "type": "Text", "data": { "questionText": "edited", "order_index": 0 } })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Body tag must agree with the path.
    let (status, _) = send(
        &app,
        "PUT",
        &format!("/forms/{form}/questions/Date/{qid}"),
        Some(OWNER),
        Some(json!({ "type": "Text", "data": { "questionText": "x", "order_index": 0 } })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = send(&app, "GET", &format!("/forms/{form}"), Some(OWNER), None).await;
    assert_eq!(body["questions"][0]["data"]["questionText"], "edited");

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/forms/{form}/questions/Text/{qid}"),
        Some(OWNER),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (_, body) = send(&app, "GET", &format!("/forms/{form}"), Some(OWNER), None).await;
    assert_eq!(body["questions"], json!([]));
}

#[tokio::test]
async fn rating_levels_outside_range_are_rejected() {
    let (_state, app) = test_app();
    let form = create_form(&app, OWNER, "f").await;
    let (status, _) = send(
        &app,
        "POST",
        &format!("/forms/{form}/questions"),
        Some(OWNER),
        Some(json!({ "type": "Rating", "data": { "questionText": "r", "ratingsLevel": 11 } })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let created = create_question(
        &app,
        OWNER,
        &form,
        json!({ "type": "Rating", "data": { "questionText": "r", "ratingsLevel": 2 } }),
    )
    .await;
    assert_eq!(created["data"]["ratingsLevel"], 2);
}

#[tokio::test]
async fn option_add_and_delete_through_the_api() {
    let (_state, app) = test_app();
    let form = create_form(&app, OWNER, "f").await;
    let ranking = create_question(
        &app,
        OWNER,
        &form,
        json!({ "type": "Ranking", "data": { "questionText": "rank", "options": ["x"] } }),
    )
    .await;
    let qid = ranking["data"]["id"].as_i64().unwrap();

    let (status, created) = send(
        &app,
        "POST",
        &format!("/forms/{form}/questions/Ranking/{qid}/options"),
        Some(OWNER),
        Some(json!({ "option": "y", "order_index": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["option"], "y");

    // Text questions have no options.
    let text = create_question(
        &app,
        OWNER,
        &form,
        json!({ "type": "Text", "data": { "questionText": "t" } }),
    )
    .await;
    let (status, _) = send(
        &app,
        "POST",
        &format!("/forms/{form}/questions/Text/{}/options", text["data"]["id"]),
        Some(OWNER),
        Some(json!({ "option": "z", "order_index": 0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let oid = created["id"].as_i64().unwrap();
    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/forms/{form}/questions/Ranking/{qid}/options/{oid}"),
        Some(OWNER),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, "GET", &format!("/forms/{form}"), Some(OWNER), None).await;
    assert_eq!(body["questions"][0]["data"]["rankOptions"].as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Submission pipeline
// ---------------------------------------------------------------------------

#[tokio::test]
async fn count_mismatch_rejects_the_whole_batch() {
    let (state, app) = test_app();
    let form = create_form(&app, OWNER, "f").await;
    let mut targets = Vec::new();
    for text in ["a", "b", "c"] {
        let q = create_question(
            &app,
            OWNER,
            &form,
            json!({ "type": "Text", "data": { "questionText": text } }),
        )
        .await;
        targets.push(question_ref(&q));
    }

    let (status, body) = send(
        &app,
        "POST",
        &format!("/forms/{form}/responses"),
        None,
        Some(json!({ "responses": [
            { "questionType": "Text", "questionId": targets[0].id, "response": "one" },
            { "questionType": "Text", "questionId": targets[1].id, "response": "two" },
        ]})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "COUNT_MISMATCH");
    for target in targets {
        assert_eq!(response_rows(&state, &form, target).await, 0);
    }
}

#[tokio::test]
async fn invalid_ranking_permutations_are_skipped_without_rows() {
    let (state, app) = test_app();
    let form = create_form(&app, OWNER, "f").await;
    let ranking = create_question(
        &app,
        OWNER,
        &form,
        json!({ "type": "Ranking", "data": { "questionText": "rank", "options": ["x", "y", "z"] } }),
    )
    .await;
    let target = question_ref(&ranking);
    let ids: Vec<i64> = ranking["data"]["rankOptions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["id"].as_i64().unwrap())
        .collect();

    // Missing one, duplicated one, and containing a foreign id.
    for bad in [
        json!([ids[0], ids[1]]),
        json!([ids[0], ids[0], ids[1]]),
        json!([ids[0], ids[1], 999_999]),
    ] {
        let (status, body) = send(
            &app,
            "POST",
            &format!("/forms/{form}/responses"),
            None,
            Some(json!({ "responses": [
                { "questionType": "Ranking", "questionId": target.id, "response": bad },
            ]})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["recorded"], 0);
        assert_eq!(body["rejected"], 1);
    }
    assert_eq!(response_rows(&state, &form, target).await, 0);

    // A true permutation is accepted.
    let (status, body) = send(
        &app,
        "POST",
        &format!("/forms/{form}/responses"),
        None,
        Some(json!({ "responses": [
            { "questionType": "Ranking", "questionId": target.id,
              "response": [ids[2], ids[0], ids[1]] },
        ]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["recorded"], 1);
    assert_eq!(response_rows(&state, &form, target).await, 1);
}

#[tokio::test]
async fn first_response_locks_the_question() {
    let (_state, app) = test_app();
    let form = create_form(&app, OWNER, "f").await;
    let text = create_question(
        &app,
        OWNER,
        &form,
        json!({ "type": "Text", "data": { "questionText": "say" } }),
    )
    .await;
    assert_eq!(text["data"]["editable"], true);

    let (status, _) = send(
        &app,
        "POST",
        &format!("/forms/{form}/responses"),
        None,
        Some(json!({ "responses": [
            { "questionType": "Text", "questionId": text["data"]["id"], "response": "hello" },
        ]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, "GET", &format!("/forms/{form}"), Some(OWNER), None).await;
    assert_eq!(body["questions"][0]["data"]["editable"], false);
}

#[tokio::test]
async fn rating_submission_scenario() {
    // One Rating question, levels=5: submit 4, expect a recorded row and the
    // question locked; a second 1-length batch with 5 is still accepted (the
    // lock stops editing, not responding), so at least one row exists and
    // the flag stays false.
    let (state, app) = test_app();
    let form = create_form(&app, OWNER, "f").await;
    let rating = create_question(
        &app,
        OWNER,
        &form,
        json!({ "type": "Rating", "data": { "questionText": "rate", "ratingsLevel": 5 } }),
    )
    .await;
    let target = question_ref(&rating);

    let (status, body) = send(
        &app,
        "POST",
        &format!("/forms/{form}/responses"),
        None,
        Some(json!({ "responses": [
            { "questionType": "Rating", "questionId": target.id, "response": 4 },
        ]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["recorded"], 1);
    assert_eq!(response_rows(&state, &form, target).await, 1);

    let (status, body) = send(
        &app,
        "POST",
        &format!("/forms/{form}/responses"),
        None,
        Some(json!({ "responses": [
            { "questionType": "Rating", "questionId": target.id, "response": 5 },
        ]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["recorded"], 1);

    assert!(response_rows(&state, &form, target).await >= 1);
    let (_, body) = send(&app, "GET", &format!("/forms/{form}"), Some(OWNER), None).await;
    assert_eq!(body["questions"][0]["data"]["editable"], false);

    // Out-of-scale values are skipped without a row.
    let before = response_rows(&state, &form, target).await;
    let (status, body) = send(
        &app,
        "POST",
        &format!("/forms/{form}/responses"),
        None,
        Some(json!({ "responses": [
            { "questionType": "Rating", "questionId": target.id, "response": 6 },
        ]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["rejected"], 1);
    assert_eq!(response_rows(&state, &form, target).await, before);
}

#[tokio::test]
async fn forged_question_ids_are_skipped_and_the_rest_persist() {
    let (state, app) = test_app();
    let form = create_form(&app, OWNER, "f").await;
    let text = create_question(
        &app,
        OWNER,
        &form,
        json!({ "type": "Text", "data": { "questionText": "say" } }),
    )
    .await;
    let date = create_question(
        &app,
        OWNER,
        &form,
        json!({ "type": "Date", "data": { "questionText": "when" } }),
    )
    .await;

    let (status, body) = send(
        &app,
        "POST",
        &format!("/forms/{form}/responses"),
        None,
        Some(json!({ "responses": [
            { "questionType": "Text", "questionId": 424242, "response": "forged" },
            { "questionType": "Date", "questionId": date["data"]["id"], "response": "2026-08-08" },
        ]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["recorded"], 1);
    assert_eq!(body["rejected"], 1);
    assert_eq!(response_rows(&state, &form, question_ref(&date)).await, 1);
    assert_eq!(response_rows(&state, &form, question_ref(&text)).await, 0);
}

#[tokio::test]
async fn choice_and_date_payloads_are_validated() {
    let (state, app) = test_app();
    let form = create_form(&app, OWNER, "f").await;
    let choice = create_question(
        &app,
        OWNER,
        &form,
        json!({ "type": "Choice", "data": { "questionText": "pick", "options": ["A", "B"] } }),
    )
    .await;
    let date = create_question(
        &app,
        OWNER,
        &form,
        json!({ "type": "Date", "data": { "questionText": "when" } }),
    )
    .await;
    let option_id = choice["data"]["options"][0]["id"].as_i64().unwrap();

    // Foreign option id and unparseable date: both skipped, nothing written.
    let (status, body) = send(
        &app,
        "POST",
        &format!("/forms/{form}/responses"),
        None,
        Some(json!({ "responses": [
            { "questionType": "Choice", "questionId": choice["data"]["id"], "response": 999_999 },
            { "questionType": "Date", "questionId": date["data"]["id"], "response": "not-a-date" },
        ]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["recorded"], 0);
    assert_eq!(body["rejected"], 2);
    assert_eq!(response_rows(&state, &form, question_ref(&choice)).await, 0);
    assert_eq!(response_rows(&state, &form, question_ref(&date)).await, 0);

    let (status, body) = send(
        &app,
        "POST",
        &format!("/forms/{form}/responses"),
        None,
        Some(json!({ "responses": [
            { "questionType": "Choice", "questionId": choice["data"]["id"], "response": option_id },
            { "questionType": "Date", "questionId": date["data"]["id"], "response": "2026-02-28" },
        ]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["recorded"], 2);
    assert_eq!(body["rejected"], 0);
}

#[tokio::test]
async fn required_text_questions_still_accept_empty_responses() {
    // The required flag is stored and served but deliberately not enforced
    // at submission time.
    let (state, app) = test_app();
    let form = create_form(&app, OWNER, "f").await;
    let text = create_question(
        &app,
        OWNER,
        &form,
        json!({ "type": "Text", "data": { "questionText": "say" } }),
    )
    .await;

    let (status, body) = send(
        &app,
        "POST",
        &format!("/forms/{form}/responses"),
        None,
        Some(json!({ "responses": [
            { "questionType": "Text", "questionId": text["data"]["id"], "response": "" },
        ]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["recorded"], 1);
    assert_eq!(response_rows(&state, &form, question_ref(&text)).await, 1);
}

#[tokio::test]
async fn submission_to_a_missing_form_is_not_found() {
    let (_state, app) = test_app();
    let (status, _) = send(
        &app,
        "POST",
        "/forms/00000000-0000-0000-0000-000000000000/responses",
        None,
        Some(json!({ "responses": [] })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_question_kind_in_path_is_a_bad_request() {
    let (_state, app) = test_app();
    let form = create_form(&app, OWNER, "f").await;
    let (status, body) = send(
        &app,
        "DELETE",
        &format!("/forms/{form}/questions/Checkbox/1"),
        Some(OWNER),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn usage_of_kind_helper_matches_wire_tags() {
    // Guards the QuestionKind::as_str round trip the path parsing relies on.
    assert_eq!("Choice".parse::<QuestionKind>().unwrap(), QuestionKind::Choice);
    assert_eq!("ranking".parse::<QuestionKind>().unwrap(), QuestionKind::Ranking);
}
