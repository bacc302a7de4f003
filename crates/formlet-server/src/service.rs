//! FormService: the single coordinator between HTTP handlers and the
//! core/storage crates.
//!
//! All business logic flows through [`FormService`]; handlers are thin
//! wrappers that delegate to these methods. The service hosts the three core
//! components:
//!
//! - the **question aggregator** ([`FormService::load_questions`]): merges
//!   the five per-variant collections into one order-sorted list;
//! - the **order reconciler** ([`FormService::apply_reorder`]): plans and
//!   dispatches the minimal per-question index updates for a desired
//!   ordering;
//! - the **submission pipeline** ([`FormService::submit_responses`]):
//!   validates a response batch against a freshly reloaded question list,
//!   persists each answer, and locks questions on first response.

use formlet_core::ordering::{merge_questions, reorder_plan};
use formlet_core::question::{Question, DEFAULT_RATING_LEVELS};
use formlet_core::response::validate_response;
use formlet_core::{ClientResponse, QuestionKind, QuestionRef};
use formlet_storage::{FormId, FormStore, FormSummary, SqliteStore};

use crate::error::ApiError;
use crate::schema::questions::{CreateQuestionRequest, CreatedOption, UpdateQuestionRequest};
use crate::schema::reorder::ReorderResponse;
use crate::schema::responses::SubmitResponse;

/// Rating scales outside this range are rejected at creation/update time.
const RATING_LEVEL_RANGE: std::ops::RangeInclusive<u8> = 2..=10;

/// The central service coordinating form lifecycle, question editing,
/// ordering, and response collection.
pub struct FormService {
    /// SQLite storage backend.
    store: SqliteStore,
}

impl FormService {
    /// Creates a new FormService, opening a SQLite database at `db_path`.
    pub fn new(db_path: &str) -> Result<Self, ApiError> {
        let store = SqliteStore::new(db_path)
            .map_err(|e| ApiError::Internal(format!("failed to open store: {}", e)))?;
        Ok(FormService { store })
    }

    /// Creates a new FormService backed by an in-memory database (for
    /// testing).
    pub fn in_memory() -> Result<Self, ApiError> {
        let store = SqliteStore::in_memory()
            .map_err(|e| ApiError::Internal(format!("failed to open store: {}", e)))?;
        Ok(FormService { store })
    }

    // -----------------------------------------------------------------------
    // Form lifecycle
    // -----------------------------------------------------------------------

    pub fn create_form(&mut self, name: &str, owner_id: &str) -> Result<FormId, ApiError> {
        Ok(self.store.create_form(name, owner_id)?)
    }

    pub fn list_forms(&self, owner_id: &str) -> Result<Vec<FormSummary>, ApiError> {
        Ok(self.store.list_forms(owner_id)?)
    }

    pub fn rename_form(
        &mut self,
        form: &FormId,
        requestor_id: &str,
        name: &str,
    ) -> Result<(), ApiError> {
        if self.store.rename_form(form, requestor_id, name)? {
            Ok(())
        } else {
            Err(not_found(form))
        }
    }

    pub fn delete_form(&mut self, form: &FormId, requestor_id: &str) -> Result<(), ApiError> {
        if self.store.delete_form(form, requestor_id)? {
            Ok(())
        } else {
            Err(not_found(form))
        }
    }

    // -----------------------------------------------------------------------
    // Question aggregator
    // -----------------------------------------------------------------------

    /// Loads a form's name and its aggregated, order-sorted question list
    /// for the editor. The requestor must own the form; a missing form and
    /// a foreign form are indistinguishable to the caller.
    pub fn load_questions(
        &self,
        form: &FormId,
        requestor_id: &str,
    ) -> Result<(String, Vec<Question>), ApiError> {
        if !self.store.is_owner(form, requestor_id)? {
            return Err(not_found(form));
        }
        let name = self.store.form_name(form)?.ok_or_else(|| not_found(form))?;
        Ok((name, self.aggregate(form)?))
    }

    /// Loads the question list for the completion/preview path: only the
    /// form's existence is checked, not ownership.
    pub fn load_for_completion(&self, form: &FormId) -> Result<(String, Vec<Question>), ApiError> {
        let name = self.store.form_name(form)?.ok_or_else(|| not_found(form))?;
        Ok((name, self.aggregate(form)?))
    }

    /// Fetches the five per-variant collections and merges them into one
    /// sequence sorted by order index. Read-only: loading never assigns
    /// indices.
    fn aggregate(&self, form: &FormId) -> Result<Vec<Question>, ApiError> {
        let choices = self.store.choice_questions(form)?;
        let texts = self.store.text_questions(form)?;
        let ratings = self.store.rating_questions(form)?;
        let dates = self.store.date_questions(form)?;
        let rankings = self.store.ranking_questions(form)?;
        Ok(merge_questions(choices, texts, ratings, dates, rankings))
    }

    // -----------------------------------------------------------------------
    // Question CRUD
    // -----------------------------------------------------------------------

    /// Creates a question, appending it at order index = current question
    /// count. Question and options insert in one transaction.
    pub fn create_question(
        &mut self,
        form: &FormId,
        requestor_id: &str,
        request: CreateQuestionRequest,
    ) -> Result<Question, ApiError> {
        if !self.store.is_owner(form, requestor_id)? {
            return Err(not_found(form));
        }
        let order_index = self.store.question_count(form)?;
        let question = match request {
            CreateQuestionRequest::Choice { question_text, options } => Question::Choice(
                self.store
                    .insert_choice_question(form, &question_text, &options, order_index)?,
            ),
            CreateQuestionRequest::Text { question_text } => Question::Text(
                self.store.insert_text_question(form, &question_text, order_index)?,
            ),
            CreateQuestionRequest::Rating { question_text, levels } => {
                let levels = levels.unwrap_or(DEFAULT_RATING_LEVELS);
                check_rating_levels(levels)?;
                Question::Rating(
                    self.store
                        .insert_rating_question(form, &question_text, levels, order_index)?,
                )
            }
            CreateQuestionRequest::Date { question_text } => Question::Date(
                self.store.insert_date_question(form, &question_text, order_index)?,
            ),
            CreateQuestionRequest::Ranking { question_text, options } => Question::Ranking(
                self.store
                    .insert_ranking_question(form, &question_text, &options, order_index)?,
            ),
        };
        tracing::info!(form = %form, question = %question.question_ref(), "created question");
        Ok(question)
    }

    /// Updates a question's text, payload, and order index. The `target`
    /// comes from the URL path; the body's variant tag must agree with it.
    pub fn update_question(
        &mut self,
        form: &FormId,
        requestor_id: &str,
        target: QuestionRef,
        request: UpdateQuestionRequest,
    ) -> Result<(), ApiError> {
        if request.kind() != target.kind {
            return Err(ApiError::BadRequest(format!(
                "body is a {} update but the path names a {} question",
                request.kind(),
                target.kind
            )));
        }
        let updated = match request {
            UpdateQuestionRequest::Choice { question_text, options, order_index } => {
                self.store.update_choice_question(
                    form,
                    requestor_id,
                    target.id,
                    &question_text,
                    &options,
                    order_index,
                )?
            }
            UpdateQuestionRequest::Text { question_text, order_index } => self
                .store
                .update_text_question(form, requestor_id, target.id, &question_text, order_index)?,
            UpdateQuestionRequest::Rating { question_text, levels, order_index } => {
                check_rating_levels(levels)?;
                self.store.update_rating_question(
                    form,
                    requestor_id,
                    target.id,
                    &question_text,
                    levels,
                    order_index,
                )?
            }
            UpdateQuestionRequest::Date { question_text, order_index } => self
                .store
                .update_date_question(form, requestor_id, target.id, &question_text, order_index)?,
            UpdateQuestionRequest::Ranking { question_text, options, order_index } => {
                self.store.update_ranking_question(
                    form,
                    requestor_id,
                    target.id,
                    &question_text,
                    &options,
                    order_index,
                )?
            }
        };
        if updated {
            Ok(())
        } else {
            Err(not_found(form))
        }
    }

    pub fn delete_question(
        &mut self,
        form: &FormId,
        requestor_id: &str,
        target: QuestionRef,
    ) -> Result<(), ApiError> {
        if self.store.delete_question(form, requestor_id, target)? {
            Ok(())
        } else {
            Err(not_found(form))
        }
    }

    /// Adds an option to a Choice or Ranking question.
    pub fn add_option(
        &mut self,
        form: &FormId,
        requestor_id: &str,
        target: QuestionRef,
        text: &str,
        order_index: i64,
    ) -> Result<CreatedOption, ApiError> {
        let created = match target.kind {
            QuestionKind::Choice => self
                .store
                .insert_choice_option(form, requestor_id, target.id, text, order_index)?
                .map(CreatedOption::Choice),
            QuestionKind::Ranking => self
                .store
                .insert_ranking_option(form, requestor_id, target.id, text, order_index)?
                .map(CreatedOption::Ranking),
            other => {
                return Err(ApiError::BadRequest(format!("{other} questions do not have options")))
            }
        };
        created.ok_or_else(|| not_found(form))
    }

    /// Removes an option from a Choice or Ranking question. `option_id` is
    /// raw: it is interpreted in the id space the target kind implies.
    pub fn delete_option(
        &mut self,
        form: &FormId,
        requestor_id: &str,
        target: QuestionRef,
        option_id: i64,
    ) -> Result<(), ApiError> {
        let deleted = match target.kind {
            QuestionKind::Choice => self.store.delete_choice_option(
                form,
                requestor_id,
                formlet_core::OptionId(option_id),
            )?,
            QuestionKind::Ranking => self.store.delete_ranking_option(
                form,
                requestor_id,
                formlet_core::RankOptionId(option_id),
            )?,
            other => {
                return Err(ApiError::BadRequest(format!("{other} questions do not have options")))
            }
        };
        if deleted {
            Ok(())
        } else {
            Err(not_found(form))
        }
    }

    // -----------------------------------------------------------------------
    // Order reconciler
    // -----------------------------------------------------------------------

    /// Applies a desired full ordering: questions whose stored index already
    /// matches are skipped; every other entry gets an independently
    /// authorized single-row update. Failures are collected and reported,
    /// not rolled back -- updates are idempotent and position-based, so a
    /// partial application converges on the next reconciliation.
    pub fn apply_reorder(
        &mut self,
        form: &FormId,
        requestor_id: &str,
        desired: &[QuestionRef],
    ) -> Result<ReorderResponse, ApiError> {
        if !self.store.is_owner(form, requestor_id)? {
            return Err(not_found(form));
        }
        let current = self.aggregate(form)?;
        let plan = reorder_plan(&current, desired);

        let mut updated = 0;
        let mut failed = Vec::new();
        for update in plan {
            match self
                .store
                .set_question_order(form, requestor_id, update.target, update.new_index)
            {
                Ok(true) => updated += 1,
                Ok(false) => {
                    tracing::warn!(
                        form = %form,
                        question = %update.target,
                        "reorder entry not applied (missing or not owned)"
                    );
                    failed.push(update.target);
                }
                Err(err) => {
                    tracing::error!(
                        form = %form,
                        question = %update.target,
                        error = %err,
                        "reorder entry failed"
                    );
                    failed.push(update.target);
                }
            }
        }
        Ok(ReorderResponse { updated, failed })
    }

    // -----------------------------------------------------------------------
    // Submission pipeline
    // -----------------------------------------------------------------------

    /// Validates and persists a respondent's answer batch.
    ///
    /// Fails closed on a count mismatch before any write. Per response:
    /// unknown question refs and invalid payloads are logged and skipped;
    /// valid answers are persisted, flipping the owning question's editable
    /// flag immediately before the first response's insert. Individual write
    /// failures do not abort the loop.
    ///
    /// The editable flip is a read-then-write on a shared flag: two racing
    /// first submissions may both observe `editable == true` and both record
    /// a row. The flag still ends up false, which is the guarantee callers
    /// get.
    pub fn submit_responses(
        &mut self,
        form: &FormId,
        responses: &[ClientResponse],
    ) -> Result<SubmitResponse, ApiError> {
        if self.store.form_owner(form)?.is_none() {
            return Err(not_found(form));
        }
        // Freshly reloaded: client-side question lists are never trusted for
        // option sets, scales, or the editable flag.
        let questions = self.aggregate(form)?;
        if responses.len() != questions.len() {
            return Err(ApiError::CountMismatch {
                expected: questions.len(),
                actual: responses.len(),
            });
        }

        let mut recorded = 0;
        let mut rejected = 0;
        for response in responses {
            let Some(question) = questions
                .iter()
                .find(|q| q.kind() == response.question_type && q.id() == response.question_id)
            else {
                tracing::warn!(
                    form = %form,
                    kind = %response.question_type,
                    id = %response.question_id,
                    "response references an unknown question, skipping"
                );
                rejected += 1;
                continue;
            };

            let answer = match validate_response(question, &response.response) {
                Ok(answer) => answer,
                Err(err) => {
                    tracing::warn!(
                        form = %form,
                        question = %question.question_ref(),
                        error = %err,
                        "response failed validation, skipping"
                    );
                    rejected += 1;
                    continue;
                }
            };

            let target = question.question_ref();
            if question.editable() {
                // Lock on first response, before the insert.
                if let Err(err) = self.store.lock_question(target) {
                    tracing::error!(
                        form = %form,
                        question = %target,
                        error = %err,
                        "failed to lock question on first response"
                    );
                }
            }
            match self.store.record_answer(form, target, &answer) {
                Ok(()) => recorded += 1,
                Err(err) => {
                    tracing::error!(
                        form = %form,
                        question = %target,
                        error = %err,
                        "failed to persist response"
                    );
                    rejected += 1;
                }
            }
        }
        Ok(SubmitResponse { recorded, rejected })
    }

    /// Number of response rows recorded against one question (test and
    /// operator visibility).
    pub fn response_count(&self, form: &FormId, target: QuestionRef) -> Result<i64, ApiError> {
        Ok(self.store.response_count(form, target)?)
    }
}

fn not_found(form: &FormId) -> ApiError {
    ApiError::NotFound(format!("form {form}"))
}

fn check_rating_levels(levels: u8) -> Result<(), ApiError> {
    if RATING_LEVEL_RANGE.contains(&levels) {
        Ok(())
    } else {
        Err(ApiError::BadRequest(format!(
            "rating levels must be between {} and {}, got {levels}",
            RATING_LEVEL_RANGE.start(),
            RATING_LEVEL_RANGE.end()
        )))
    }
}
