//! The [`FormStore`] trait defining the storage contract.
//!
//! Two kinds of methods, mirroring how the system addresses questions:
//! - **Per-variant CRUD** (fetch/insert/update per question kind, plus
//!   option add/remove for the two option-bearing kinds). Each variant owns
//!   its table, so these cannot be collapsed without erasing the payload
//!   types.
//! - **Cross-variant dispatch** keyed by [`QuestionRef`]
//!   (`set_question_order`, `delete_question`, `lock_question`,
//!   `record_answer`): one entry point that routes to the owning table.
//!
//! Not-found and not-authorized outcomes are reported as `false`/`None`,
//! never distinguished from each other. Mutating operations that take an
//! `owner_id` re-verify form ownership inside the statement itself; the
//! caller's earlier checks are not trusted across statements.
//!
//! The trait is synchronous; the service layer owns the async boundary.

use formlet_core::question::{
    ChoiceOption, ChoiceQuestion, DateQuestion, RankOption, RankingQuestion, RatingQuestion,
    TextQuestion,
};
use formlet_core::response::Answer;
use formlet_core::{OptionId, QuestionId, QuestionRef, RankOptionId};

use crate::error::StorageError;
use crate::types::{FormId, FormSummary};

/// The storage contract for forms, questions, and responses.
pub trait FormStore {
    // -------------------------------------------------------------------
    // Form lifecycle
    // -------------------------------------------------------------------

    /// Creates a new form owned by `owner_id`, returning its assigned id.
    fn create_form(&mut self, name: &str, owner_id: &str) -> Result<FormId, StorageError>;

    /// Renames a form. Returns `false` when the form is missing or not owned
    /// by `owner_id`.
    fn rename_form(
        &mut self,
        form: &FormId,
        owner_id: &str,
        name: &str,
    ) -> Result<bool, StorageError>;

    /// Deletes a form and, via cascade, all its questions, options, and
    /// responses. Returns `false` when missing or not owned.
    fn delete_form(&mut self, form: &FormId, owner_id: &str) -> Result<bool, StorageError>;

    /// Lists all forms owned by `owner_id`.
    fn list_forms(&self, owner_id: &str) -> Result<Vec<FormSummary>, StorageError>;

    /// Returns the form's name, or `None` if it does not exist.
    fn form_name(&self, form: &FormId) -> Result<Option<String>, StorageError>;

    /// Returns the form's owner id, or `None` if it does not exist.
    fn form_owner(&self, form: &FormId) -> Result<Option<String>, StorageError>;

    /// The ownership primitive: does `requestor_id` own `form`?
    fn is_owner(&self, form: &FormId, requestor_id: &str) -> Result<bool, StorageError>;

    // -------------------------------------------------------------------
    // Per-variant collections (options nested, questions ordered by id)
    // -------------------------------------------------------------------

    fn choice_questions(&self, form: &FormId) -> Result<Vec<ChoiceQuestion>, StorageError>;
    fn text_questions(&self, form: &FormId) -> Result<Vec<TextQuestion>, StorageError>;
    fn rating_questions(&self, form: &FormId) -> Result<Vec<RatingQuestion>, StorageError>;
    fn date_questions(&self, form: &FormId) -> Result<Vec<DateQuestion>, StorageError>;
    fn ranking_questions(&self, form: &FormId) -> Result<Vec<RankingQuestion>, StorageError>;

    /// Total question count across all five variants of a form. New
    /// questions append at this index.
    fn question_count(&self, form: &FormId) -> Result<i64, StorageError>;

    // -------------------------------------------------------------------
    // Question creation (question + options in one transaction)
    // -------------------------------------------------------------------

    fn insert_choice_question(
        &mut self,
        form: &FormId,
        text: &str,
        options: &[String],
        order_index: i64,
    ) -> Result<ChoiceQuestion, StorageError>;

    fn insert_text_question(
        &mut self,
        form: &FormId,
        text: &str,
        order_index: i64,
    ) -> Result<TextQuestion, StorageError>;

    fn insert_rating_question(
        &mut self,
        form: &FormId,
        text: &str,
        levels: u8,
        order_index: i64,
    ) -> Result<RatingQuestion, StorageError>;

    fn insert_date_question(
        &mut self,
        form: &FormId,
        text: &str,
        order_index: i64,
    ) -> Result<DateQuestion, StorageError>;

    fn insert_ranking_question(
        &mut self,
        form: &FormId,
        text: &str,
        options: &[String],
        order_index: i64,
    ) -> Result<RankingQuestion, StorageError>;

    // -------------------------------------------------------------------
    // Question update (text/payload/index; options updated by id)
    // -------------------------------------------------------------------

    fn update_choice_question(
        &mut self,
        form: &FormId,
        owner_id: &str,
        id: QuestionId,
        text: &str,
        options: &[ChoiceOption],
        order_index: i64,
    ) -> Result<bool, StorageError>;

    fn update_text_question(
        &mut self,
        form: &FormId,
        owner_id: &str,
        id: QuestionId,
        text: &str,
        order_index: i64,
    ) -> Result<bool, StorageError>;

    fn update_rating_question(
        &mut self,
        form: &FormId,
        owner_id: &str,
        id: QuestionId,
        text: &str,
        levels: u8,
        order_index: i64,
    ) -> Result<bool, StorageError>;

    fn update_date_question(
        &mut self,
        form: &FormId,
        owner_id: &str,
        id: QuestionId,
        text: &str,
        order_index: i64,
    ) -> Result<bool, StorageError>;

    fn update_ranking_question(
        &mut self,
        form: &FormId,
        owner_id: &str,
        id: QuestionId,
        text: &str,
        options: &[RankOption],
        order_index: i64,
    ) -> Result<bool, StorageError>;

    // -------------------------------------------------------------------
    // Option add/remove for the option-bearing variants
    // -------------------------------------------------------------------

    /// Adds an option to a choice question. `None` when the question is
    /// missing or its form is not owned by `owner_id`.
    fn insert_choice_option(
        &mut self,
        form: &FormId,
        owner_id: &str,
        question: QuestionId,
        text: &str,
        order_index: i64,
    ) -> Result<Option<ChoiceOption>, StorageError>;

    fn delete_choice_option(
        &mut self,
        form: &FormId,
        owner_id: &str,
        option: OptionId,
    ) -> Result<bool, StorageError>;

    fn insert_ranking_option(
        &mut self,
        form: &FormId,
        owner_id: &str,
        question: QuestionId,
        text: &str,
        order_index: i64,
    ) -> Result<Option<RankOption>, StorageError>;

    fn delete_ranking_option(
        &mut self,
        form: &FormId,
        owner_id: &str,
        option: RankOptionId,
    ) -> Result<bool, StorageError>;

    // -------------------------------------------------------------------
    // Cross-variant dispatch
    // -------------------------------------------------------------------

    /// Sets one question's order index, re-verifying in the same statement
    /// that the question belongs to `form` and `form` to `owner_id`.
    /// Returns `false` when that check fails or the row is gone.
    fn set_question_order(
        &mut self,
        form: &FormId,
        owner_id: &str,
        target: QuestionRef,
        order_index: i64,
    ) -> Result<bool, StorageError>;

    /// Deletes a question of any variant (options cascade).
    fn delete_question(
        &mut self,
        form: &FormId,
        owner_id: &str,
        target: QuestionRef,
    ) -> Result<bool, StorageError>;

    /// Permanently clears a question's editable flag. Unauthorized by
    /// design: the respondent path triggers this on first response.
    fn lock_question(&mut self, target: QuestionRef) -> Result<(), StorageError>;

    /// Persists one validated answer as an immutable response row. Ranking
    /// answers write the group row and per-position sub-rows in one
    /// transaction.
    fn record_answer(
        &mut self,
        form: &FormId,
        target: QuestionRef,
        answer: &Answer,
    ) -> Result<(), StorageError>;

    /// Number of response rows recorded against one question.
    fn response_count(&self, form: &FormId, target: QuestionRef) -> Result<i64, StorageError>;
}
