//! Question CRUD request/response types.
//!
//! Create and update bodies are tagged unions mirroring the question wire
//! shape (`{"type": ..., "data": ...}`); the update body's tag must agree
//! with the `{kind}` path segment it is sent to.

use serde::{Deserialize, Serialize};

use formlet_core::question::{ChoiceOption, Question, RankOption};
use formlet_core::QuestionKind;

/// Request to create a question. Ranking/Choice carry their initial option
/// texts; options are ordered as given. The server assigns the order index
/// (append semantics).
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum CreateQuestionRequest {
    Choice {
        #[serde(rename = "questionText")]
        question_text: String,
        options: Vec<String>,
    },
    Text {
        #[serde(rename = "questionText")]
        question_text: String,
    },
    Rating {
        #[serde(rename = "questionText")]
        question_text: String,
        /// Scale steps, 2..=10. Defaults to 5 when omitted.
        #[serde(rename = "ratingsLevel", default)]
        levels: Option<u8>,
    },
    Date {
        #[serde(rename = "questionText")]
        question_text: String,
    },
    Ranking {
        #[serde(rename = "questionText")]
        question_text: String,
        options: Vec<String>,
    },
}

/// Request to update a question's text, payload, and order index. Options
/// are matched by id; adding/removing options goes through the dedicated
/// option endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum UpdateQuestionRequest {
    Choice {
        #[serde(rename = "questionText")]
        question_text: String,
        options: Vec<ChoiceOption>,
        order_index: i64,
    },
    Text {
        #[serde(rename = "questionText")]
        question_text: String,
        order_index: i64,
    },
    Rating {
        #[serde(rename = "questionText")]
        question_text: String,
        #[serde(rename = "ratingsLevel")]
        levels: u8,
        order_index: i64,
    },
    Date {
        #[serde(rename = "questionText")]
        question_text: String,
        order_index: i64,
    },
    Ranking {
        #[serde(rename = "questionText")]
        question_text: String,
        options: Vec<RankOption>,
        order_index: i64,
    },
}

impl UpdateQuestionRequest {
    /// The variant this update body addresses.
    pub fn kind(&self) -> QuestionKind {
        match self {
            UpdateQuestionRequest::Choice { .. } => QuestionKind::Choice,
            UpdateQuestionRequest::Text { .. } => QuestionKind::Text,
            UpdateQuestionRequest::Rating { .. } => QuestionKind::Rating,
            UpdateQuestionRequest::Date { .. } => QuestionKind::Date,
            UpdateQuestionRequest::Ranking { .. } => QuestionKind::Ranking,
        }
    }
}

/// The aggregated, order-sorted question list for a form.
#[derive(Debug, Clone, Serialize)]
pub struct LoadFormResponse {
    #[serde(rename = "formName")]
    pub form_name: String,
    pub questions: Vec<Question>,
}

/// Request to add an option to a Choice or Ranking question.
#[derive(Debug, Clone, Deserialize)]
pub struct AddOptionRequest {
    /// The option text.
    pub option: String,
    /// Position among the question's options.
    pub order_index: i64,
}

/// The created option, in the owning variant's option shape.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum CreatedOption {
    Choice(ChoiceOption),
    Ranking(RankOption),
}
