//! The polymorphic question model.
//!
//! Each of the five variants is stored in its own table and carries its own
//! payload; [`Question`] is the tagged union the editor and completion
//! surfaces consume. On the wire it serializes as `{"type": ..., "data":
//! ...}`, with the variant tag naming which id space `data.id` belongs to.

use serde::{Deserialize, Serialize};

use crate::id::{OptionId, QuestionId, QuestionKind, QuestionRef, RankOptionId};

/// Rating scale used when a create request does not specify one.
pub const DEFAULT_RATING_LEVELS: u8 = 5;

/// An option belonging to a choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub id: OptionId,
    #[serde(rename = "option")]
    pub text: String,
    pub order_index: i64,
}

/// An orderable option belonging to a ranking question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankOption {
    pub id: RankOptionId,
    #[serde(rename = "option")]
    pub text: String,
    pub order_index: i64,
}

/// A choice question: pick one option from an ordered set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceQuestion {
    pub id: QuestionId,
    #[serde(rename = "questionText")]
    pub text: String,
    pub options: Vec<ChoiceOption>,
    pub order_index: i64,
    pub required: bool,
    pub editable: bool,
}

/// A free-text question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextQuestion {
    pub id: QuestionId,
    #[serde(rename = "questionText")]
    pub text: String,
    pub order_index: i64,
    pub required: bool,
    pub editable: bool,
}

/// A rating question on an integer scale of `levels` steps (2..=10).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingQuestion {
    pub id: QuestionId,
    #[serde(rename = "questionText")]
    pub text: String,
    #[serde(rename = "ratingsLevel")]
    pub levels: u8,
    pub order_index: i64,
    pub required: bool,
    pub editable: bool,
}

/// A calendar-date question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateQuestion {
    pub id: QuestionId,
    #[serde(rename = "questionText")]
    pub text: String,
    pub order_index: i64,
    pub required: bool,
    pub editable: bool,
}

/// A ranking question: order every rank option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingQuestion {
    pub id: QuestionId,
    #[serde(rename = "questionText")]
    pub text: String,
    #[serde(rename = "rankOptions")]
    pub options: Vec<RankOption>,
    pub order_index: i64,
    pub required: bool,
    pub editable: bool,
}

/// The tagged union over the five question variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Question {
    Choice(ChoiceQuestion),
    Text(TextQuestion),
    Rating(RatingQuestion),
    Date(DateQuestion),
    Ranking(RankingQuestion),
}

impl Question {
    pub fn kind(&self) -> QuestionKind {
        match self {
            Question::Choice(_) => QuestionKind::Choice,
            Question::Text(_) => QuestionKind::Text,
            Question::Rating(_) => QuestionKind::Rating,
            Question::Date(_) => QuestionKind::Date,
            Question::Ranking(_) => QuestionKind::Ranking,
        }
    }

    pub fn id(&self) -> QuestionId {
        match self {
            Question::Choice(q) => q.id,
            Question::Text(q) => q.id,
            Question::Rating(q) => q.id,
            Question::Date(q) => q.id,
            Question::Ranking(q) => q.id,
        }
    }

    /// The cross-variant reference addressing this question.
    pub fn question_ref(&self) -> QuestionRef {
        QuestionRef::new(self.kind(), self.id())
    }

    pub fn text(&self) -> &str {
        match self {
            Question::Choice(q) => &q.text,
            Question::Text(q) => &q.text,
            Question::Rating(q) => &q.text,
            Question::Date(q) => &q.text,
            Question::Ranking(q) => &q.text,
        }
    }

    /// Position of this question among all of its form's questions.
    ///
    /// `-1` is the unassigned sentinel; real indices are assigned at write
    /// time (creation appends, reordering renumbers to 0..N-1).
    pub fn order_index(&self) -> i64 {
        match self {
            Question::Choice(q) => q.order_index,
            Question::Text(q) => q.order_index,
            Question::Rating(q) => q.order_index,
            Question::Date(q) => q.order_index,
            Question::Ranking(q) => q.order_index,
        }
    }

    pub fn set_order_index(&mut self, order_index: i64) {
        match self {
            Question::Choice(q) => q.order_index = order_index,
            Question::Text(q) => q.order_index = order_index,
            Question::Rating(q) => q.order_index = order_index,
            Question::Date(q) => q.order_index = order_index,
            Question::Ranking(q) => q.order_index = order_index,
        }
    }

    pub fn required(&self) -> bool {
        match self {
            Question::Choice(q) => q.required,
            Question::Text(q) => q.required,
            Question::Rating(q) => q.required,
            Question::Date(q) => q.required,
            Question::Ranking(q) => q.required,
        }
    }

    /// Whether the question can still be edited. Flips to false permanently
    /// once any response is recorded against it.
    pub fn editable(&self) -> bool {
        match self {
            Question::Choice(q) => q.editable,
            Question::Text(q) => q.editable,
            Question::Rating(q) => q.editable,
            Question::Date(q) => q.editable,
            Question::Ranking(q) => q.editable,
        }
    }
}
