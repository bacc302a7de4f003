//! Core error types for formlet-core.
//!
//! [`ValidationError`] covers every way a client-submitted response payload
//! can fail against its owning question. These are per-response failures:
//! the submission pipeline logs and skips them rather than aborting the
//! batch.

use thiserror::Error;

use crate::id::{OptionId, QuestionId, QuestionKind};

/// A response payload failed validation against its owning question.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The JSON payload has the wrong shape for the question's variant.
    #[error("payload shape mismatch: expected a {expected} payload")]
    PayloadShape { expected: QuestionKind },

    /// A choice response named an option outside the question's option set.
    #[error("option {option} does not belong to choice question {question}")]
    UnknownOption { question: QuestionId, option: OptionId },

    /// A rating response fell outside the question's scale.
    #[error("rating {value} is outside 0..={levels}")]
    RatingOutOfRange { value: i64, levels: u8 },

    /// A date response did not parse as a calendar date.
    #[error("invalid calendar date: '{value}'")]
    InvalidDate { value: String },

    /// A ranking response was not a permutation of the question's options.
    #[error("ranking for question {question} is not a permutation of its rank options")]
    NotAPermutation { question: QuestionId },
}

/// A string did not name one of the five question variants.
#[derive(Debug, Error)]
#[error("unknown question type: '{0}'")]
pub struct UnknownQuestionKind(pub String);
