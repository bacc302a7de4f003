//! Client response payloads and per-variant validation.
//!
//! A [`ClientResponse`] arrives with an untyped JSON payload; the submission
//! pipeline resolves the owning question and calls [`validate_response`],
//! which either produces a typed [`Answer`] ready to persist or a
//! [`ValidationError`] describing why the payload was rejected.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::Date;

use crate::error::ValidationError;
use crate::id::{OptionId, QuestionId, QuestionKind, RankOptionId};
use crate::question::Question;

/// Calendar dates travel and persist as `YYYY-MM-DD`.
const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// One client-submitted answer, addressed by variant tag and question id.
///
/// The payload stays untyped until validated: a malformed payload must skip
/// only this response, not fail deserialization of the whole batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientResponse {
    #[serde(rename = "questionType")]
    pub question_type: QuestionKind,
    #[serde(rename = "questionId")]
    pub question_id: QuestionId,
    pub response: Value,
}

/// A validated, typed answer ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// The selected option id.
    Choice(OptionId),
    /// Free text, possibly empty.
    Text(String),
    /// A value on the question's scale.
    Rating(i64),
    /// A parsed calendar date.
    Date(Date),
    /// The submitted ordering of the question's rank options.
    Ranking(Vec<RankOptionId>),
}

/// Formats a date the way it is stored and served.
pub fn encode_date(date: &Date) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
}

/// Validates `payload` against the owning question's variant and payload
/// constraints.
///
/// - Choice: the option id must belong to the question's option set.
/// - Text: any string (the `required` flag is stored but not enforced).
/// - Rating: an integer in `[0, levels]`.
/// - Date: must parse as `YYYY-MM-DD`.
/// - Ranking: exactly a permutation of the question's rank option ids.
pub fn validate_response(question: &Question, payload: &Value) -> Result<Answer, ValidationError> {
    match question {
        Question::Choice(q) => {
            let option = payload
                .as_i64()
                .map(OptionId)
                .ok_or(ValidationError::PayloadShape { expected: QuestionKind::Choice })?;
            if q.options.iter().any(|o| o.id == option) {
                Ok(Answer::Choice(option))
            } else {
                Err(ValidationError::UnknownOption { question: q.id, option })
            }
        }
        Question::Text(_) => payload
            .as_str()
            .map(|s| Answer::Text(s.to_string()))
            .ok_or(ValidationError::PayloadShape { expected: QuestionKind::Text }),
        Question::Rating(q) => {
            let value = payload
                .as_i64()
                .ok_or(ValidationError::PayloadShape { expected: QuestionKind::Rating })?;
            if (0..=i64::from(q.levels)).contains(&value) {
                Ok(Answer::Rating(value))
            } else {
                Err(ValidationError::RatingOutOfRange { value, levels: q.levels })
            }
        }
        Question::Date(_) => {
            let raw = payload
                .as_str()
                .ok_or(ValidationError::PayloadShape { expected: QuestionKind::Date })?;
            Date::parse(raw, DATE_FORMAT)
                .map(Answer::Date)
                .map_err(|_| ValidationError::InvalidDate { value: raw.to_string() })
        }
        Question::Ranking(q) => {
            let entries = payload
                .as_array()
                .ok_or(ValidationError::PayloadShape { expected: QuestionKind::Ranking })?;
            let submitted: Vec<RankOptionId> = entries
                .iter()
                .map(|entry| {
                    entry
                        .as_i64()
                        .map(RankOptionId)
                        .ok_or(ValidationError::PayloadShape { expected: QuestionKind::Ranking })
                })
                .collect::<Result<_, _>>()?;

            let mut submitted_ids: Vec<i64> = submitted.iter().map(|o| o.0).collect();
            let mut expected_ids: Vec<i64> = q.options.iter().map(|o| o.id.0).collect();
            submitted_ids.sort_unstable();
            expected_ids.sort_unstable();
            if submitted_ids == expected_ids {
                Ok(Answer::Ranking(submitted))
            } else {
                Err(ValidationError::NotAPermutation { question: q.id })
            }
        }
    }
}
