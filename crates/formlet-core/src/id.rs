//! Identifier newtypes and the question variant tag.
//!
//! Question ids are scoped to their own variant's table: a `QuestionId` is
//! only meaningful together with a [`QuestionKind`], which is why the two are
//! bundled into [`QuestionRef`] everywhere a question is addressed across
//! variant boundaries. The newtypes keep a choice option id from being used
//! where a ranking option id is expected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownQuestionKind;

/// Identifier of a question within its own variant's id space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuestionId(pub i64);

/// Identifier of an option belonging to a choice question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OptionId(pub i64);

/// Identifier of a rank option belonging to a ranking question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RankOptionId(pub i64);

/// Discriminator for the five question variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionKind {
    Choice,
    Text,
    Rating,
    Date,
    Ranking,
}

impl QuestionKind {
    /// The canonical tag string, as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::Choice => "Choice",
            QuestionKind::Text => "Text",
            QuestionKind::Rating => "Rating",
            QuestionKind::Date => "Date",
            QuestionKind::Ranking => "Ranking",
        }
    }
}

impl FromStr for QuestionKind {
    type Err = UnknownQuestionKind;

    /// Accepts both the wire tag (`"Choice"`) and its lowercase form
    /// (`"choice"`, as used in URL paths).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Choice" | "choice" => Ok(QuestionKind::Choice),
            "Text" | "text" => Ok(QuestionKind::Text),
            "Rating" | "rating" => Ok(QuestionKind::Rating),
            "Date" | "date" => Ok(QuestionKind::Date),
            "Ranking" | "ranking" => Ok(QuestionKind::Ranking),
            other => Err(UnknownQuestionKind(other.to_string())),
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A cross-variant reference to a question: variant tag plus per-variant id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuestionRef {
    /// Which variant's id space `id` belongs to.
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    /// The question id within that variant's table.
    pub id: QuestionId,
}

impl QuestionRef {
    pub fn new(kind: QuestionKind, id: QuestionId) -> Self {
        QuestionRef { kind, id }
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for RankOptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for QuestionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_str() {
        for kind in [
            QuestionKind::Choice,
            QuestionKind::Text,
            QuestionKind::Rating,
            QuestionKind::Date,
            QuestionKind::Ranking,
        ] {
            assert_eq!(kind.as_str().parse::<QuestionKind>().unwrap(), kind);
        }
    }

    #[test]
    fn kind_parses_lowercase_path_form() {
        assert_eq!("ranking".parse::<QuestionKind>().unwrap(), QuestionKind::Ranking);
    }

    #[test]
    fn unknown_kind_is_an_error() {
        let err = "Checkbox".parse::<QuestionKind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown question type: 'Checkbox'");
    }

    #[test]
    fn question_ref_serde_shape() {
        let r = QuestionRef::new(QuestionKind::Rating, QuestionId(7));
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "Rating", "id": 7 }));
        let back: QuestionRef = serde_json::from_value(json).unwrap();
        assert_eq!(back, r);
    }

    #[test]
    fn ids_with_equal_values_are_distinct_types() {
        // Compile-time guarantee; the values themselves are independent.
        let option = OptionId(3);
        let rank_option = RankOptionId(3);
        assert_eq!(option.0, rank_option.0);
    }

    #[test]
    fn question_ref_display() {
        let r = QuestionRef::new(QuestionKind::Date, QuestionId(12));
        assert_eq!(format!("{}", r), "Date/12");
    }
}
