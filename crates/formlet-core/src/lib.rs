pub mod error;
pub mod id;
pub mod ordering;
pub mod question;
pub mod response;

// Re-export commonly used types
pub use error::{UnknownQuestionKind, ValidationError};
pub use id::{OptionId, QuestionId, QuestionKind, QuestionRef, RankOptionId};
pub use ordering::{merge_questions, reorder_plan, OrderUpdate};
pub use question::{
    ChoiceOption, ChoiceQuestion, DateQuestion, Question, RankOption, RankingQuestion,
    RatingQuestion, TextQuestion, DEFAULT_RATING_LEVELS,
};
pub use response::{encode_date, validate_response, Answer, ClientResponse};
