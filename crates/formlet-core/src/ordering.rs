//! Order-index merging and reconciliation planning.
//!
//! Five independently-keyed collections are merged into one sequence sorted
//! by order index; [`reorder_plan`] then computes the minimal set of
//! per-question index updates needed to realize a desired ordering.
//!
//! Tiebreak: [`merge_questions`] concatenates the collections in the fixed
//! order Choice, Text, Rating, Date, Ranking — each fetched ordered by
//! question id ascending — and sorts stably, so questions sharing an order
//! index (e.g. the `-1` sentinel before first reconciliation) keep that
//! concatenation order.

use std::collections::HashMap;

use crate::id::QuestionRef;
use crate::question::{
    ChoiceQuestion, DateQuestion, Question, RankingQuestion, RatingQuestion, TextQuestion,
};

/// A single per-question index update produced by [`reorder_plan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderUpdate {
    /// The question whose stored index must change.
    pub target: QuestionRef,
    /// The index it should move to.
    pub new_index: i64,
}

/// Merges the five per-variant collections into one sequence sorted by order
/// index ascending.
///
/// Read-only with respect to indices: sentinel `-1` values are NOT rewritten
/// here — index assignment happens at write time, in the reconciler and the
/// creation path.
pub fn merge_questions(
    choices: Vec<ChoiceQuestion>,
    texts: Vec<TextQuestion>,
    ratings: Vec<RatingQuestion>,
    dates: Vec<DateQuestion>,
    rankings: Vec<RankingQuestion>,
) -> Vec<Question> {
    let mut questions = Vec::with_capacity(
        choices.len() + texts.len() + ratings.len() + dates.len() + rankings.len(),
    );
    questions.extend(choices.into_iter().map(Question::Choice));
    questions.extend(texts.into_iter().map(Question::Text));
    questions.extend(ratings.into_iter().map(Question::Rating));
    questions.extend(dates.into_iter().map(Question::Date));
    questions.extend(rankings.into_iter().map(Question::Ranking));
    // Stable sort: ties keep the concatenation order above.
    questions.sort_by_key(Question::order_index);
    questions
}

/// Computes the per-question updates needed so that the question at
/// `desired[i]` ends up with stored order index `i`.
///
/// Questions already at the correct index are skipped. Refs absent from
/// `current` are still emitted — their stored index is unknowable here, and
/// attempting the update lets the store reject them so stale client
/// orderings surface as reported failures instead of silent drops.
pub fn reorder_plan(current: &[Question], desired: &[QuestionRef]) -> Vec<OrderUpdate> {
    let stored: HashMap<QuestionRef, i64> = current
        .iter()
        .map(|q| (q.question_ref(), q.order_index()))
        .collect();
    desired
        .iter()
        .enumerate()
        .filter_map(|(position, target)| {
            let new_index = position as i64;
            match stored.get(target) {
                Some(&index) if index == new_index => None,
                _ => Some(OrderUpdate { target: *target, new_index }),
            }
        })
        .collect()
}
