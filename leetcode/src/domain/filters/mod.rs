mod question_list_filter;
mod title_filter;

pub use question_list_filter::QuestionListFilter;
pub use title_filter::TitleFilter;

use super::{Problem, Question};

/// A predicate applied locally to questions after they have been fetched.
pub trait QuestionFilter {
    fn matches(&self, question: &Question) -> bool;
}

/// Keeps the questions accepted by `filter` and projects them into [`Problem`]s,
/// preserving upstream order.
pub fn filter_problems(
    questions: impl IntoIterator<Item = Question>,
    filter: &impl QuestionFilter,
) -> Vec<Problem> {
    questions
        .into_iter()
        .filter(|question| filter.matches(question))
        .map(Problem::from)
        .collect()
}
