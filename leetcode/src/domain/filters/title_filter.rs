use super::QuestionFilter;
use crate::domain::Question;

/// Case-insensitive substring match on the question title.
pub struct TitleFilter {
    needle: String,
}

impl TitleFilter {
    pub fn new(search: &str) -> Self {
        Self {
            needle: search.to_lowercase(),
        }
    }
}

impl QuestionFilter for TitleFilter {
    fn matches(&self, question: &Question) -> bool {
        question.title.to_lowercase().contains(&self.needle)
    }
}
