use serde::Serialize;

/// The `filters` variable of the `problemsetQuestionList` query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionListFilter {
    pub search_keywords: String,
}

impl QuestionListFilter {
    pub fn new(search_keywords: impl Into<String>) -> Self {
        Self {
            search_keywords: search_keywords.into(),
        }
    }
}
