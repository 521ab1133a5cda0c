use serde::{Deserialize, Serialize};

use super::Question;

/// The simplified, public view of a catalog question.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub title: String,
    pub title_slug: String,
    pub difficulty: String,
    pub content: String,
    pub tags: Vec<String>,
}

impl From<Question> for Problem {
    fn from(question: Question) -> Self {
        Self {
            title: question.title,
            title_slug: question.title_slug,
            difficulty: question.difficulty,
            content: question.content.unwrap_or_default(),
            tags: question.topic_tags.into_iter().map(|tag| tag.name).collect(),
        }
    }
}
