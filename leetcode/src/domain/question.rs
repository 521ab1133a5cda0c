use serde::{Deserialize, Deserializer, Serialize};

/// A question as returned by the `problemsetQuestionList` query.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub title: String,
    pub title_slug: String,
    pub difficulty: String,
    /// HTML body. `null` for paid-only questions.
    pub content: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub topic_tags: Vec<TopicTag>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicTag {
    pub name: String,
    pub slug: String,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionList {
    pub total_num: i64,
    #[serde(rename = "data", default, deserialize_with = "null_as_empty")]
    pub questions: Vec<Question>,
}

/// Upstream sends `null` instead of `[]` for some empty lists.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
