use serde::{Deserialize, Serialize};

use crate::domain::{QuestionList, QuestionListFilter};

pub(crate) const PROBLEMSET_QUESTION_LIST_QUERY: &str = r#"
query problemsetQuestionList($categorySlug: String, $limit: Int, $skip: Int, $filters: QuestionListFilterInput) {
  problemsetQuestionList: questionList(
    categorySlug: $categorySlug
    limit: $limit
    skip: $skip
    filters: $filters
  ) {
    totalNum
    data {
      title
      titleSlug
      difficulty
      content
      topicTags {
        name
        slug
      }
    }
  }
}"#;

#[derive(Debug, Serialize)]
pub(crate) struct GraphQLRequest<'a, V> {
    pub query: &'a str,
    pub variables: V,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QuestionListVariables<'a> {
    pub category_slug: &'a str,
    pub limit: u32,
    pub skip: u32,
    pub filters: QuestionListFilter,
}

/// Standard GraphQL response envelope. A non-empty `errors` list means the query failed,
/// even if some `data` came back.
#[derive(Debug, Deserialize)]
pub(crate) struct GraphQLResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQLErrorMessage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQLErrorMessage {
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QuestionListData {
    pub problemset_question_list: QuestionList,
}
