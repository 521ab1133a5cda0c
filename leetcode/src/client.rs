use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::instrument;

use crate::{
    domain::{self, Problem, QuestionList, QuestionListFilter, TitleFilter},
    graphql::{
        GraphQLRequest, GraphQLResponse, QuestionListData, QuestionListVariables,
        PROBLEMSET_QUESTION_LIST_QUERY,
    },
    LeetCodeConfig,
};

#[derive(Debug, Clone)]
pub struct LeetCodeClient {
    http: reqwest::Client,
    config: LeetCodeConfig,
}

impl LeetCodeClient {
    pub fn new(config: LeetCodeConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    async fn query<V: Serialize, T: DeserializeOwned>(
        &self,
        query: &str,
        variables: V,
    ) -> Result<T, LeetCodeFetchError> {
        let resp = self
            .http
            .post(self.config.endpoint.as_str())
            .json(&GraphQLRequest { query, variables })
            .send()
            .await
            .map_err(|e| LeetCodeFetchError::ResponseError(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(LeetCodeFetchError::ResponseError(format!(
                "Unexpected status code: {}",
                status
            )));
        }

        let envelope = resp.json::<GraphQLResponse<T>>().await.map_err(|e| {
            LeetCodeFetchError::ParsingError(format!("Failed to parse response as JSON: {}", e))
        })?;

        if !envelope.errors.is_empty() {
            let messages: Vec<_> = envelope.errors.into_iter().map(|e| e.message).collect();
            return Err(LeetCodeFetchError::GraphQLError(messages.join("; ")));
        }

        envelope
            .data
            .ok_or_else(|| LeetCodeFetchError::GraphQLError("Response contained no data".into()))
    }

    /// Fetches the first page of questions matching `search_keywords` according to the
    /// catalog's own (fuzzy) search.
    #[instrument(skip(self), fields(endpoint = %self.config.endpoint))]
    pub async fn fetch_question_list(
        &self,
        search_keywords: &str,
    ) -> Result<QuestionList, LeetCodeFetchError> {
        let variables = QuestionListVariables {
            category_slug: &self.config.category_slug,
            limit: self.config.limit,
            skip: self.config.skip,
            filters: QuestionListFilter::new(search_keywords),
        };

        let data: QuestionListData = self
            .query(PROBLEMSET_QUESTION_LIST_QUERY, variables)
            .await?;

        tracing::debug!(
            total_num = data.problemset_question_list.total_num,
            returned = data.problemset_question_list.questions.len(),
            "Fetched question list"
        );

        Ok(data.problemset_question_list)
    }

    /// Searches the catalog and keeps only questions whose title contains `search`,
    /// ignoring case.
    pub async fn search_problems(&self, search: &str) -> Result<Vec<Problem>, LeetCodeFetchError> {
        let list = self.fetch_question_list(search).await?;
        Ok(domain::filter_problems(
            list.questions,
            &TitleFilter::new(search),
        ))
    }
}

#[derive(Error, Debug)]
pub enum LeetCodeFetchError {
    #[error("ResponseError: {0}")]
    ResponseError(String),
    #[error("ParsingError: {0}")]
    ParsingError(String),
    #[error("GraphQLError: {0}")]
    GraphQLError(String),
}
