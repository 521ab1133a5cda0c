mod conversions;

use async_trait::async_trait;

use crate::domain::{
    models::Problem,
    ports::outbound::{CatalogError, ProblemCatalog},
};

use self::conversions::{to_catalog_error, to_domain_problem};

/// Adapter that wraps the LeetCode client to implement the ProblemCatalog port.
pub struct LeetCodeAdapter {
    client: leetcode::LeetCodeClient,
}

impl LeetCodeAdapter {
    pub fn new(client: leetcode::LeetCodeClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProblemCatalog for LeetCodeAdapter {
    async fn search(&self, keyword: &str) -> Result<Vec<Problem>, CatalogError> {
        let problems = self
            .client
            .search_problems(keyword)
            .await
            .map_err(to_catalog_error)?;

        Ok(problems.into_iter().map(to_domain_problem).collect())
    }
}
