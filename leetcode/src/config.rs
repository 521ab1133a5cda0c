use serde::Deserialize;

pub const DEFAULT_ENDPOINT: &str = "https://leetcode.com/graphql";
pub const DEFAULT_CATEGORY_SLUG: &str = "all-code-essentials";
pub const DEFAULT_LIMIT: u32 = 100;
pub const DEFAULT_SKIP: u32 = 0;

/// Where and how the question list is fetched. Only the first page (`skip`, `limit`)
/// is ever requested.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LeetCodeConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_category_slug")]
    pub category_slug: String,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub skip: u32,
}

impl Default for LeetCodeConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            category_slug: default_category_slug(),
            limit: DEFAULT_LIMIT,
            skip: DEFAULT_SKIP,
        }
    }
}

impl LeetCodeConfig {
    /// Default settings pointed at a different GraphQL endpoint.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_category_slug() -> String {
    DEFAULT_CATEGORY_SLUG.to_string()
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}
