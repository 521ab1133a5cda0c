use serde::Serialize;

/// One catalog entry as exposed by `GET /search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub title: String,
    pub title_slug: String,
    /// Passed through as received, usually `Easy`, `Medium` or `Hard`.
    pub difficulty: String,
    /// HTML body.
    pub content: String,
    pub tags: Vec<String>,
}
