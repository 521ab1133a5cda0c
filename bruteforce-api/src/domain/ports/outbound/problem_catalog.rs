use async_trait::async_trait;

use crate::domain::models::Problem;

/// Any failure while talking to the catalog or decoding its answer.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog request failed: {0}")]
    Transport(String),
}

/// Outbound port for the problem catalog.
///
/// Implementations return every problem whose title contains `keyword`, ignoring case,
/// in the order the catalog returned them.
#[async_trait]
pub trait ProblemCatalog: Send + Sync + 'static {
    async fn search(&self, keyword: &str) -> Result<Vec<Problem>, CatalogError>;
}
