use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tracing::instrument;

use crate::{domain::models::Problem, routes::ApiError, AppState};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(search))
}

#[derive(Debug, Serialize)]
struct SearchResponse {
    results: Vec<Problem>,
}

/// First value of `key`; later repeats are ignored.
fn first_param(params: Vec<(String, String)>, key: &str) -> Option<String> {
    params
        .into_iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value)
}

#[instrument(name = "GET /search", skip(app_state))]
async fn search(
    State(app_state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<SearchResponse>, ApiError> {
    let keyword = first_param(params, "q")
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ApiError::bad_request("Missing search query"))?;

    let results = app_state.catalog().search(&keyword).await?;
    tracing::debug!(count = results.len(), "Search completed");

    Ok(Json(SearchResponse { results }))
}
