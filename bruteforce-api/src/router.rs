use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, TraceLayer};
use tracing::Level;

use crate::{
    app_state::AppState,
    config::Settings,
    cors::{self, OriginPolicy},
    domain::ports::outbound::ProblemCatalog,
    routes,
};

pub fn create(catalog: Arc<dyn ProblemCatalog>, config: &Settings) -> Router<()> {
    let app_state = AppState::new(catalog);
    let origin_policy = OriginPolicy::from(&config.cors);

    Router::new()
        .route("/", get(|| async { "bruteforce-api is running" }))
        .nest("/search", routes::search::router())
        .with_state(app_state)
        .layer(middleware::from_fn_with_state(
            origin_policy,
            cors::origin_policy,
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default())
                // Failed searches are already logged once by `ApiError`.
                .on_failure(DefaultOnFailure::new().level(Level::DEBUG)),
        )
}
