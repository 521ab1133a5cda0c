use axum::http::StatusCode;
use serde_json::{json, Value};

use super::helpers::{app_with, assert_status, get, problem, read_json, ErrorCounter, StubCatalog};
use tracing_subscriber::layer::SubscriberExt;

#[tokio::test]
async fn missing_query_is_rejected_without_upstream_call() {
    let catalog = StubCatalog::returning(vec![]);
    let app = app_with(catalog.clone());

    let response = get(&app, "/search", None).await;

    assert_status(&response, StatusCode::BAD_REQUEST);
    let body: Value = read_json(response).await;
    assert_eq!(body, json!({ "error": "Missing search query" }));
    assert!(catalog.calls().is_empty());
}

#[tokio::test]
async fn empty_query_is_rejected_without_upstream_call() {
    let catalog = StubCatalog::returning(vec![]);
    let app = app_with(catalog.clone());

    for uri in ["/search?q=", "/search?q", "/search?other=two"] {
        let response = get(&app, uri, None).await;

        assert_status(&response, StatusCode::BAD_REQUEST);
        let body: Value = read_json(response).await;
        assert_eq!(body["error"], "Missing search query", "for {uri}");
    }
    assert!(catalog.calls().is_empty());
}

#[tokio::test]
async fn results_are_wrapped_in_results_array() {
    let catalog = StubCatalog::returning(vec![
        problem("Two Sum", "two-sum", "Easy", &["Array", "Hash Table"]),
        problem(
            "Add Two Numbers",
            "add-two-numbers",
            "Medium",
            &["Linked List", "Math", "Recursion"],
        ),
    ]);
    let app = app_with(catalog.clone());

    let response = get(&app, "/search?q=two", None).await;

    assert_status(&response, StatusCode::OK);
    let body: Value = read_json(response).await;
    assert_eq!(
        body["results"][0],
        json!({
            "title": "Two Sum",
            "titleSlug": "two-sum",
            "difficulty": "Easy",
            "content": "<p>Two Sum</p>",
            "tags": ["Array", "Hash Table"]
        })
    );
    assert_eq!(body["results"][1]["titleSlug"], "add-two-numbers");
    assert_eq!(catalog.calls(), vec!["two"]);
}

#[tokio::test]
async fn repeated_query_uses_first_value() {
    let catalog = StubCatalog::returning(vec![problem("Two Sum", "two-sum", "Easy", &["Array"])]);
    let app = app_with(catalog.clone());

    let response = get(&app, "/search?q=two&q=sum", None).await;

    assert_status(&response, StatusCode::OK);
    let body: Value = read_json(response).await;
    assert_eq!(body["results"][0]["titleSlug"], "two-sum");
    assert_eq!(catalog.calls(), vec!["two"]);
}

#[tokio::test]
async fn repeated_query_with_empty_first_value_is_rejected() {
    let catalog = StubCatalog::returning(vec![]);
    let app = app_with(catalog.clone());

    let response = get(&app, "/search?q=&q=two", None).await;

    assert_status(&response, StatusCode::BAD_REQUEST);
    let body: Value = read_json(response).await;
    assert_eq!(body, json!({ "error": "Missing search query" }));
    assert!(catalog.calls().is_empty());
}

#[tokio::test]
async fn query_is_url_decoded() {
    let catalog = StubCatalog::returning(vec![]);
    let app = app_with(catalog.clone());

    let response = get(&app, "/search?q=two%20sum", None).await;

    assert_status(&response, StatusCode::OK);
    assert_eq!(catalog.calls(), vec!["two sum"]);
}

#[tokio::test]
async fn no_matches_gives_empty_array() {
    let app = app_with(StubCatalog::returning(vec![]));

    let response = get(&app, "/search?q=zzz", None).await;

    assert_status(&response, StatusCode::OK);
    let body: Value = read_json(response).await;
    assert_eq!(body, json!({ "results": [] }));
}

#[tokio::test]
async fn upstream_failure_is_generic_and_logged_once() {
    let counter = ErrorCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    let _guard = tracing::subscriber::set_default(subscriber);

    let app = app_with(StubCatalog::failing(
        "ResponseError: connection refused (leetcode.com:443)",
    ));

    let response = get(&app, "/search?q=two", None).await;

    assert_status(&response, StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = read_json(response).await;
    assert_eq!(body, json!({ "error": "Failed to fetch problems" }));
    assert_eq!(counter.count(), 1);
}

#[tokio::test]
async fn root_answers_liveness() {
    let app = app_with(StubCatalog::returning(vec![]));

    let response = get(&app, "/", None).await;

    assert_status(&response, StatusCode::OK);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = app_with(StubCatalog::returning(vec![]));

    let response = get(&app, "/problems", None).await;

    assert_status(&response, StatusCode::NOT_FOUND);
}
