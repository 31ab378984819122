mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use common::InMemoryMappingRepository;
use shortify::api::handlers::history_handler;
use shortify::state::AppState;
use std::sync::Arc;

fn test_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/history", get(history_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_history_newest_first_with_composed_short_urls() {
    let repo = Arc::new(InMemoryMappingRepository::new());
    let state = common::create_test_state(repo);

    let mut ids = Vec::new();
    for path in ["a", "b", "c"] {
        let mapping = state
            .shortener
            .shorten(&format!("https://example.com/{path}"))
            .await
            .unwrap();
        ids.push(mapping.short_id);
    }

    let server = test_server(state);
    let response = server.get("/history").add_query_param("limit", 3).await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let history = body["history"].as_array().unwrap();
    assert_eq!(history.len(), 3);

    // Inserted a, b, c; expect c, b, a.
    for (entry, expected_id) in history.iter().zip(ids.iter().rev()) {
        assert_eq!(entry["shortId"].as_str().unwrap(), expected_id);
        assert_eq!(
            entry["shortUrl"].as_str().unwrap(),
            format!("{}/{}", common::TEST_BASE_URL, expected_id)
        );
        assert!(entry["originalUrl"].as_str().unwrap().starts_with("https://example.com/"));
        assert!(entry["createdAt"].is_string());
    }
}

#[tokio::test]
async fn test_history_default_limit() {
    let repo = Arc::new(InMemoryMappingRepository::new());
    let state = common::create_test_state(repo);

    for i in 0..12 {
        state
            .shortener
            .shorten(&format!("https://example.com/{i}"))
            .await
            .unwrap();
    }

    let server = test_server(state);
    let response = server.get("/history").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["history"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_history_empty_store() {
    let repo = Arc::new(InMemoryMappingRepository::new());
    let server = test_server(common::create_test_state(repo));

    let response = server.get("/history").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["history"].as_array().unwrap().len(), 0);
}
