//! Root endpoint integration tests

use crate::common::spawn_app;

#[tokio::test]
async fn test_root_returns_welcome_message() {
    let app = spawn_app().await;

    let response = reqwest::get(app.http_url("/")).await.unwrap();
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Welcome to the Relay Mimic Simulator API");
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = spawn_app().await;

    let response = reqwest::get(app.http_url("/no_such_route")).await.unwrap();
    assert_eq!(response.status(), 404);
}
