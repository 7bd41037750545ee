//! Simulation activation endpoint integration tests

use crate::common::spawn_app;

#[tokio::test]
async fn test_start_simulation_acknowledges_and_sets_flag() {
    let app = spawn_app().await;
    assert!(!app.state.simulation.is_active());

    let response = reqwest::get(app.http_url("/start_simulation")).await.unwrap();
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({"status": "simulation started"}));
    assert!(app.state.simulation.is_active());
}

#[tokio::test]
async fn test_start_simulation_is_idempotent() {
    let app = spawn_app().await;

    for _ in 0..3 {
        let response = reqwest::get(app.http_url("/start_simulation")).await.unwrap();
        assert_eq!(response.status(), 200);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["status"], "simulation started");
    }

    // Still active, never reset
    assert!(app.state.simulation.is_active());
}
