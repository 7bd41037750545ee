//! Simulation flow end-to-end tests
//!
//! These tests observe the simulation through a real relay connection: the
//! ticker's synthetic updates travel the same broadcast path as relayed
//! client messages.

use std::time::Duration;

use relaysim::shared::event::SIMULATED_COMPONENT_ID;
use relaysim::shared::SimulationUpdate;

use crate::common::{spawn_app, ws_connect, ws_expect_silence, ws_recv_text};

#[tokio::test]
async fn test_no_synthetic_broadcasts_before_activation() {
    let app = spawn_app().await;

    let mut client = ws_connect(&app.ws_url()).await;
    app.wait_for_connection_count(1).await;

    // Several tick intervals pass without activation: nothing arrives
    ws_expect_silence(&mut client, Duration::from_millis(500)).await;
}

#[tokio::test]
async fn test_activation_drives_alternating_broadcasts() {
    let app = spawn_app().await;

    let mut client = ws_connect(&app.ws_url()).await;
    app.wait_for_connection_count(1).await;

    let response = reqwest::get(app.http_url("/start_simulation")).await.unwrap();
    assert_eq!(response.status(), 200);

    let first: SimulationUpdate = serde_json::from_str(&ws_recv_text(&mut client).await).unwrap();
    let second: SimulationUpdate = serde_json::from_str(&ws_recv_text(&mut client).await).unwrap();
    let third: SimulationUpdate = serde_json::from_str(&ws_recv_text(&mut client).await).unwrap();

    assert_eq!(first.id, SIMULATED_COMPONENT_ID);
    assert!(first.is_on);
    assert!(!second.is_on);
    assert!(third.is_on);
}

#[tokio::test]
async fn test_synthetic_broadcast_reaches_every_client() {
    let app = spawn_app().await;

    let mut client_a = ws_connect(&app.ws_url()).await;
    let mut client_b = ws_connect(&app.ws_url()).await;
    app.wait_for_connection_count(2).await;

    reqwest::get(app.http_url("/start_simulation")).await.unwrap();

    let to_a: SimulationUpdate = serde_json::from_str(&ws_recv_text(&mut client_a).await).unwrap();
    let to_b: SimulationUpdate = serde_json::from_str(&ws_recv_text(&mut client_b).await).unwrap();

    assert_eq!(to_a, to_b);
    assert_eq!(to_a.id, SIMULATED_COMPONENT_ID);
}

#[tokio::test]
async fn test_late_joiner_picks_up_mid_simulation() {
    let app = spawn_app().await;

    let mut client_a = ws_connect(&app.ws_url()).await;
    app.wait_for_connection_count(1).await;

    reqwest::get(app.http_url("/start_simulation")).await.unwrap();
    let _first = ws_recv_text(&mut client_a).await;

    // A client connecting after activation joins the broadcast set
    let mut client_b = ws_connect(&app.ws_url()).await;
    app.wait_for_connection_count(2).await;

    let update: SimulationUpdate = serde_json::from_str(&ws_recv_text(&mut client_b).await).unwrap();
    assert_eq!(update.id, SIMULATED_COMPONENT_ID);
}
