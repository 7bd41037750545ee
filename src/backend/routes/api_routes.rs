/**
 * API Route Handlers
 *
 * This module defines route handlers for the HTTP API endpoints:
 *
 * - `GET /` - Welcome message
 * - `GET /diagram` - Load the persisted diagram document
 * - `POST /diagram` - Overwrite the persisted diagram document
 * - `GET /start_simulation` - Activate the simulation ticker
 */

use axum::{Json, Router};
use serde_json::Value;

use crate::backend::diagram::handlers::{get_diagram, update_diagram};
use crate::backend::server::state::AppState;
use crate::backend::simulation::handlers::start_simulation;

/// Handle the root route (GET /)
///
/// # Returns
///
/// A welcome payload identifying the API
pub async fn read_root() -> Json<Value> {
    Json(serde_json::json!({
        "message": "Welcome to the Relay Mimic Simulator API"
    }))
}

/// Configure API routes
///
/// Adds the following routes to the router:
///
/// - `GET /` - Welcome message
/// - `GET /diagram` - Load the diagram document
/// - `POST /diagram` - Overwrite the diagram document
/// - `GET /start_simulation` - Activate the simulation
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with API routes configured
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/", axum::routing::get(read_root))
        .route(
            "/diagram",
            axum::routing::get(get_diagram).post(update_diagram),
        )
        .route("/start_simulation", axum::routing::get(start_simulation))
}
