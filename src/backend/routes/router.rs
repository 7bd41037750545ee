/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * Routes are added in a specific order:
 * 1. Relay endpoint (`/ws`)
 * 2. API routes (welcome, diagram, simulation activation)
 * 3. Static files (`/static`)
 * 4. Fallback handler (404)
 *
 * # CORS
 *
 * The router carries a permissive CORS layer so the frontend can be served
 * from any origin during local testing.
 */

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use crate::backend::relay::handlers::handle_relay_upgrade;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state (registry, simulation, diagram store)
/// * `config` - Server configuration (static directory)
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Route Details
///
/// - `GET /ws` - WebSocket relay channel
/// - `GET /` - Welcome message
/// - `GET /diagram` / `POST /diagram` - Diagram document store
/// - `GET /start_simulation` - Simulation activation trigger
/// - `/static/*` - Static frontend files
/// - anything else - 404
pub fn create_router(app_state: AppState, config: &ServerConfig) -> Router<()> {
    // Relay endpoint
    let router = Router::new().route("/ws", axum::routing::get(handle_relay_upgrade));

    // Add API routes
    let router = configure_api_routes(router);

    // Add static file serving
    let router = router.nest_service("/static", ServeDir::new(&config.static_dir));

    // Allow CORS for local testing
    let router = router.layer(CorsLayer::permissive());

    // Fallback handler for 404
    let router = router.fallback(|| async {
        (axum::http::StatusCode::NOT_FOUND, "404 Not Found")
    });

    router.with_state(app_state)
}
