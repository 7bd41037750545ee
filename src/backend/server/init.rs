/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including state creation, ticker startup, and route configuration.
 *
 * # Initialization Process
 *
 * 1. Load configuration from the environment
 * 2. Create the connection registry, simulation handle, and diagram store
 * 3. Spawn the background simulation ticker
 * 4. Create and configure the router
 *
 * The ticker is spawned here — once per process — and is tied to the
 * process lifetime, not to any connection or request.
 */

use axum::Router;

use crate::backend::diagram::store::DiagramStore;
use crate::backend::relay::registry::ConnectionRegistry;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;
use crate::backend::simulation::state::SimulationState;
use crate::backend::simulation::ticker::spawn_simulation_ticker;

/// Create and configure the Axum application
///
/// Loads configuration from the environment, builds the shared state,
/// spawns the simulation ticker, and assembles the router.
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub async fn create_app() -> Router<()> {
    create_app_with_config(ServerConfig::from_env()).await
}

/// Create the application with explicit configuration
///
/// Split out from `create_app` so tests can inject a temporary diagram
/// file and a short tick interval.
pub async fn create_app_with_config(config: ServerConfig) -> Router<()> {
    tracing::info!("Initializing RelaySim backend server");

    let registry = ConnectionRegistry::shared();
    let simulation = SimulationState::new();
    let diagram = DiagramStore::new(config.diagram_file.clone());

    // One ticker per process, running until exit
    let _ticker = spawn_simulation_ticker(
        registry.clone(),
        simulation.clone(),
        config.tick_interval,
    );

    let app_state = AppState::new(registry, simulation, diagram);
    let app = create_router(app_state, &config);

    tracing::info!(
        "Router configured (diagram={}, static={}, tick={}s)",
        config.diagram_file.display(),
        config.static_dir.display(),
        config.tick_interval.as_secs_f64()
    );

    app
}
