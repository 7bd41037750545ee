/**
 * Activation Trigger Handler
 *
 * This module implements the simulation activation endpoint. Activation is
 * a flag write and nothing more: no broadcast happens here. The next ticker
 * cycle picks up the new state, so the first synthetic broadcast follows
 * within one tick interval of this call.
 */

use axum::{extract::State, Json};
use serde_json::Value;

use crate::backend::simulation::state::SimulationState;

/// Handle simulation activation (GET /start_simulation)
///
/// Sets the activation flag and acknowledges immediately. Idempotent:
/// calling it while the simulation is already running is a no-op that
/// still returns success.
///
/// # Returns
///
/// `{"status": "simulation started"}`
pub async fn start_simulation(State(simulation): State<SimulationState>) -> Json<Value> {
    let was_active = simulation.activate();
    if was_active {
        tracing::debug!("[Simulation] Activation requested but already active");
    } else {
        tracing::info!("[Simulation] Activated");
    }

    Json(serde_json::json!({"status": "simulation started"}))
}
