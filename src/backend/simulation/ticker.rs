/**
 * Simulation Ticker
 *
 * This module implements the background simulation task. It is spawned once
 * at server startup and runs for the lifetime of the process, sleeping a
 * fixed interval between cycles. On each cycle it checks the activation
 * flag: while inactive it does nothing; once active it broadcasts a
 * synthetic update for the fixed simulated component and flips its local
 * toggle state.
 *
 * # Cadence
 *
 * The tick cadence is decoupled from connection count and activity, so each
 * tick costs O(connections) regardless of how many clients are joining or
 * leaving concurrently. Activation takes effect on the next cycle, which
 * bounds the latency between activation and the first synthetic broadcast
 * by one tick interval.
 *
 * # Toggle State
 *
 * The toggle is owned solely by the ticker task. It starts at `true` and
 * flips on every emitted tick, so clients observe `true`, `false`, `true`,
 * ... from the moment of activation.
 */

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::backend::relay::registry::ConnectionRegistry;
use crate::backend::simulation::state::SimulationState;
use crate::shared::SimulationUpdate;

/// Spawn the background simulation ticker
///
/// The returned handle is not normally awaited or aborted — the task has no
/// termination condition and runs until process exit. Tests use the handle
/// to tear the task down.
pub fn spawn_simulation_ticker(
    registry: Arc<ConnectionRegistry>,
    simulation: SimulationState,
    period: Duration,
) -> JoinHandle<()> {
    tokio::spawn(run_simulation_ticker(registry, simulation, period))
}

/// The ticker loop
///
/// Sleeps one period per cycle; on wake, checks the activation flag and
/// either emits one synthetic broadcast (and flips the toggle) or does
/// nothing. The toggle flips only on emitted ticks.
async fn run_simulation_ticker(
    registry: Arc<ConnectionRegistry>,
    simulation: SimulationState,
    period: Duration,
) {
    let mut interval = tokio::time::interval(period);
    let mut is_on = true;

    tracing::info!(
        "[Simulation] Ticker started (period={}s)",
        period.as_secs_f64()
    );

    loop {
        interval.tick().await;

        if !simulation.is_active() {
            continue;
        }

        let update = SimulationUpdate::synthetic(is_on);
        match serde_json::to_string(&update) {
            Ok(message) => {
                let delivered = registry.broadcast(&message).await;
                tracing::debug!(
                    "[Simulation] Tick: is_on={} delivered to {} connection(s)",
                    is_on,
                    delivered
                );
                is_on = !is_on;
            }
            Err(e) => {
                tracing::error!("[Simulation] Failed to serialize update: {:?}", e);
            }
        }
    }
}
