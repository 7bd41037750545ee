/**
 * Application State Management
 *
 * This module defines the application state structure and implements the
 * necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct serves as the central state container for the
 * application, holding:
 * - The connection registry (broadcast targets)
 * - The simulation activation handle
 * - The diagram store
 *
 * # Thread Safety
 *
 * All state is designed to be thread-safe:
 * - `Arc<ConnectionRegistry>` with interior `RwLock` for the connection set
 * - `SimulationState` is an atomic behind an `Arc`
 * - `DiagramStore` is a cloneable handle to one backing file
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow Axum handlers to extract specific
 * parts of the state without needing the entire `AppState`. This follows
 * Axum's recommended pattern for state management.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::diagram::store::DiagramStore;
use crate::backend::relay::registry::ConnectionRegistry;
use crate::backend::simulation::state::SimulationState;

/// Application state shared across all handlers
///
/// # Fields
///
/// * `registry` - Connection registry; every relay connection registers
///   here and every broadcast traverses it
/// * `simulation` - Activation flag handle shared with the ticker task
/// * `diagram` - Diagram document store
#[derive(Clone)]
pub struct AppState {
    /// Registry of live WebSocket connections
    pub registry: Arc<ConnectionRegistry>,

    /// Simulation activation handle
    ///
    /// The same handle is given to the ticker task at startup, so an
    /// activation through a handler is visible on the next tick.
    pub simulation: SimulationState,

    /// Diagram document store
    pub diagram: DiagramStore,
}

impl AppState {
    /// Create application state from its parts
    pub fn new(
        registry: Arc<ConnectionRegistry>,
        simulation: SimulationState,
        diagram: DiagramStore,
    ) -> Self {
        Self {
            registry,
            simulation,
            diagram,
        }
    }
}

/// Allow handlers to extract `Arc<ConnectionRegistry>` directly
impl FromRef<AppState> for Arc<ConnectionRegistry> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.registry.clone()
    }
}

/// Allow handlers to extract `SimulationState` directly
impl FromRef<AppState> for SimulationState {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.simulation.clone()
    }
}

/// Allow handlers to extract `DiagramStore` directly
impl FromRef<AppState> for DiagramStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.diagram.clone()
    }
}
