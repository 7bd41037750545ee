/**
 * Simulation Update Payload
 *
 * This module defines the synthetic payload the simulation ticker broadcasts
 * to every connected client. The wire shape is fixed: a JSON object with the
 * component identifier and the current toggle value, e.g.
 * `{"id": "data-id=comp-sim1", "isOn": true}`.
 */
use serde::{Deserialize, Serialize};

/// Identifier of the synthetic component driven by the simulation ticker.
pub const SIMULATED_COMPONENT_ID: &str = "data-id=comp-sim1";

/// A simulation state update broadcast to all connected clients.
///
/// Field names are part of the wire contract consumed by the frontend:
/// `id` names the diagram component and `isOn` carries the toggle value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SimulationUpdate {
    /// Diagram component identifier this update targets
    pub id: String,
    /// Current on/off state of the component
    #[serde(rename = "isOn")]
    pub is_on: bool,
}

impl SimulationUpdate {
    /// Create a new simulation update
    pub fn new(id: impl Into<String>, is_on: bool) -> Self {
        Self {
            id: id.into(),
            is_on,
        }
    }

    /// Create an update for the fixed synthetic component
    pub fn synthetic(is_on: bool) -> Self {
        Self::new(SIMULATED_COMPONENT_ID, is_on)
    }
}
