/**
 * Simulation Activation State
 *
 * This module defines the shared activation flag that gates the simulation
 * ticker. The flag is explicit shared state handed to both the activation
 * handler and the ticker task — not a process global.
 *
 * # Access Discipline
 *
 * Single writer (the activation handler sets it), single reader (the ticker
 * checks it every cycle). An atomic is sufficient; no lock is needed.
 *
 * # Lifecycle
 *
 * The flag starts inactive and flips only forward: once active it is never
 * reset by any operation. No stop control exists.
 */

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// Cloneable handle to the simulation activation flag
///
/// All clones share the same underlying flag. The handle is stored in the
/// application state and given to the ticker task at startup.
#[derive(Debug, Clone, Default)]
pub struct SimulationState {
    active: Arc<AtomicBool>,
}

impl SimulationState {
    /// Create a new handle with the simulation inactive
    pub fn new() -> Self {
        Self {
            active: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Activate the simulation
    ///
    /// Idempotent: activating an already-active simulation is a no-op.
    ///
    /// # Returns
    ///
    /// `true` if the simulation was already active
    pub fn activate(&self) -> bool {
        self.active.swap(true, Ordering::SeqCst)
    }

    /// Whether the simulation is currently active
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }
}
