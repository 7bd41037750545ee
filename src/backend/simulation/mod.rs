//! Simulation Module
//!
//! This module implements the server-driven simulation: a background ticker
//! that, once activated, broadcasts a toggling relay state to all connected
//! clients on a fixed cadence.
//!
//! # Overview
//!
//! - **`state`** - The activation flag handle shared between the HTTP
//!   trigger and the ticker task
//! - **`ticker`** - The long-lived background task emitting synthetic
//!   updates through the connection registry
//! - **`handlers`** - The `GET /start_simulation` activation trigger
//!
//! # Lifecycle
//!
//! The ticker is spawned once at server startup and runs for the lifetime
//! of the process, independent of any individual connection. Activation is
//! one-way: there is no stop operation, and the flag never flips back.

/// Simulation activation state
pub mod state;

/// Background simulation ticker
pub mod ticker;

/// Activation trigger handler
pub mod handlers;

/// Re-export commonly used types
pub use handlers::start_simulation;
pub use state::SimulationState;
pub use ticker::spawn_simulation_ticker;
