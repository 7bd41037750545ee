//! Backend Module
//!
//! This module contains all server-side code for the RelaySim application.
//! It provides a complete Axum HTTP server with a WebSocket relay, a
//! background simulation ticker, and wholesale JSON diagram persistence.
//!
//! # Overview
//!
//! The backend module includes:
//! - Axum HTTP server setup and configuration
//! - WebSocket relay endpoint with broadcast to all clients
//! - Connection registry tracking live WebSocket connections
//! - Simulation ticker and its HTTP activation trigger
//! - Diagram document persistence (GET/POST `/diagram`)
//! - Route configuration, static file serving, and CORS
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`relay`** - Connection registry and the WebSocket relay endpoint
//! - **`simulation`** - Simulation ticker and activation state
//! - **`diagram`** - Diagram document store and its HTTP handlers
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── relay/          - Connection registry and relay endpoint
//! ├── simulation/     - Ticker and activation control
//! ├── diagram/        - Diagram persistence
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! The backend uses shared state (`AppState`) that contains the connection
//! registry, the simulation activation handle, and the diagram store. State
//! is shared across all request handlers using `Arc` and cloneable handles;
//! the registry is guarded by `tokio::sync::RwLock` for thread-safe
//! concurrent access.
//!
//! # Data Flow
//!
//! Every text frame received on the relay endpoint is re-broadcast verbatim
//! to all registered connections (the sender included). Independently, the
//! simulation ticker, once activated, injects synthetic updates into the
//! same broadcast path on a fixed cadence.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Connection registry and WebSocket relay endpoint
pub mod relay;

/// Simulation ticker and activation control
pub mod simulation;

/// Diagram document persistence
pub mod diagram;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use error::BackendError;
pub use relay::registry::ConnectionRegistry;
pub use server::create_app;
pub use simulation::state::SimulationState;
