//! Relay Module
//!
//! This module implements the real-time relay: a registry of live WebSocket
//! connections and the `/ws` endpoint that re-broadcasts every inbound text
//! frame to all registered connections.
//!
//! # Overview
//!
//! - **`registry`** - Ordered connection set with register/unregister and
//!   broadcast-to-all (per-connection failure isolation)
//! - **`handlers`** - WebSocket upgrade and the per-connection relay loop
//!
//! # Data Flow
//!
//! `handlers` registers each accepted connection with the `registry` and
//! forwards every received text frame to `registry::broadcast`, which
//! delivers it to all registered connections — the sender included. The
//! simulation ticker injects its synthetic updates through the same
//! broadcast path.

/// Connection registry and broadcast fan-out
pub mod registry;

/// WebSocket relay endpoint handlers
pub mod handlers;

/// Re-export commonly used types
pub use handlers::handle_relay_upgrade;
pub use registry::{ConnectionId, ConnectionRegistry};
