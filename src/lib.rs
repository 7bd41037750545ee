//! RelaySim - Main Library
//!
//! RelaySim is the backend for a relay/diagram simulator. It persists a JSON
//! diagram document, relays text messages between connected WebSocket clients
//! in real time, and runs a server-driven simulation that periodically
//! broadcasts a toggling relay state to every client.
//!
//! # Overview
//!
//! This library provides the core functionality for RelaySim, including:
//! - WebSocket relay with broadcast fan-out to all connected clients
//! - Background simulation ticker with an HTTP activation trigger
//! - Wholesale JSON diagram persistence (load/save to a file)
//! - Static file serving for the browser frontend
//!
//! # Module Structure
//!
//! The library is organized into two main modules:
//!
//! - **`shared`** - Types serialized over the wire
//!   - Simulation update payload (`{"id": ..., "isOn": ...}`)
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server with the WebSocket relay endpoint
//!   - Connection registry and broadcast fan-out
//!   - Simulation ticker and activation state
//!   - Diagram store persistence
//!
//! # Usage
//!
//! ```rust,no_run
//! use relaysim::backend::server::init::create_app;
//!
//! # async fn example() {
//! let app = create_app().await;
//! // Use app with Axum server
//! # }
//! ```
//!
//! # Thread Safety
//!
//! All server state is thread-safe: the connection registry is guarded by
//! `tokio::sync::RwLock`, the simulation activation flag is an atomic, and
//! per-connection delivery goes through `tokio::sync::mpsc` channels.
//!
//! # Error Handling
//!
//! The library uses Rust's standard error handling:
//!
//! - `Result<T, E>` for fallible operations
//! - Custom error types in `backend::error`

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
