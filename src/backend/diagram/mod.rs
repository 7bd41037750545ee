//! Diagram Module
//!
//! This module implements wholesale persistence of the diagram document: a
//! single JSON object stored in a file, read and replaced in its entirety
//! through the `/diagram` endpoints.
//!
//! # Overview
//!
//! - **`store`** - File-backed load/save of the diagram document
//! - **`handlers`** - `GET /diagram` and `POST /diagram` handlers
//!
//! There is no partial update, no history, and no concurrency control
//! beyond the runtime's file I/O: the last write wins.

/// File-backed diagram persistence
pub mod store;

/// Diagram HTTP handlers
pub mod handlers;

/// Re-export commonly used types
pub use handlers::{get_diagram, update_diagram};
pub use store::DiagramStore;
