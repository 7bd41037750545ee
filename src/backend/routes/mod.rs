//! Routes Module
//!
//! This module contains HTTP route configuration for the server.

/// Main router assembly
pub mod router;

/// API route handlers and configuration
pub mod api_routes;

/// Re-export commonly used items
pub use router::create_router;
