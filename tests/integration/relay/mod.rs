//! Relay integration tests
//!
//! End-to-end tests for the WebSocket relay endpoint
