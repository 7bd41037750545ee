//! API integration tests
//!
//! Integration tests for the HTTP endpoints

mod activation_test;
mod welcome_test;
