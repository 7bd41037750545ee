//! Property-based tests

mod registry_proptest;
