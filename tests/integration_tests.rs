//! Main entry point for integration tests
//!
//! Run with: `cargo test --test integration_tests`

mod integration;

pub use integration::*;
