pub mod config;

/// Common utilities shared across the Uplify procurement predictor
///
/// This crate provides shared functionality used by the other
/// workspace members:
///
/// - Configuration loading
/// - Shared test fixtures for rule-model files

// Test helpers module - available for both development and test builds
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

// Re-export commonly used test utilities for easier access
#[cfg(any(test, feature = "test-helpers"))]
pub use test_helpers::{generate_unique_id, rule_block_json, rule_model_json, write_model_dir};
