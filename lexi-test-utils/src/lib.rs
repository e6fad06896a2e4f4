//! Test utilities for the lexi vocabulary server
//!
//! This crate provides a controllable clock, progress-state builders
//! and sample dataset fixtures for testing scheduling and caching
//! behavior without real wall-clock time.

pub mod builders;
pub mod clock;
pub mod fixtures;

// Re-export commonly used types
pub use builders::ProgressBuilder;
pub use clock::ManualClock;
pub use fixtures::{sample_grammar_json, sample_vocabulary_json};
