//! High-level operations.

pub mod build;

pub use build::{execute, BuildOutcome};
