//! Shared helpers for integration tests.

pub mod gated;
pub mod harness;
