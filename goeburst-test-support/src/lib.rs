//! Shared test utilities used across goeburst crates.

pub mod ci;
pub mod tracing;
