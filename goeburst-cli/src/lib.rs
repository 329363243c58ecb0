//! Support library for the goeburst CLI binary.
//!
//! Exposes the command pipeline and logging set-up so doctests and unit tests
//! can drive them without spawning a subprocess.

pub mod cli;
pub mod logging;
