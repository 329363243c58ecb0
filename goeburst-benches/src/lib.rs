//! Benchmark support crate for goeburst.
//!
//! Provides seeded synthetic profile tables and parameter types used by the
//! Criterion benchmarks of the full pipeline and the Kruskal stage.

pub mod error;
pub mod params;
pub mod source;
