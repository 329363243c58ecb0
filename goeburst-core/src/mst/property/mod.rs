//! Property-based tests for the goeBURST spanning-tree pipeline.
//!
//! Checks the ranked Kruskal output against independent oracles, validates
//! structural invariants of trees and histograms, and confirms that serial,
//! parallel and repeated runs agree on every generated profile set.

mod determinism;
mod equivalence;
mod helpers;
mod oracle;
mod strategies;
mod structural;
mod types;
