//! goeBURST core library.
//!
//! Builds minimum spanning trees over categorical allelic profiles, breaking
//! ties between equally distant edges with the goeBURST level-histogram rule.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod distance;
mod error;
mod goeburst;
mod histogram;
mod mst;
mod profile;
mod ranking;
mod result;

#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::{DegeneratePolicy, ExecutionStrategy, GoeburstBuilder},
    distance::{DistanceMatrix, ProfileDistance, allelic_distance},
    error::{GoeburstError, GoeburstErrorCode, ProfileError, ProfileErrorCode, Result},
    goeburst::Goeburst,
    histogram::LevelHistograms,
    mst::{DisjointSet, MstError, MstErrorCode, SpanningTree, kruskal},
    profile::{Allele, ProfileSource, ProfileTable},
    ranking::{EdgeRanker, ProfileEdge, candidate_edges},
    result::GoeburstResult,
};
