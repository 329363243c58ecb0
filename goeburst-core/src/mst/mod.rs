//! Kruskal spanning-tree construction over ranked profile edges.
//!
//! The builder trusts the order it is given: edges are scanned exactly once in
//! slice order, an edge is accepted when its endpoints lie in different
//! components, and the scan stops as soon as the tree spans every profile.

mod union_find;

pub use self::union_find::DisjointSet;

use tracing::{debug, instrument};

use crate::ranking::ProfileEdge;

/// Errors returned while building a spanning tree.
#[derive(Clone, Debug, Eq, thiserror::Error, PartialEq)]
#[non_exhaustive]
pub enum MstError {
    /// The caller requested a tree for an empty graph.
    #[error("cannot compute a spanning tree for an empty graph")]
    EmptyGraph,
    /// An edge referenced a node id that is not present in the graph.
    #[error("edge references node {node}, but node_count is {node_count}")]
    InvalidNodeId {
        /// The invalid node id referenced by an edge.
        node: usize,
        /// The number of nodes in the graph.
        node_count: usize,
    },
    /// An edge joined a node to itself.
    #[error("edge joins node {node} to itself")]
    SelfEdge {
        /// The node referenced by both endpoints.
        node: usize,
    },
}

impl MstError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> MstErrorCode {
        match self {
            Self::EmptyGraph => MstErrorCode::EmptyGraph,
            Self::InvalidNodeId { .. } => MstErrorCode::InvalidNodeId,
            Self::SelfEdge { .. } => MstErrorCode::SelfEdge,
        }
    }
}

/// Machine-readable error codes for [`MstError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MstErrorCode {
    /// The caller requested a tree for an empty graph.
    EmptyGraph,
    /// An edge referenced a node id that is not present in the graph.
    InvalidNodeId,
    /// An edge joined a node to itself.
    SelfEdge,
}

impl MstErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmptyGraph => "EMPTY_GRAPH",
            Self::InvalidNodeId => "INVALID_NODE_ID",
            Self::SelfEdge => "SELF_EDGE",
        }
    }
}

/// Edges accepted by [`kruskal`], in acceptance order.
///
/// When the edge list covers a connected graph the result is a spanning tree
/// with `node_count - 1` edges.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpanningTree {
    edges: Vec<ProfileEdge>,
    component_count: usize,
}

impl SpanningTree {
    /// Returns the accepted edges in the order they were accepted.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[ProfileEdge] { &self.edges }

    /// Returns the number of connected components left after construction.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the edges connect every node.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Returns the summed allelic distance of all accepted edges.
    #[must_use]
    pub fn total_distance(&self) -> u64 {
        self.edges.iter().map(|edge| u64::from(edge.distance())).sum()
    }

    /// Consumes the tree, returning its edges in acceptance order.
    #[must_use]
    pub fn into_edges(self) -> Vec<ProfileEdge> {
        self.edges
    }
}

/// Builds a spanning tree from edges already sorted into acceptance order.
///
/// # Errors
///
/// Returns an error when:
/// - `node_count == 0`
/// - an edge references a node id `>= node_count`
/// - an edge joins a node to itself
///
/// Edges past the point where the tree is complete are not inspected.
///
/// # Examples
/// ```
/// use goeburst_core::{ProfileEdge, kruskal};
///
/// let edges = [
///     ProfileEdge::new(0, 1, 1),
///     ProfileEdge::new(1, 2, 1),
///     ProfileEdge::new(0, 2, 2),
/// ];
/// let tree = kruskal(3, &edges)?;
/// assert!(tree.is_tree());
/// assert_eq!(tree.edges(), &edges[..2]);
/// # Ok::<(), goeburst_core::MstError>(())
/// ```
#[instrument(name = "core.kruskal", err, skip(ranked_edges), fields(edges = ranked_edges.len()))]
pub fn kruskal(node_count: usize, ranked_edges: &[ProfileEdge]) -> Result<SpanningTree, MstError> {
    if node_count == 0 {
        return Err(MstError::EmptyGraph);
    }

    let target_edges = node_count - 1;
    let mut components = DisjointSet::new(node_count);
    let mut accepted = Vec::with_capacity(target_edges);
    let mut scanned = 0_usize;

    for edge in ranked_edges {
        if accepted.len() == target_edges {
            break;
        }
        validate_edge(edge, node_count)?;
        scanned += 1;
        if components.union(edge.source(), edge.target()) {
            accepted.push(*edge);
        }
    }

    debug!(scanned, accepted = accepted.len(), "kruskal scan finished");
    Ok(SpanningTree {
        edges: accepted,
        component_count: components.count(),
    })
}

fn validate_edge(edge: &ProfileEdge, node_count: usize) -> Result<(), MstError> {
    if edge.target() >= node_count {
        return Err(MstError::InvalidNodeId {
            node: edge.target(),
            node_count,
        });
    }
    if edge.source() == edge.target() {
        return Err(MstError::SelfEdge {
            node: edge.source(),
        });
    }
    Ok(())
}


#[cfg(test)]
mod property;
