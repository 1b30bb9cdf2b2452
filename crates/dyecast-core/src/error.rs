//! Error types for graph construction, coloring, and generation.
//!
//! Every failure in this crate is an explicit [`GraphError`] value; errors
//! are never used for control flow. Duplicate-edge inserts and removal of an
//! absent edge are defined no-ops, not errors. All variants are recoverable
//! by the caller.

use crate::graph::NodeId;

/// Errors from graph mutation, coloring, and generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// `add_node` was called with an id already present in the graph.
    #[error("node {0} already exists")]
    DuplicateNode(NodeId),

    /// `remove_node` was called with an id that is not in the graph.
    #[error("node {0} not found")]
    NodeNotFound(NodeId),

    /// An edge was requested with both endpoints equal.
    #[error("self-loop rejected: both endpoints are node {0}")]
    SelfLoop(NodeId),

    /// An edge operation referenced an endpoint that is not in the graph.
    #[error("edge endpoint {0} is not in the graph")]
    UnknownEndpoint(NodeId),

    /// Random coloring was requested with an empty palette.
    #[error("palette is empty; nothing to color with")]
    EmptyPalette,

    /// The generator was asked for a graph with zero nodes.
    #[error("graph size must be at least 1 node")]
    InvalidGraphSize,
}
