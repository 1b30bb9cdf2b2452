//! Graph construction: seeded random generation and explicit part lists.
//!
//! # Density approximation
//!
//! The random generator draws a target degree per node and then samples
//! partners uniformly over all nodes, skipping draws that land on the node
//! itself or on an existing neighbor *without retrying*. The realized degree
//! is therefore generally below the drawn target, and the realized density
//! systematically below `density_factor`. This under-realization is accepted,
//! documented behavior — callers wanting exact densities must build the edge
//! list themselves and use [`from_parts`].

use rand::Rng;
use tracing::debug;

use crate::error::GraphError;
use crate::graph::{ColorGraph, NodeId};

/// Upper bound for a node's target-degree draw.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn degree_bound(node_count: usize, density_factor: f64) -> usize {
    let scaled = ((node_count - 1) as f64 * density_factor).floor() as usize;
    scaled.max(1)
}

/// Generate a random undirected graph with ids `0..node_count`.
///
/// Per node, a target degree `k` is drawn uniformly from
/// `1..=max(1, floor((node_count - 1) * density_factor))`, then `k` partner
/// draws are attempted uniformly over all nodes. Draws hitting the node
/// itself or an existing neighbor are dropped (see the module notes on
/// density under-realization). Nodes start uncolored.
///
/// # Errors
///
/// Returns [`GraphError::InvalidGraphSize`] when `node_count` is zero.
pub fn random_graph(
    node_count: usize,
    density_factor: f64,
    rng: &mut impl Rng,
) -> Result<ColorGraph, GraphError> {
    if node_count == 0 {
        return Err(GraphError::InvalidGraphSize);
    }

    let mut graph = ColorGraph::new();
    for id in 0..node_count {
        graph.add_node(id)?;
    }

    let bound = degree_bound(node_count, density_factor);
    for id in 0..node_count {
        let target = rng.gen_range(1..=bound);
        for _ in 0..target {
            let partner = rng.gen_range(0..node_count);
            if partner == id {
                continue;
            }
            let already_linked = graph
                .neighbors(id)
                .is_some_and(|neighbors| neighbors.contains(&partner));
            if already_linked {
                continue;
            }
            graph.add_edge(id, partner)?;
        }
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        density_factor,
        "random graph generated"
    );
    Ok(graph)
}

/// Build a graph from explicit node and edge lists.
///
/// Duplicate edge pairs (in either order) collapse silently, matching
/// [`ColorGraph::add_edge`].
///
/// # Errors
///
/// Returns [`GraphError::DuplicateNode`] for repeated node ids,
/// [`GraphError::SelfLoop`] for `(a, a)` pairs, and
/// [`GraphError::UnknownEndpoint`] for edges naming a node not in
/// `node_ids`.
pub fn from_parts(
    node_ids: &[NodeId],
    edge_pairs: &[(NodeId, NodeId)],
) -> Result<ColorGraph, GraphError> {
    let mut graph = ColorGraph::new();
    for id in node_ids {
        graph.add_node(*id)?;
    }
    for (a, b) in edge_pairs {
        graph.add_edge(*a, *b)?;
    }
    Ok(graph)
}
