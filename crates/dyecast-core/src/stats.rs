//! Summary statistics for a colored graph.
//!
//! # Statistics Provided
//!
//! - **node_count / edge_count**: totals for the live graph.
//! - **conflict_count / valid_edge_count / conflict_ratio / is_valid**:
//!   conflict bookkeeping rolled up from the edge flags.
//! - **density**: ratio of actual edges to the maximum possible for an
//!   undirected simple graph, `edge_count / (n * (n - 1) / 2)`. Zero for
//!   graphs with fewer than 2 nodes.
//! - **colored_node_count / color_histogram**: how many nodes hold a color
//!   and how the palette labels are distributed.
//! - **conflicted_node_count**: nodes with at least one same-colored
//!   neighbor.
//! - **isolated_node_count**: nodes with no edges at all.
//! - **max_degree**: highest neighbor count over all nodes.
//! - **component_count**: connected components of the undirected graph.

use std::collections::BTreeMap;

use petgraph::algo::connected_components;
use petgraph::graph::{NodeIndex, UnGraph};
use serde::{Deserialize, Serialize};

use crate::graph::{ColorGraph, NodeId};

/// Summary statistics computed from a [`ColorGraph`] snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphStats {
    /// Number of nodes.
    pub node_count: usize,
    /// Number of undirected edges.
    pub edge_count: usize,
    /// Edges whose endpoints share a non-null color.
    pub conflict_count: usize,
    /// Edges without a color clash.
    pub valid_edge_count: usize,
    /// `conflict_count / edge_count`; 0.0 for an edgeless graph.
    pub conflict_ratio: f64,
    /// True iff no edge is in conflict.
    pub is_valid: bool,
    /// `edge_count / (n * (n - 1) / 2)`; 0.0 below two nodes.
    pub density: f64,
    /// Nodes currently holding a color.
    pub colored_node_count: usize,
    /// Nodes with at least one same-colored neighbor.
    pub conflicted_node_count: usize,
    /// Nodes with no incident edges.
    pub isolated_node_count: usize,
    /// Highest degree over all nodes.
    pub max_degree: usize,
    /// Connected components of the undirected graph.
    pub component_count: usize,
    /// Node count per color label, for colored nodes only.
    pub color_histogram: BTreeMap<String, usize>,
}

impl GraphStats {
    /// Compute statistics from the graph's current state.
    #[must_use]
    pub fn from_graph(graph: &ColorGraph) -> Self {
        let node_count = graph.node_count();
        let edge_count = graph.edge_count();
        let conflict_count = graph.total_conflicts();

        let nodes = graph.nodes();
        let colored_node_count = nodes
            .iter()
            .filter(|(_, color)| color.is_some())
            .count();

        let mut color_histogram: BTreeMap<String, usize> = BTreeMap::new();
        for (_, color) in &nodes {
            if let Some(color) = color {
                *color_histogram.entry(color.clone()).or_insert(0) += 1;
            }
        }

        let isolated_node_count = nodes
            .iter()
            .filter(|(id, _)| graph.degree(*id) == Some(0))
            .count();

        let max_degree = nodes
            .iter()
            .filter_map(|(id, _)| graph.degree(*id))
            .max()
            .unwrap_or(0);

        Self {
            node_count,
            edge_count,
            conflict_count,
            valid_edge_count: edge_count - conflict_count,
            conflict_ratio: graph.conflict_ratio(),
            is_valid: graph.is_valid_coloring(),
            density: compute_density(node_count, edge_count),
            colored_node_count,
            conflicted_node_count: graph.conflicted_nodes().len(),
            isolated_node_count,
            max_degree,
            component_count: count_components(graph),
            color_histogram,
        }
    }
}

/// Connected components via a petgraph view of the arena.
fn count_components(graph: &ColorGraph) -> usize {
    let mut view = UnGraph::<NodeId, ()>::default();
    let mut indices: BTreeMap<NodeId, NodeIndex> = BTreeMap::new();

    for (id, _) in graph.nodes() {
        indices.insert(id, view.add_node(id));
    }
    for (a, b, _) in graph.edges() {
        view.add_edge(indices[&a], indices[&b], ());
    }

    connected_components(&view)
}

#[allow(clippy::cast_precision_loss)]
fn compute_density(node_count: usize, edge_count: usize) -> f64 {
    if node_count < 2 {
        return 0.0_f64;
    }
    let max_edges = (node_count * (node_count - 1) / 2) as f64;
    edge_count as f64 / max_edges
}
