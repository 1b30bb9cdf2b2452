//! Undirected colored graph stored as an index-based arena.
//!
//! Nodes live in an ordered map keyed by integer id; edges are canonical
//! `(min, max)` pairs so `{a, b}` and `{b, a}` can never coexist. Each node
//! keeps a neighbor id set that is maintained as the exact symmetric closure
//! of the edge set.
//!
//! # Conflict bookkeeping
//!
//! Every edge carries a derived `conflict` flag: true iff both endpoints
//! currently hold the same non-null color. The flag is updated on edge
//! insertion and recomputed in full whenever colors change (see the coloring
//! operations in [`crate::color`]). [`ColorGraph::total_conflicts`] counts
//! flagged edges and always agrees with the per-node formulation
//! `sum(node_conflicts) / 2`, each conflicting edge being seen from both
//! endpoints.
//!
//! # Mutability
//!
//! No internal synchronization: every mutating operation assumes the caller
//! has exclusive access for the duration of the call. Embedders serving
//! concurrent requests must serialize access per graph instance.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::GraphError;

/// Stable identifier for a graph node.
pub type NodeId = usize;

/// Per-node state: current color and the symmetric neighbor set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct NodeState {
    pub(crate) color: Option<String>,
    pub(crate) neighbors: BTreeSet<NodeId>,
}

/// Undirected graph with nullable node colors and per-edge conflict flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorGraph {
    pub(crate) nodes: BTreeMap<NodeId, NodeState>,
    /// Canonical `(min, max)` pair -> conflict flag.
    pub(crate) edges: BTreeMap<(NodeId, NodeId), bool>,
}

/// Normalize an endpoint pair to its canonical `(min, max)` form.
pub(crate) const fn canonical(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    if a <= b { (a, b) } else { (b, a) }
}

impl ColorGraph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Structural mutation
    // -----------------------------------------------------------------------

    /// Add a colorless node with an empty neighbor set.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateNode`] if `id` is already present.
    pub fn add_node(&mut self, id: NodeId) -> Result<(), GraphError> {
        if self.nodes.contains_key(&id) {
            return Err(GraphError::DuplicateNode(id));
        }
        self.nodes.insert(id, NodeState::default());
        Ok(())
    }

    /// Remove a node, every edge incident to it, and every neighbor-set
    /// entry referencing it.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if `id` is not in the graph.
    pub fn remove_node(&mut self, id: NodeId) -> Result<(), GraphError> {
        let state = self.nodes.remove(&id).ok_or(GraphError::NodeNotFound(id))?;
        for neighbor in &state.neighbors {
            if let Some(other) = self.nodes.get_mut(neighbor) {
                other.neighbors.remove(&id);
            }
            self.edges.remove(&canonical(id, *neighbor));
        }
        Ok(())
    }

    /// Insert the undirected edge `{a, b}` and update both neighbor sets.
    ///
    /// Inserting an edge that already exists (in either endpoint order) is a
    /// silent no-op, not an error. The new edge's conflict flag is computed
    /// from the endpoints' current colors.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::SelfLoop`] when `a == b`, or
    /// [`GraphError::UnknownEndpoint`] when either endpoint is absent.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> Result<(), GraphError> {
        if a == b {
            return Err(GraphError::SelfLoop(a));
        }
        self.require_node(a)?;
        self.require_node(b)?;

        let key = canonical(a, b);
        if self.edges.contains_key(&key) {
            return Ok(());
        }

        let conflict = self.endpoints_conflict(a, b);
        self.edges.insert(key, conflict);
        if let Some(state) = self.nodes.get_mut(&a) {
            state.neighbors.insert(b);
        }
        if let Some(state) = self.nodes.get_mut(&b) {
            state.neighbors.insert(a);
        }
        Ok(())
    }

    /// Remove the undirected edge `{a, b}` and both neighbor-set entries.
    ///
    /// Removing a pair that is not an edge is a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownEndpoint`] when either endpoint is
    /// absent from the graph.
    pub fn remove_edge(&mut self, a: NodeId, b: NodeId) -> Result<(), GraphError> {
        self.require_node(a)?;
        self.require_node(b)?;

        if self.edges.remove(&canonical(a, b)).is_some() {
            if let Some(state) = self.nodes.get_mut(&a) {
                state.neighbors.remove(&b);
            }
            if let Some(state) = self.nodes.get_mut(&b) {
                state.neighbors.remove(&a);
            }
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Snapshots and accessors
    // -----------------------------------------------------------------------

    /// Snapshot of all nodes as `(id, color)`, ordered by id.
    #[must_use]
    pub fn nodes(&self) -> Vec<(NodeId, Option<String>)> {
        self.nodes
            .iter()
            .map(|(id, state)| (*id, state.color.clone()))
            .collect()
    }

    /// Snapshot of all edges as `(a, b, conflict)` with `a < b`, ordered by
    /// canonical pair.
    #[must_use]
    pub fn edges(&self) -> Vec<(NodeId, NodeId, bool)> {
        self.edges
            .iter()
            .map(|((a, b), conflict)| (*a, *b, *conflict))
            .collect()
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Test whether `id` is a node of the graph.
    #[must_use]
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Current color of `id`, or `None` if the node is absent or uncolored.
    #[must_use]
    pub fn color(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(&id).and_then(|state| state.color.as_deref())
    }

    /// Neighbor ids of `id`, or `None` if the node is absent.
    #[must_use]
    pub fn neighbors(&self, id: NodeId) -> Option<&BTreeSet<NodeId>> {
        self.nodes.get(&id).map(|state| &state.neighbors)
    }

    /// Degree of `id`, or `None` if the node is absent.
    #[must_use]
    pub fn degree(&self, id: NodeId) -> Option<usize> {
        self.nodes.get(&id).map(|state| state.neighbors.len())
    }

    // -----------------------------------------------------------------------
    // Conflict queries
    // -----------------------------------------------------------------------

    /// Number of edges whose endpoints share a non-null color.
    #[must_use]
    pub fn total_conflicts(&self) -> usize {
        self.edges.values().filter(|conflict| **conflict).count()
    }

    /// Number of neighbors sharing `id`'s non-null color, or `None` if the
    /// node is absent. An uncolored node has zero conflicts.
    #[must_use]
    pub fn node_conflicts(&self, id: NodeId) -> Option<usize> {
        let state = self.nodes.get(&id)?;
        let Some(color) = state.color.as_deref() else {
            return Some(0);
        };
        let count = state
            .neighbors
            .iter()
            .filter(|neighbor| self.color(**neighbor) == Some(color))
            .count();
        Some(count)
    }

    /// Nodes with at least one same-colored neighbor, as
    /// `(id, conflict count)` ordered by id.
    #[must_use]
    pub fn conflicted_nodes(&self) -> Vec<(NodeId, usize)> {
        self.nodes
            .keys()
            .filter_map(|id| match self.node_conflicts(*id) {
                Some(count) if count > 0 => Some((*id, count)),
                _ => None,
            })
            .collect()
    }

    /// True iff the current coloring has no conflicting edge.
    #[must_use]
    pub fn is_valid_coloring(&self) -> bool {
        self.total_conflicts() == 0
    }

    /// Fraction of edges in conflict, in `0.0..=1.0`.
    ///
    /// An edgeless graph has ratio `0.0` — explicit policy, never a division
    /// fault.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn conflict_ratio(&self) -> f64 {
        if self.edges.is_empty() {
            return 0.0;
        }
        self.total_conflicts() as f64 / self.edges.len() as f64
    }

    // -----------------------------------------------------------------------
    // Internal
    // -----------------------------------------------------------------------

    fn require_node(&self, id: NodeId) -> Result<(), GraphError> {
        if self.nodes.contains_key(&id) {
            Ok(())
        } else {
            Err(GraphError::UnknownEndpoint(id))
        }
    }

    /// True iff both endpoints currently hold the same non-null color.
    pub(crate) fn endpoints_conflict(&self, a: NodeId, b: NodeId) -> bool {
        match (self.color(a), self.color(b)) {
            (Some(ca), Some(cb)) => ca == cb,
            _ => false,
        }
    }

    /// Recompute every edge's conflict flag from the current colors. Must
    /// run after any operation that changes node colors.
    pub(crate) fn recompute_conflicts(&mut self) {
        let flags: Vec<((NodeId, NodeId), bool)> = self
            .edges
            .keys()
            .map(|key| (*key, self.endpoints_conflict(key.0, key.1)))
            .collect();
        for (key, conflict) in flags {
            self.edges.insert(key, conflict);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Triangle-free path: 0 - 1 - 2.
    fn path_graph() -> ColorGraph {
        let mut graph = ColorGraph::new();
        for id in 0..3 {
            graph.add_node(id).expect("fresh id");
        }
        graph.add_edge(0, 1).expect("valid edge");
        graph.add_edge(1, 2).expect("valid edge");
        graph
    }

    #[test]
    fn add_node_rejects_duplicate() {
        let mut graph = ColorGraph::new();
        graph.add_node(7).expect("fresh id");
        assert_eq!(graph.add_node(7), Err(GraphError::DuplicateNode(7)));
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn remove_node_rejects_absent() {
        let mut graph = ColorGraph::new();
        assert_eq!(graph.remove_node(3), Err(GraphError::NodeNotFound(3)));
    }

    #[test]
    fn add_edge_rejects_self_loop() {
        let mut graph = ColorGraph::new();
        graph.add_node(0).expect("fresh id");
        assert_eq!(graph.add_edge(0, 0), Err(GraphError::SelfLoop(0)));
    }

    #[test]
    fn add_edge_rejects_unknown_endpoint() {
        let mut graph = ColorGraph::new();
        graph.add_node(0).expect("fresh id");
        assert_eq!(graph.add_edge(0, 9), Err(GraphError::UnknownEndpoint(9)));
        assert_eq!(graph.add_edge(9, 0), Err(GraphError::UnknownEndpoint(9)));
    }

    #[test]
    fn duplicate_edge_either_order_is_noop() {
        let mut graph = path_graph();
        let before = graph.edges();
        graph.add_edge(0, 1).expect("duplicate is a no-op");
        graph.add_edge(1, 0).expect("reversed duplicate is a no-op");
        assert_eq!(graph.edges(), before);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn neighbor_sets_are_symmetric() {
        let graph = path_graph();
        assert!(graph.neighbors(0).expect("node 0").contains(&1));
        assert!(graph.neighbors(1).expect("node 1").contains(&0));
        assert!(graph.neighbors(1).expect("node 1").contains(&2));
        assert!(graph.neighbors(2).expect("node 2").contains(&1));
        assert_eq!(graph.degree(1), Some(2));
    }

    #[test]
    fn remove_node_cascades_to_edges_and_neighbors() {
        // Removing the middle of 0 - 1 - 2 must delete both edges and strip
        // node 1 from the outer neighbor sets.
        let mut graph = path_graph();
        graph.remove_node(1).expect("node 1 exists");

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.neighbors(0).expect("node 0").is_empty());
        assert!(graph.neighbors(2).expect("node 2").is_empty());
    }

    #[test]
    fn remove_edge_is_symmetric_and_noop_when_absent() {
        let mut graph = path_graph();
        graph.remove_edge(1, 0).expect("endpoints exist");
        assert_eq!(graph.edge_count(), 1);
        assert!(!graph.neighbors(0).expect("node 0").contains(&1));
        assert!(!graph.neighbors(1).expect("node 1").contains(&0));

        // Already removed: no-op, not an error.
        graph.remove_edge(0, 1).expect("absent edge is a no-op");
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn remove_edge_rejects_unknown_endpoint() {
        let mut graph = path_graph();
        assert_eq!(
            graph.remove_edge(0, 42),
            Err(GraphError::UnknownEndpoint(42))
        );
    }

    #[test]
    fn snapshots_are_ordered() {
        let mut graph = ColorGraph::new();
        for id in [5, 1, 3] {
            graph.add_node(id).expect("fresh id");
        }
        graph.add_edge(5, 1).expect("valid edge");
        graph.add_edge(3, 5).expect("valid edge");

        let ids: Vec<NodeId> = graph.nodes().iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![1, 3, 5]);
        // Canonical (min, max) pairs in order.
        let pairs: Vec<(NodeId, NodeId)> =
            graph.edges().iter().map(|(a, b, _)| (*a, *b)).collect();
        assert_eq!(pairs, vec![(1, 5), (3, 5)]);
    }

    #[test]
    fn conflict_ratio_zero_without_edges() {
        let mut graph = ColorGraph::new();
        graph.add_node(0).expect("fresh id");
        graph.add_node(1).expect("fresh id");
        assert!((graph.conflict_ratio() - 0.0).abs() < f64::EPSILON);
        assert!(graph.is_valid_coloring());
    }

    #[test]
    fn uncolored_endpoints_never_conflict() {
        let graph = path_graph();
        assert_eq!(graph.total_conflicts(), 0);
        assert_eq!(graph.node_conflicts(1), Some(0));
        assert!(graph.conflicted_nodes().is_empty());
    }
}
