//! Coloring operations: random assignment, snapshotting, and replay.
//!
//! Random coloring draws one palette label per node, independently and with
//! replacement — adjacent nodes may well receive the same label; that is the
//! event being measured, not a bug. Every operation that changes colors ends
//! by recomputing all edge conflict flags so the flags never go stale.

use std::collections::BTreeMap;

use rand::Rng;
use tracing::debug;

use crate::error::GraphError;
use crate::graph::{ColorGraph, NodeId};
use crate::palette::Palette;

/// Value-copy snapshot of a coloring: node id -> label. Nodes without a
/// color are absent from the map. Later graph mutation never alters a
/// snapshot.
pub type ColorAssignment = BTreeMap<NodeId, String>;

impl ColorGraph {
    /// Assign every node one label drawn uniformly from `palette`, then
    /// recompute all edge conflict flags.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EmptyPalette`] when the palette has no labels.
    pub fn color_randomly(
        &mut self,
        palette: &Palette,
        rng: &mut impl Rng,
    ) -> Result<(), GraphError> {
        if palette.is_empty() {
            return Err(GraphError::EmptyPalette);
        }
        for state in self.nodes.values_mut() {
            let label = palette.draw(rng).ok_or(GraphError::EmptyPalette)?;
            state.color = Some(label.to_owned());
        }
        self.recompute_conflicts();
        debug!(
            nodes = self.node_count(),
            conflicts = self.total_conflicts(),
            "random coloring applied"
        );
        Ok(())
    }

    /// Value-copy of the current coloring. Only colored nodes appear.
    #[must_use]
    pub fn color_assignment(&self) -> ColorAssignment {
        self.nodes
            .iter()
            .filter_map(|(id, state)| state.color.clone().map(|color| (*id, color)))
            .collect()
    }

    /// Apply a historical assignment to the live graph.
    ///
    /// Sets the color of every node whose id appears in `assignment`; ids
    /// not present in the assignment keep their current color, and
    /// assignment entries for ids no longer in the graph are ignored. All
    /// edge conflict flags are recomputed afterwards.
    pub fn recolor(&mut self, assignment: &ColorAssignment) {
        let mut applied = 0_usize;
        for (id, color) in assignment {
            if let Some(state) = self.nodes.get_mut(id) {
                state.color = Some(color.clone());
                applied += 1;
            }
        }
        self.recompute_conflicts();
        debug!(applied, conflicts = self.total_conflicts(), "recolor applied");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Path 0 - 1 - 2, the worked scenario: two colors suffice.
    fn path_graph() -> ColorGraph {
        let mut graph = ColorGraph::new();
        for id in 0..3 {
            graph.add_node(id).expect("fresh id");
        }
        graph.add_edge(0, 1).expect("valid edge");
        graph.add_edge(1, 2).expect("valid edge");
        graph
    }

    fn assignment(pairs: &[(NodeId, &str)]) -> ColorAssignment {
        pairs
            .iter()
            .map(|(id, color)| (*id, (*color).to_owned()))
            .collect()
    }

    #[test]
    fn empty_palette_is_rejected() {
        let mut graph = path_graph();
        let palette = Palette::new(Vec::<String>::new());
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            graph.color_randomly(&palette, &mut rng),
            Err(GraphError::EmptyPalette)
        );
    }

    #[test]
    fn every_node_gets_a_palette_label() {
        let mut graph = path_graph();
        let palette = Palette::new(["red", "blue"]);
        let mut rng = StdRng::seed_from_u64(1);
        graph.color_randomly(&palette, &mut rng).expect("non-empty palette");

        for (_, color) in graph.nodes() {
            let color = color.expect("colored");
            assert!(palette.contains(&color));
        }
    }

    #[test]
    fn alternating_assignment_is_conflict_free() {
        // {0: red, 1: blue, 2: red} -> no edge shares a color.
        let mut graph = path_graph();
        graph.recolor(&assignment(&[(0, "red"), (1, "blue"), (2, "red")]));

        assert_eq!(graph.total_conflicts(), 0);
        assert!(graph.is_valid_coloring());
        assert!((graph.conflict_ratio() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn clashing_assignment_flags_exactly_one_edge() {
        // {0: red, 1: red, 2: blue} -> edge {0,1} conflicts, {1,2} does not.
        let mut graph = path_graph();
        graph.recolor(&assignment(&[(0, "red"), (1, "red"), (2, "blue")]));

        assert_eq!(graph.total_conflicts(), 1);
        assert!(!graph.is_valid_coloring());
        let edges = graph.edges();
        assert_eq!(edges[0], (0, 1, true));
        assert_eq!(edges[1], (1, 2, false));
        assert!((graph.conflict_ratio() - 0.5).abs() < 1e-10);
    }

    #[test]
    fn per_node_and_per_edge_counts_agree() {
        let mut graph = path_graph();
        graph.recolor(&assignment(&[(0, "red"), (1, "red"), (2, "red")]));

        let node_sum: usize = graph
            .nodes()
            .iter()
            .map(|(id, _)| graph.node_conflicts(*id).expect("node exists"))
            .sum();
        assert_eq!(node_sum / 2, graph.total_conflicts());
        assert_eq!(graph.total_conflicts(), 2);
        assert_eq!(graph.conflicted_nodes(), vec![(0, 1), (1, 2), (2, 1)]);
    }

    #[test]
    fn recolor_leaves_unlisted_nodes_unchanged() {
        let mut graph = path_graph();
        graph.recolor(&assignment(&[(0, "red"), (1, "blue"), (2, "red")]));
        graph.recolor(&assignment(&[(1, "red")]));

        assert_eq!(graph.color(0), Some("red"));
        assert_eq!(graph.color(1), Some("red"));
        assert_eq!(graph.color(2), Some("red"));
        assert_eq!(graph.total_conflicts(), 2);
    }

    #[test]
    fn recolor_ignores_ids_not_in_graph() {
        let mut graph = path_graph();
        graph.recolor(&assignment(&[(0, "red"), (99, "blue")]));
        assert_eq!(graph.color(0), Some("red"));
        assert!(!graph.contains_node(99));
    }

    #[test]
    fn assignment_snapshot_is_independent_of_graph() {
        let mut graph = path_graph();
        graph.recolor(&assignment(&[(0, "red"), (1, "blue"), (2, "red")]));
        let snapshot = graph.color_assignment();

        graph.recolor(&assignment(&[(0, "blue"), (1, "blue"), (2, "blue")]));
        assert_eq!(snapshot.get(&0).map(String::as_str), Some("red"));
        assert_eq!(graph.color(0), Some("blue"));
    }

    #[test]
    fn uncolored_nodes_absent_from_assignment() {
        let mut graph = path_graph();
        graph.recolor(&assignment(&[(0, "red")]));
        let snapshot = graph.color_assignment();
        assert_eq!(snapshot.len(), 1);
        assert!(snapshot.contains_key(&0));
    }

    #[test]
    fn fixed_seed_reproduces_coloring() {
        let palette = Palette::new(["red", "green", "blue"]);

        let mut first = path_graph();
        let mut rng = StdRng::seed_from_u64(99);
        first.color_randomly(&palette, &mut rng).expect("non-empty palette");

        let mut second = path_graph();
        let mut rng = StdRng::seed_from_u64(99);
        second.color_randomly(&palette, &mut rng).expect("non-empty palette");

        assert_eq!(first.color_assignment(), second.color_assignment());
        assert_eq!(first.total_conflicts(), second.total_conflicts());
    }
}
