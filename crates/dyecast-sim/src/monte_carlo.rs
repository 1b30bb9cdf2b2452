//! Monte Carlo trial runner: repeated random colorings of one shared graph.
//!
//! Trials are not isolated worlds. Every iteration recolors the same live
//! graph, so each trial overwrites the previous trial's coloring; what
//! survives is the [`TrialRecord`] snapshot appended to the history. Given a
//! fixed seed, graph, and palette, the record sequence is reproducible
//! bit for bit.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::info;

use dyecast_core::{ColorGraph, GraphError, Palette};

use crate::trial::{TrialHistory, TrialRecord};

/// Seeded run parameters for [`run_seeded`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonteCarloConfig {
    /// Number of independent coloring trials to execute.
    pub trials: usize,
    /// Seed for the run's `StdRng`.
    pub seed: u64,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self { trials: 100, seed: 0 }
    }
}

/// Aggregate outcome of a Monte Carlo run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonteCarloReport {
    /// One record per trial, in execution order.
    pub history: TrialHistory,
    /// Trials that produced a conflict-free coloring.
    pub successes: usize,
    /// Wall time spent across all trials.
    pub elapsed: Duration,
}

impl MonteCarloReport {
    /// Fraction of trials that succeeded, in `0.0..=1.0`; `0.0` for an
    /// empty run.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn success_rate(&self) -> f64 {
        if self.history.is_empty() {
            return 0.0;
        }
        self.successes as f64 / self.history.len() as f64
    }
}

/// Run `trials` random colorings of `graph`, recording every outcome.
///
/// Each iteration colors the shared graph from `palette`, snapshots the
/// assignment and conflict count into a [`TrialRecord`], and counts the
/// trial as a success when no edge conflicts. `trials == 0` yields an empty
/// history and zero successes.
///
/// # Errors
///
/// Returns [`GraphError::EmptyPalette`] when the palette has no labels.
pub fn run_trials(
    graph: &mut ColorGraph,
    palette: &Palette,
    trials: usize,
    rng: &mut impl Rng,
) -> Result<MonteCarloReport, GraphError> {
    let mut history = TrialHistory::new();
    let mut successes = 0_usize;
    let started = Instant::now();

    for trial in 1..=trials {
        graph.color_randomly(palette, rng)?;
        let conflicts = graph.total_conflicts();
        if conflicts == 0 {
            successes += 1;
        }
        history.push(TrialRecord {
            trial,
            conflicts,
            assignment: graph.color_assignment(),
        });
    }

    let elapsed = started.elapsed();
    info!(
        trials,
        successes,
        elapsed_ms = elapsed.as_millis(),
        "monte carlo run complete"
    );
    Ok(MonteCarloReport {
        history,
        successes,
        elapsed,
    })
}

/// Run a Monte Carlo campaign from a seeded config.
///
/// Builds a `StdRng` from `config.seed` so identical configs over identical
/// graphs reproduce identical histories.
///
/// # Errors
///
/// Returns [`GraphError::EmptyPalette`] when the palette has no labels.
pub fn run_seeded(
    graph: &mut ColorGraph,
    palette: &Palette,
    config: &MonteCarloConfig,
) -> Result<MonteCarloReport, GraphError> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    run_trials(graph, palette, config.trials, &mut rng)
}

/// Replay a historical record onto the live graph and recount conflicts.
///
/// Applies `record.assignment` via `recolor` and returns the resulting
/// `total_conflicts()`. The value must equal `record.conflicts`; a
/// divergence indicates a bug in recoloring or conflict bookkeeping.
pub fn replay_statistics(graph: &mut ColorGraph, record: &TrialRecord) -> usize {
    graph.recolor(&record.assignment);
    graph.total_conflicts()
}
