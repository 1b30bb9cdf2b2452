//! Las Vegas runner: recolor until the first conflict-free coloring.
//!
//! Unlike the Monte Carlo runner, which always executes its full trial
//! budget, this loop stops at the first success. The attempt cap exists only
//! to bound latency on graphs the palette cannot satisfy — a triangle with
//! one color never terminates without it.

use std::time::{Duration, Instant};

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use dyecast_core::{ColorGraph, GraphError, Palette};

use crate::trial::{TrialHistory, TrialRecord};

/// Attempt cap used by callers that do not pick their own.
pub const DEFAULT_MAX_ATTEMPTS: usize = 100_000;

/// Outcome of a Las Vegas run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LasVegasReport {
    /// One record per attempt, in order; the last record is the success
    /// when `solved` is true.
    pub history: TrialHistory,
    /// Attempts executed (equals `history.len()`).
    pub attempts: usize,
    /// True iff a conflict-free coloring was found within the cap.
    pub solved: bool,
    /// Wall time spent across all attempts.
    pub elapsed: Duration,
}

/// Recolor `graph` randomly until a valid coloring appears or
/// `max_attempts` is exhausted.
///
/// Every attempt is recorded in the same form as a Monte Carlo trial.
/// `max_attempts == 0` yields an empty, unsolved report.
///
/// # Errors
///
/// Returns [`GraphError::EmptyPalette`] when the palette has no labels.
pub fn run_until_valid(
    graph: &mut ColorGraph,
    palette: &Palette,
    max_attempts: usize,
    rng: &mut impl Rng,
) -> Result<LasVegasReport, GraphError> {
    let mut history = TrialHistory::new();
    let mut solved = false;
    let started = Instant::now();

    for attempt in 1..=max_attempts {
        graph.color_randomly(palette, rng)?;
        let conflicts = graph.total_conflicts();
        history.push(TrialRecord {
            trial: attempt,
            conflicts,
            assignment: graph.color_assignment(),
        });
        if conflicts == 0 {
            solved = true;
            break;
        }
    }

    let attempts = history.len();
    let elapsed = started.elapsed();
    info!(
        attempts,
        solved,
        elapsed_ms = elapsed.as_millis(),
        "las vegas run complete"
    );
    Ok(LasVegasReport {
        history,
        attempts,
        solved,
        elapsed,
    })
}
