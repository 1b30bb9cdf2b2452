//! dyecast-sim: trial runners over the dyecast graph model.
//!
//! Two probabilistic schemes share one record format:
//!
//! - **Monte Carlo** ([`monte_carlo`]): run a fixed trial budget, record
//!   every outcome, report the empirical success rate of pure random
//!   coloring.
//! - **Las Vegas** ([`las_vegas`]): recolor until the first conflict-free
//!   coloring or an attempt cap.
//!
//! Histories are append-only and replayable: any historical record can be
//! re-applied to the live graph and its conflict count re-derived
//! ([`monte_carlo::replay_statistics`]).
//!
//! # Conventions
//!
//! - **Errors**: typed `GraphError` results bubbled up from the core.
//! - **Logging**: `tracing` macros (`info!` at run completion).
//! - **Randomness**: explicit `&mut impl Rng`; seeded entry points build a
//!   `StdRng` from a config seed.

pub mod las_vegas;
pub mod monte_carlo;
pub mod trial;

pub use las_vegas::{DEFAULT_MAX_ATTEMPTS, LasVegasReport, run_until_valid};
pub use monte_carlo::{
    MonteCarloConfig, MonteCarloReport, replay_statistics, run_seeded, run_trials,
};
pub use trial::{TrialHistory, TrialRecord};
