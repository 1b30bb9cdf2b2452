//! dyecast-core: graph model, coloring engine, and random graph generator.
//!
//! The model is an undirected graph whose nodes carry nullable color labels
//! drawn from a caller-supplied [`Palette`]. Coloring is pure random
//! guessing — uniform, independent, with replacement — and the crate's job
//! is to keep conflict bookkeeping exact while callers measure how often the
//! guess comes out conflict-free.
//!
//! # Conventions
//!
//! - **Errors**: typed [`GraphError`] results; no panics in library paths.
//! - **Logging**: `tracing` macros (`debug!` at operation milestones).
//! - **Randomness**: explicit `&mut impl Rng` parameters; callers seed
//!   `StdRng` for reproducible runs.

pub mod color;
pub mod error;
pub mod generate;
pub mod graph;
pub mod palette;
pub mod stats;

pub use color::ColorAssignment;
pub use error::GraphError;
pub use graph::{ColorGraph, NodeId};
pub use palette::Palette;
pub use stats::GraphStats;
