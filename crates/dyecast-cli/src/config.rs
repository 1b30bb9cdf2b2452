//! Optional TOML defaults file.
//!
//! Flags always win; the file only supplies defaults for what the user did
//! not pass. Every field is optional in the file, falling back to built-in
//! values, so an empty file is valid.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Defaults applied when a flag is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Palette labels used when no `--color` flag is given.
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,
    /// Monte Carlo trial budget.
    #[serde(default = "default_trials")]
    pub trials: usize,
    /// Generator density factor in `(0, 1]`.
    #[serde(default = "default_density")]
    pub density: f64,
    /// Las Vegas attempt cap.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
    /// Seed used when `--seed` is absent.
    #[serde(default)]
    pub seed: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            palette: default_palette(),
            trials: default_trials(),
            density: default_density(),
            max_attempts: default_max_attempts(),
            seed: 0,
        }
    }
}

fn default_palette() -> Vec<String> {
    vec!["red".to_owned(), "green".to_owned(), "blue".to_owned()]
}

const fn default_trials() -> usize {
    100
}

const fn default_density() -> f64 {
    0.25
}

const fn default_max_attempts() -> usize {
    dyecast_sim::DEFAULT_MAX_ATTEMPTS
}

impl Defaults {
    /// Load defaults from a TOML file, or built-ins when `path` is `None`.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or is not valid TOML.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("parsing config file {}", path.display()))
    }
}
