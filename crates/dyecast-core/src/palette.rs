//! The color palette: an ordered set of distinct labels.
//!
//! Construction de-duplicates while preserving first-occurrence order, so
//! `["red", "blue", "red"]` and `["red", "blue"]` are the same palette.
//! An empty palette is representable — emptiness is rejected where it
//! matters, at coloring time, with [`GraphError::EmptyPalette`].
//!
//! [`GraphError::EmptyPalette`]: crate::error::GraphError::EmptyPalette

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Ordered collection of distinct color labels available for assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    labels: Vec<String>,
}

impl Palette {
    /// Build a palette from labels, dropping duplicates but keeping the
    /// order of first occurrence.
    #[must_use]
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = Vec::new();
        for label in labels {
            let label = label.into();
            if !seen.contains(&label) {
                seen.push(label);
            }
        }
        Self { labels: seen }
    }

    /// Number of distinct labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True when the palette has no labels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The labels, in palette order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Test whether `label` is one of the palette's colors.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// Draw one label uniformly at random, or `None` if the palette is
    /// empty. Draws are independent and with replacement.
    pub fn draw(&self, rng: &mut impl Rng) -> Option<&str> {
        if self.labels.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.labels.len());
        Some(&self.labels[index])
    }
}
