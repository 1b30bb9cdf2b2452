//! Output rendering: human-readable text or JSON.

use anyhow::Result;
use serde::Serialize;

/// How command results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Plain text for people.
    Human,
    /// Pretty-printed JSON for machines.
    Json,
}

impl OutputMode {
    /// Print `value` as JSON, or the rendered human text.
    ///
    /// # Errors
    ///
    /// Fails only when JSON serialization fails.
    pub fn emit<T: Serialize>(self, value: &T, human: impl FnOnce() -> String) -> Result<()> {
        match self {
            Self::Json => println!("{}", serde_json::to_string_pretty(value)?),
            Self::Human => println!("{}", human()),
        }
        Ok(())
    }
}
