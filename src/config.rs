//! Quiz settings loaded from an optional JSON file.

use crate::error::Result;
use crate::models::{DEFAULT_DECK_LIMIT, MIN_DECK_SIZE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Settings for a quiz run. Missing keys fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Maximum number of words drawn into one session.
    pub deck_limit: usize,
    /// Show the prompt word and the options in lower case.
    pub lowercase: bool,
    /// Fixed seed for reproducible sessions.
    pub seed: Option<u64>,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            deck_limit: DEFAULT_DECK_LIMIT,
            lowercase: true,
            seed: None,
            window_width: 500.0,
            window_height: 700.0,
        }
    }
}

impl QuizConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config: QuizConfig = serde_json::from_str(&content)?;

        info!(path = %path.display(), "config loaded");
        Ok(config.clamped())
    }

    /// Raises a `deck_limit` below the smallest playable deck, which would make every
    /// session fail to start.
    fn clamped(mut self) -> Self {
        if self.deck_limit < MIN_DECK_SIZE {
            warn!(
                deck_limit = self.deck_limit,
                min = MIN_DECK_SIZE,
                "deck_limit too small, raising it"
            );
            self.deck_limit = MIN_DECK_SIZE;
        }
        self
    }

    /// Loads the config at `path`, falling back to defaults when there is no path or
    /// the file can't be read.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        Self::load(path).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "using default config");
            Self::default()
        })
    }
}
