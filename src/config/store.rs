//! Outfit and moodboard store configuration

use serde::Deserialize;

/// In-memory store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Pause every store call as if it crossed a network
    #[serde(default = "default_true")]
    pub simulate_latency: bool,

    /// Start from the bundled outfit and moodboard dataset
    #[serde(default = "default_true")]
    pub seed: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            simulate_latency: true,
            seed: true,
        }
    }
}

fn default_true() -> bool {
    true
}
