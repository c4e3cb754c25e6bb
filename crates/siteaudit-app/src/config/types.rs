//! Configuration types

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Application settings (.siteaudit/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub scan: ScanSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Simulated scan settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScanSettings {
    /// Simulated scan latency in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// Fixed seed for the random summary (repeatable runs)
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            seed: None,
        }
    }
}

impl ScanSettings {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

fn default_delay_ms() -> u64 {
    3_000
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Show the key hint bar at the bottom of the screen
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_key_hints: true,
        }
    }
}

fn default_true() -> bool {
    true
}
