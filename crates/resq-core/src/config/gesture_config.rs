use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Multi-tap trigger configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Taps needed to confirm an alert.
    pub required_taps: u32,
    /// Maximum gap between two taps of one sequence (milliseconds).
    pub tap_timeout_ms: u64,
}

impl GestureConfig {
    pub fn tap_timeout(&self) -> Duration {
        Duration::from_millis(self.tap_timeout_ms)
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            required_taps: defaults::DEFAULT_REQUIRED_TAPS,
            tap_timeout_ms: defaults::DEFAULT_TAP_TIMEOUT_MS,
        }
    }
}
