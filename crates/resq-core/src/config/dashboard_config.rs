use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Authority dashboard configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Interval between background refreshes (seconds).
    pub poll_interval_secs: u64,
    /// Filter applied when the dashboard opens: "all", "active", "critical".
    pub default_filter: String,
}

impl DashboardConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: defaults::DEFAULT_POLL_INTERVAL_SECS,
            default_filter: defaults::DEFAULT_FILTER.to_string(),
        }
    }
}
