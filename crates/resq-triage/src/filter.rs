//! Dashboard filters. Filtering never mutates the input list.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use resq_core::errors::ResqError;
use resq_core::models::{EmergencyAlert, PriorityLevel};

use crate::ordering::sorted;
use crate::priority::priority_of;
use crate::view::TriagedAlert;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertFilter {
    #[default]
    All,
    /// Everything not yet resolved.
    Active,
    /// Derived priority is CRITICAL, regardless of status.
    Critical,
}

impl AlertFilter {
    pub const ALL: [AlertFilter; 3] = [Self::All, Self::Active, Self::Critical];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Critical => "critical",
        }
    }

    pub fn matches(self, alert: &EmergencyAlert) -> bool {
        match self {
            Self::All => true,
            Self::Active => alert.is_active(),
            Self::Critical => priority_of(alert) == PriorityLevel::Critical,
        }
    }

    /// Matching alerts in dashboard order.
    pub fn apply(self, alerts: &[EmergencyAlert]) -> Vec<TriagedAlert> {
        sorted(alerts)
            .into_iter()
            .filter(|a| self.matches(a))
            .map(TriagedAlert::from)
            .collect()
    }

    /// Filter selected after the user picks `selected` while `self` is shown.
    /// Picking the filter that is already shown falls back to `All`.
    pub fn toggle(self, selected: AlertFilter) -> AlertFilter {
        if selected == self {
            Self::All
        } else {
            selected
        }
    }
}

impl fmt::Display for AlertFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlertFilter {
    type Err = ResqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| ResqError::InvalidFilter {
                value: s.to_string(),
            })
    }
}
