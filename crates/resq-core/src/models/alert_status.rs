use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::ResqError;

/// Alert status. The lifecycle runs pending -> received -> in_progress -> resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
    #[default]
    Pending,
    Received,
    InProgress,
    Resolved,
}

impl AlertStatus {
    /// All statuses in lifecycle order.
    pub const ALL: [AlertStatus; 4] = [
        Self::Pending,
        Self::Received,
        Self::InProgress,
        Self::Resolved,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Received => "received",
            Self::InProgress => "in_progress",
            Self::Resolved => "resolved",
        }
    }

    /// Position in the lifecycle, starting at 0 for `Pending`.
    pub fn stage(self) -> u8 {
        match self {
            Self::Pending => 0,
            Self::Received => 1,
            Self::InProgress => 2,
            Self::Resolved => 3,
        }
    }

    pub fn is_resolved(self) -> bool {
        self == Self::Resolved
    }

    /// Human-readable form, e.g. "in progress".
    pub fn label(self) -> String {
        self.as_str().replace('_', " ")
    }
}

impl fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlertStatus {
    type Err = ResqError;

    /// Accepts exactly the four wire names; anything else is `InvalidStatus`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| ResqError::InvalidStatus {
                value: s.to_string(),
            })
    }
}
