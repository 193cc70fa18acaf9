use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::ResqError;

/// Incident category chosen by the person raising the alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum EmergencyType {
    DomesticViolence,
    Accident,
    Disaster,
    Medical,
    Other,
}

impl EmergencyType {
    pub const ALL: [EmergencyType; 5] = [
        Self::DomesticViolence,
        Self::Accident,
        Self::Disaster,
        Self::Medical,
        Self::Other,
    ];

    /// Wire name, as stored in the backend.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DomesticViolence => "domestic_violence",
            Self::Accident => "accident",
            Self::Disaster => "disaster",
            Self::Medical => "medical",
            Self::Other => "other",
        }
    }

    /// Dashboard label.
    pub fn label(self) -> &'static str {
        match self {
            Self::DomesticViolence => "Domestic Violence",
            Self::Accident => "Accident",
            Self::Disaster => "Disaster/Fire",
            Self::Medical => "Medical Emergency",
            Self::Other => "Other Emergency",
        }
    }
}

impl fmt::Display for EmergencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmergencyType {
    type Err = ResqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ResqError::InvalidEmergencyType {
                value: s.to_string(),
            })
    }
}
