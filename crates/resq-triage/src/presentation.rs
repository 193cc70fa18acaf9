//! Formatting helpers for dashboard rows.

use chrono::{DateTime, Utc};
use serde::Serialize;

use resq_core::constants::SHORT_INCIDENT_ID_LEN;
use resq_core::models::EmergencyAlert;

/// Relative age of an alert: "Just now", "5m ago", "3h ago", "2d ago".
///
/// Timestamps in the future read as "Just now".
pub fn time_since(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - created_at).num_minutes();
    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{minutes}m ago")
    } else if minutes < 60 * 24 {
        format!("{}h ago", minutes / 60)
    } else {
        format!("{}d ago", minutes / (60 * 24))
    }
}

/// Last eight characters of an incident id; shorter ids are returned whole.
pub fn short_incident_id(incident_id: &str) -> &str {
    let count = incident_id.chars().count();
    if count <= SHORT_INCIDENT_ID_LEN {
        return incident_id;
    }
    let start = incident_id
        .char_indices()
        .nth(count - SHORT_INCIDENT_ID_LEN)
        .map_or(0, |(i, _)| i);
    &incident_id[start..]
}

/// How an authority may contact the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ContactAdvisory {
    SafeToCall,
    /// The caller must not be phoned; respond silently.
    SilentResponseRequired,
}

impl ContactAdvisory {
    pub fn message(self) -> &'static str {
        match self {
            Self::SafeToCall => "Safe to call",
            Self::SilentResponseRequired => "DO NOT CALL - Silent response required",
        }
    }
}

pub fn contact_advisory(alert: &EmergencyAlert) -> ContactAdvisory {
    if alert.safe_to_call {
        ContactAdvisory::SafeToCall
    } else {
        ContactAdvisory::SilentResponseRequired
    }
}
