use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use super::{AlertStatus, EmergencyType, GeoPoint};

/// An emergency alert as held by the Alert Store.
///
/// `incident_id` and `created_at` never change after creation. `media_urls`
/// only grows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EmergencyAlert {
    /// Store-assigned identifier.
    pub id: String,
    /// Human-facing incident identifier.
    pub incident_id: String,
    pub phone_number: String,
    pub location_lat: f64,
    pub location_lng: f64,
    pub emergency_type: EmergencyType,
    /// Whether the caller can safely receive a callback.
    pub safe_to_call: bool,
    #[serde(default)]
    pub status: AlertStatus,
    pub created_at: DateTime<Utc>,
    /// Set on the first status or media update.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub media_urls: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl EmergencyAlert {
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.location_lat, self.location_lng)
    }

    /// Anything not yet resolved.
    pub fn is_active(&self) -> bool {
        !self.status.is_resolved()
    }
}

/// The backend returns `null` for alerts created without media.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
