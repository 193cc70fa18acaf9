use serde::{Deserialize, Serialize};

use super::{EmergencyType, GeoPoint};

/// Create payload sent to the Alert Store. The store assigns `id`,
/// `incident_id`, `created_at`, and the initial `pending` status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAlert {
    pub phone_number: String,
    pub location_lat: f64,
    pub location_lng: f64,
    pub emergency_type: EmergencyType,
    pub safe_to_call: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub media_urls: Vec<String>,
}

impl NewAlert {
    pub fn new(
        phone_number: impl Into<String>,
        location: GeoPoint,
        emergency_type: EmergencyType,
        safe_to_call: bool,
    ) -> Self {
        Self {
            phone_number: phone_number.into(),
            location_lat: location.lat,
            location_lng: location.lng,
            emergency_type,
            safe_to_call,
            notes: None,
            media_urls: Vec::new(),
        }
    }
}

/// Identifiers issued by the store for a newly created alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertReceipt {
    pub id: String,
    pub incident_id: String,
}
