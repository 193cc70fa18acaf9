use chrono::{DateTime, TimeZone, Utc};
use resq_core::models::{AlertStatus, EmergencyAlert, EmergencyType};

/// Fixed timestamp `minutes` after 2024-01-01T00:00:00Z.
pub fn at(minutes: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().unwrap_or_default()
        + chrono::Duration::minutes(minutes)
}

/// Start building an alert with the given incident id.
pub fn alert(incident_id: &str) -> AlertBuilder {
    AlertBuilder::new(incident_id)
}

/// Builder for [`EmergencyAlert`] records with sensible test defaults.
#[derive(Debug, Clone)]
pub struct AlertBuilder {
    alert: EmergencyAlert,
}

impl AlertBuilder {
    pub fn new(incident_id: &str) -> Self {
        Self {
            alert: EmergencyAlert {
                id: format!("id-{incident_id}"),
                incident_id: incident_id.to_string(),
                phone_number: "+15550100".to_string(),
                location_lat: 40.7128,
                location_lng: -74.006,
                emergency_type: EmergencyType::Accident,
                safe_to_call: true,
                status: AlertStatus::Pending,
                created_at: at(0),
                updated_at: None,
                media_urls: Vec::new(),
                notes: None,
            },
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.alert.id = id.to_string();
        self
    }

    pub fn emergency_type(mut self, emergency_type: EmergencyType) -> Self {
        self.alert.emergency_type = emergency_type;
        self
    }

    pub fn safe_to_call(mut self, safe: bool) -> Self {
        self.alert.safe_to_call = safe;
        self
    }

    pub fn status(mut self, status: AlertStatus) -> Self {
        self.alert.status = status;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.alert.created_at = created_at;
        self
    }

    /// Shorthand for `created_at(at(minutes))`.
    pub fn created_minute(self, minutes: i64) -> Self {
        self.created_at(at(minutes))
    }

    pub fn media(mut self, urls: &[&str]) -> Self {
        self.alert.media_urls = urls.iter().map(|u| u.to_string()).collect();
        self
    }

    pub fn build(self) -> EmergencyAlert {
        self.alert
    }
}
