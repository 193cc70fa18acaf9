use serde::{Deserialize, Serialize};

use resq_core::errors::{ResqError, ResqResult};
use resq_core::models::{EmergencyType, GeoPoint, NewAlert};

/// What the victim chose on the alert screen, before a location is attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertIntent {
    pub phone_number: String,
    pub emergency_type: EmergencyType,
    /// Whether responders may call back.
    pub safe_to_call: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

impl AlertIntent {
    pub fn new(phone_number: impl Into<String>, emergency_type: EmergencyType, safe_to_call: bool) -> Self {
        Self {
            phone_number: phone_number.into(),
            emergency_type,
            safe_to_call,
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn validate(&self) -> ResqResult<()> {
        if self.phone_number.trim().is_empty() {
            return Err(ResqError::InvalidIntent {
                reason: "phone number is required".to_string(),
            });
        }
        Ok(())
    }

    /// Create payload for the store at `location`.
    pub fn to_new_alert(&self, location: GeoPoint) -> NewAlert {
        let mut alert = NewAlert::new(
            self.phone_number.trim(),
            location,
            self.emergency_type,
            self.safe_to_call,
        );
        alert.notes = self.notes.clone().filter(|n| !n.trim().is_empty());
        alert
    }
}
