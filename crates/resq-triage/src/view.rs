use serde::Serialize;

use resq_core::models::{EmergencyAlert, PriorityLevel};

use crate::priority::priority_of;

/// An alert paired with its derived priority, as one dashboard row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TriagedAlert {
    #[serde(flatten)]
    pub alert: EmergencyAlert,
    pub priority: PriorityLevel,
}

impl From<EmergencyAlert> for TriagedAlert {
    fn from(alert: EmergencyAlert) -> Self {
        let priority = priority_of(&alert);
        Self { alert, priority }
    }
}

impl TriagedAlert {
    pub fn incident_id(&self) -> &str {
        &self.alert.incident_id
    }
}
