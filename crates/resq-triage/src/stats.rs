use serde::Serialize;

use resq_core::models::{AlertStatus, EmergencyAlert, PriorityLevel};

use crate::priority::priority_of;

/// Header counters on the authority dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total: usize,
    /// Not resolved.
    pub active: usize,
    /// CRITICAL priority, including resolved alerts.
    pub critical: usize,
    pub in_progress: usize,
}

impl DashboardStats {
    pub fn from_alerts(alerts: &[EmergencyAlert]) -> Self {
        alerts.iter().fold(Self::default(), |mut stats, alert| {
            stats.total += 1;
            if alert.is_active() {
                stats.active += 1;
            }
            if priority_of(alert) == PriorityLevel::Critical {
                stats.critical += 1;
            }
            if alert.status == AlertStatus::InProgress {
                stats.in_progress += 1;
            }
            stats
        })
    }
}
