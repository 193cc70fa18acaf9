//! Dashboard sort order: priority rank descending, then newest first,
//! then `id` ascending so ties are deterministic.

use std::cmp::Ordering;

use resq_core::models::EmergencyAlert;

use crate::priority::priority_of;

/// Comparator for the dashboard order.
pub fn compare(a: &EmergencyAlert, b: &EmergencyAlert) -> Ordering {
    priority_of(b)
        .rank()
        .cmp(&priority_of(a).rank())
        .then_with(|| b.created_at.cmp(&a.created_at))
        .then_with(|| a.id.cmp(&b.id))
}

/// Sort in place.
pub fn sort_alerts(alerts: &mut [EmergencyAlert]) {
    alerts.sort_by(compare);
}

/// Sorted copy; the input is left untouched.
pub fn sorted(alerts: &[EmergencyAlert]) -> Vec<EmergencyAlert> {
    let mut out = alerts.to_vec();
    sort_alerts(&mut out);
    out
}
