//! Priority derivation.
//!
//! Domestic violence and medical incidents are high risk. A high-risk caller
//! who cannot safely take a callback is CRITICAL, one who can is HIGH.
//! Everything else is MEDIUM.

use resq_core::models::{EmergencyAlert, EmergencyType, PriorityLevel};

/// Incident types that escalate above MEDIUM.
pub fn is_high_risk(emergency_type: EmergencyType) -> bool {
    matches!(
        emergency_type,
        EmergencyType::DomesticViolence | EmergencyType::Medical
    )
}

/// Total, deterministic priority of an alert's type and callback safety.
pub fn derive_priority(emergency_type: EmergencyType, safe_to_call: bool) -> PriorityLevel {
    match (is_high_risk(emergency_type), safe_to_call) {
        (true, false) => PriorityLevel::Critical,
        (true, true) => PriorityLevel::High,
        (false, _) => PriorityLevel::Medium,
    }
}

/// Priority of a stored alert. Recomputed on every call.
pub fn priority_of(alert: &EmergencyAlert) -> PriorityLevel {
    derive_priority(alert.emergency_type, alert.safe_to_call)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_all_ten_combinations() {
        use EmergencyType::*;
        use PriorityLevel::*;
        let expected = [
            (DomesticViolence, false, Critical),
            (DomesticViolence, true, High),
            (Medical, false, Critical),
            (Medical, true, High),
            (Accident, false, Medium),
            (Accident, true, Medium),
            (Disaster, false, Medium),
            (Disaster, true, Medium),
            (Other, false, Medium),
            (Other, true, Medium),
        ];
        for (ty, safe, priority) in expected {
            assert_eq!(derive_priority(ty, safe), priority, "{ty} safe={safe}");
        }
    }
}
