//! Incident id generation: `INC-YYYYMMDD-XXXXXXXX`.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use resq_core::constants::INCIDENT_ID_PREFIX;

/// Human-facing incident id for an alert created at `at`.
///
/// The suffix is the first eight hex digits of `seed`, uppercased.
pub fn incident_id(at: DateTime<Utc>, seed: &Uuid) -> String {
    let hex = seed.simple().to_string().to_ascii_uppercase();
    format!("{INCIDENT_ID_PREFIX}-{}-{}", at.format("%Y%m%d"), &hex[..8])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn format_is_prefix_date_and_hex() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 23, 59, 0).unwrap();
        let seed = Uuid::parse_str("7f3a91c2-0000-4000-8000-000000000000").unwrap();
        assert_eq!(incident_id(at, &seed), "INC-20240301-7F3A91C2");
    }
}
