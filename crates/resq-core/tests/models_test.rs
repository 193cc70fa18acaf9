use chrono::{TimeZone, Utc};
use resq_core::models::*;
use resq_core::ResqError;

#[test]
fn status_parses_exactly_the_four_wire_names() {
    for status in AlertStatus::ALL {
        assert_eq!(status.as_str().parse::<AlertStatus>().unwrap(), status);
    }
    for bad in ["closed", "Pending", "in progress", ""] {
        match bad.parse::<AlertStatus>() {
            Err(ResqError::InvalidStatus { value }) => assert_eq!(value, bad),
            other => panic!("expected InvalidStatus for {bad:?}, got {other:?}"),
        }
    }
}

#[test]
fn status_stages_follow_lifecycle_order() {
    let stages: Vec<u8> = AlertStatus::ALL.iter().map(|s| s.stage()).collect();
    assert_eq!(stages, vec![0, 1, 2, 3]);
    assert_eq!(AlertStatus::InProgress.label(), "in progress");
}

#[test]
fn emergency_type_parses_wire_names() {
    assert_eq!(
        "domestic_violence".parse::<EmergencyType>().unwrap(),
        EmergencyType::DomesticViolence
    );
    assert!(matches!(
        "fire".parse::<EmergencyType>(),
        Err(ResqError::InvalidEmergencyType { .. })
    ));
    assert_eq!(EmergencyType::Disaster.label(), "Disaster/Fire");
}

#[test]
fn priority_orders_by_rank() {
    assert!(PriorityLevel::Critical > PriorityLevel::High);
    assert!(PriorityLevel::High > PriorityLevel::Medium);
    assert_eq!(PriorityLevel::Critical.rank(), 3);
    assert_eq!(
        serde_json::to_string(&PriorityLevel::High).unwrap(),
        "\"HIGH\""
    );
}

#[test]
fn alert_deserializes_backend_row_with_null_media() {
    let json = r#"{
        "id": "b0c1",
        "incident_id": "INC-20250301-0000ABCD",
        "created_at": "2025-03-01T10:00:00Z",
        "phone_number": "+15550100",
        "location_lat": 40.7128,
        "location_lng": -74.006,
        "emergency_type": "medical",
        "safe_to_call": false,
        "status": "in_progress",
        "media_urls": null,
        "notes": null
    }"#;
    let alert: EmergencyAlert = serde_json::from_str(json).unwrap();
    assert_eq!(alert.emergency_type, EmergencyType::Medical);
    assert_eq!(alert.status, AlertStatus::InProgress);
    assert!(alert.media_urls.is_empty());
    assert!(alert.updated_at.is_none());
    assert!(alert.is_active());
    assert_eq!(
        alert.created_at,
        Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap()
    );
}

#[test]
fn alert_without_status_defaults_to_pending() {
    let json = r#"{
        "id": "x", "incident_id": "y", "created_at": "2025-03-01T10:00:00Z",
        "phone_number": "1", "location_lat": 0.0, "location_lng": 0.0,
        "emergency_type": "other", "safe_to_call": true
    }"#;
    let alert: EmergencyAlert = serde_json::from_str(json).unwrap();
    assert_eq!(alert.status, AlertStatus::Pending);
}

#[test]
fn geo_point_display_precisions() {
    let p = GeoPoint::new(40.712776, -74.005974);
    assert_eq!(p.display_short(), "40.7128, -74.0060");
    assert_eq!(p.display_precise(), "40.712776, -74.005974");
}

#[test]
fn new_alert_omits_missing_notes() {
    let alert = NewAlert::new(
        "+15550100",
        GeoPoint::new(1.0, 2.0),
        EmergencyType::Accident,
        true,
    );
    let value = serde_json::to_value(&alert).unwrap();
    assert!(value.get("notes").is_none());
    assert_eq!(value["emergency_type"], "accident");
    assert_eq!(value["media_urls"], serde_json::json!([]));
}

#[test]
fn evidence_extension_is_lowercased() {
    assert_eq!(
        EvidenceFile::new("IMG_001.JPEG", vec![]).extension().as_deref(),
        Some("jpeg")
    );
    assert_eq!(EvidenceFile::new("capture", vec![]).extension(), None);
    assert_eq!(
        EvidenceFile::new("file:///cache.d/photo", vec![]).extension(),
        None
    );
}
