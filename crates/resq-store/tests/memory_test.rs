use std::collections::HashSet;

use proptest::prelude::*;
use resq_core::errors::{ResqError, StoreError};
use resq_core::models::{AlertStatus, AuthorityContact, EmergencyType, GeoPoint, NewAlert};
use resq_core::traits::IAlertStore;
use resq_store::InMemoryAlertStore;

fn new_alert(phone: &str) -> NewAlert {
    NewAlert::new(phone, GeoPoint::new(40.7128, -74.006), EmergencyType::Medical, false)
}

fn is_incident_id(id: &str) -> bool {
    let parts: Vec<&str> = id.split('-').collect();
    parts.len() == 3
        && parts[0] == "INC"
        && parts[1].len() == 8
        && parts[1].chars().all(|c| c.is_ascii_digit())
        && parts[2].len() == 8
        && parts[2].chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase())
}

#[tokio::test]
async fn create_assigns_identity_and_pending_status() {
    let store = InMemoryAlertStore::new();
    let receipt = store.create(new_alert("+15550100")).await.unwrap();

    assert!(is_incident_id(&receipt.incident_id), "{}", receipt.incident_id);
    assert!(uuid::Uuid::parse_str(&receipt.id).is_ok());

    let stored = store.get(&receipt.incident_id).unwrap();
    assert_eq!(stored.status, AlertStatus::Pending);
    assert_eq!(stored.updated_at, None);
    assert!(stored.media_urls.is_empty());
    assert_eq!(stored.phone_number, "+15550100");
}

#[tokio::test]
async fn status_and_media_updates_round_trip() {
    let store = InMemoryAlertStore::new();
    let receipt = store.create(new_alert("+15550100")).await.unwrap();
    let id = receipt.incident_id.as_str();

    store.update_status(id, AlertStatus::InProgress).await.unwrap();
    store
        .update_media_urls(id, vec!["a".to_string(), "b".to_string()])
        .await
        .unwrap();

    assert_eq!(store.get_media_urls(id).await.unwrap(), vec!["a", "b"]);
    let stored = store.get(id).unwrap();
    assert_eq!(stored.status, AlertStatus::InProgress);
    assert!(stored.updated_at.is_some());
}

#[tokio::test]
async fn unknown_incident_is_not_found_everywhere() {
    let store = InMemoryAlertStore::new();
    let not_found = |e: ResqError| matches!(e, ResqError::Store(StoreError::NotFound { .. }));

    assert!(not_found(store.update_status("INC-X", AlertStatus::Received).await.unwrap_err()));
    assert!(not_found(store.update_media_urls("INC-X", vec![]).await.unwrap_err()));
    assert!(not_found(store.get_media_urls("INC-X").await.unwrap_err()));
}

#[tokio::test]
async fn only_active_contacts_are_listed() {
    let store = InMemoryAlertStore::new();
    for (id, name, active) in [("1", "Fire Station 12", true), ("2", "Ambulance Desk", true), ("3", "Closed Precinct", false)] {
        store.add_contact(AuthorityContact {
            id: id.to_string(),
            name: name.to_string(),
            phone_number: format!("+1555090{id}"),
            email: format!("desk{id}@city.example"),
            department: "dispatch".to_string(),
            is_active: active,
        });
    }

    let names: Vec<_> = store
        .list_authority_contacts()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Ambulance Desk", "Fire Station 12"]);
}

proptest! {
    #[test]
    fn every_create_gets_a_distinct_incident(count in 1usize..40) {
        let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let store = InMemoryAlertStore::new();
        let ids: HashSet<String> = rt.block_on(async {
            let mut ids = HashSet::new();
            for i in 0..count {
                ids.insert(store.create(new_alert(&format!("+1555{i:04}"))).await.unwrap().incident_id);
            }
            ids
        });
        prop_assert_eq!(ids.len(), count);
        prop_assert_eq!(store.len(), count);
        prop_assert_eq!(rt.block_on(store.list()).unwrap().len(), count);
    }
}
