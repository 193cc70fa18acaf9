//! InMemoryAlertStore: DashMap-backed store keyed by incident id.

use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use uuid::Uuid;

use resq_core::errors::{ResqResult, StoreError};
use resq_core::models::{AlertReceipt, AlertStatus, AuthorityContact, EmergencyAlert, NewAlert};
use resq_core::traits::IAlertStore;

use crate::incident_id::incident_id;

/// Concurrent in-process alert store.
///
/// Writes to one incident are serialized by the map's shard lock; there is
/// still no atomic append across `get_media_urls` and `update_media_urls`.
#[derive(Debug, Default)]
pub struct InMemoryAlertStore {
    alerts: DashMap<String, EmergencyAlert>,
    contacts: DashMap<String, AuthorityContact>,
}

impl InMemoryAlertStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an authority contact.
    pub fn add_contact(&self, contact: AuthorityContact) {
        self.contacts.insert(contact.id.clone(), contact);
    }

    pub fn get(&self, incident_id: &str) -> Option<EmergencyAlert> {
        self.alerts.get(incident_id).map(|a| a.clone())
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    fn modify<T>(&self, incident_id: &str, f: impl FnOnce(&mut EmergencyAlert) -> T) -> ResqResult<T> {
        let mut entry = self
            .alerts
            .get_mut(incident_id)
            .ok_or_else(|| StoreError::NotFound {
                incident_id: incident_id.to_string(),
            })?;
        Ok(f(entry.value_mut()))
    }
}

impl IAlertStore for InMemoryAlertStore {
    async fn create(&self, alert: NewAlert) -> ResqResult<AlertReceipt> {
        let now = Utc::now();
        let id = Uuid::new_v4();
        let mut record = EmergencyAlert {
            id: id.to_string(),
            incident_id: incident_id(now, &id),
            phone_number: alert.phone_number,
            location_lat: alert.location_lat,
            location_lng: alert.location_lng,
            emergency_type: alert.emergency_type,
            safe_to_call: alert.safe_to_call,
            status: AlertStatus::Pending,
            created_at: now,
            updated_at: None,
            media_urls: alert.media_urls,
            notes: alert.notes,
        };

        // Eight hex digits collide eventually; re-roll until the key is free.
        loop {
            match self.alerts.entry(record.incident_id.clone()) {
                Entry::Vacant(slot) => {
                    let receipt = AlertReceipt {
                        id: record.id.clone(),
                        incident_id: record.incident_id.clone(),
                    };
                    slot.insert(record);
                    tracing::debug!(incident_id = %receipt.incident_id, "alert stored");
                    return Ok(receipt);
                }
                Entry::Occupied(_) => {
                    record.incident_id = incident_id(now, &Uuid::new_v4());
                }
            }
        }
    }

    async fn list(&self) -> ResqResult<Vec<EmergencyAlert>> {
        Ok(self.alerts.iter().map(|e| e.value().clone()).collect())
    }

    async fn update_status(&self, incident_id: &str, status: AlertStatus) -> ResqResult<()> {
        self.modify(incident_id, |alert| {
            alert.status = status;
            alert.updated_at = Some(Utc::now());
        })
    }

    async fn update_media_urls(&self, incident_id: &str, urls: Vec<String>) -> ResqResult<()> {
        self.modify(incident_id, |alert| {
            alert.media_urls = urls;
            alert.updated_at = Some(Utc::now());
        })
    }

    async fn get_media_urls(&self, incident_id: &str) -> ResqResult<Vec<String>> {
        self.alerts
            .get(incident_id)
            .map(|a| a.media_urls.clone())
            .ok_or_else(|| {
                StoreError::NotFound {
                    incident_id: incident_id.to_string(),
                }
                .into()
            })
    }

    async fn list_authority_contacts(&self) -> ResqResult<Vec<AuthorityContact>> {
        let mut contacts: Vec<_> = self
            .contacts
            .iter()
            .filter(|c| c.is_active)
            .map(|c| c.value().clone())
            .collect();
        contacts.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(contacts)
    }
}
