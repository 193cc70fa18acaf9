//! In-memory fakes for the external collaborators.

use std::collections::HashSet;
use std::sync::Mutex;

use chrono::Utc;
use resq_core::errors::{LocationError, ResqError, ResqResult, StoreError};
use resq_core::models::{
    AlertReceipt, AlertStatus, AuthorityContact, EmergencyAlert, EvidenceFile, GeoPoint, NewAlert,
};
use resq_core::traits::{IAlertStore, IEvidenceUploader, ILocationProvider};

/// Store operation, used to target failure injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOp {
    Create,
    List,
    UpdateStatus,
    UpdateMediaUrls,
    GetMediaUrls,
    ListContacts,
}

/// One recorded call against [`FakeAlertStore`].
#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    Create(NewAlert),
    List,
    UpdateStatus {
        incident_id: String,
        status: AlertStatus,
    },
    UpdateMediaUrls {
        incident_id: String,
        urls: Vec<String>,
    },
    GetMediaUrls(String),
    ListContacts,
}

impl StoreCall {
    pub fn op(&self) -> StoreOp {
        match self {
            Self::Create(_) => StoreOp::Create,
            Self::List => StoreOp::List,
            Self::UpdateStatus { .. } => StoreOp::UpdateStatus,
            Self::UpdateMediaUrls { .. } => StoreOp::UpdateMediaUrls,
            Self::GetMediaUrls(_) => StoreOp::GetMediaUrls,
            Self::ListContacts => StoreOp::ListContacts,
        }
    }
}

/// Alert store backed by a `Vec`, recording every call.
///
/// Failed calls are still recorded.
#[derive(Debug, Default)]
pub struct FakeAlertStore {
    alerts: Mutex<Vec<EmergencyAlert>>,
    contacts: Mutex<Vec<AuthorityContact>>,
    calls: Mutex<Vec<StoreCall>>,
    failing: Mutex<HashSet<StoreOp>>,
}

impl FakeAlertStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_alerts(alerts: Vec<EmergencyAlert>) -> Self {
        let store = Self::default();
        *store.alerts.lock().unwrap() = alerts;
        store
    }

    pub fn with_contacts(self, contacts: Vec<AuthorityContact>) -> Self {
        *self.contacts.lock().unwrap() = contacts;
        self
    }

    /// Make every subsequent `op` fail with `StoreError::Unavailable`.
    pub fn fail(&self, op: StoreOp) {
        self.failing.lock().unwrap().insert(op);
    }

    pub fn heal(&self, op: StoreOp) {
        self.failing.lock().unwrap().remove(&op);
    }

    /// Replace the stored records, as another dashboard or the backend would.
    pub fn set_alerts(&self, alerts: Vec<EmergencyAlert>) {
        *self.alerts.lock().unwrap() = alerts;
    }

    pub fn alerts(&self) -> Vec<EmergencyAlert> {
        self.alerts.lock().unwrap().clone()
    }

    pub fn alert(&self, incident_id: &str) -> Option<EmergencyAlert> {
        self.alerts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.incident_id == incident_id)
            .cloned()
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Operations in call order.
    pub fn ops(&self) -> Vec<StoreOp> {
        self.calls.lock().unwrap().iter().map(StoreCall::op).collect()
    }

    fn record(&self, call: StoreCall) -> ResqResult<()> {
        let op = call.op();
        self.calls.lock().unwrap().push(call);
        if self.failing.lock().unwrap().contains(&op) {
            return Err(ResqError::store_unavailable(format!("injected {op:?} failure")));
        }
        Ok(())
    }

    fn with_alert<T>(
        &self,
        incident_id: &str,
        f: impl FnOnce(&mut EmergencyAlert) -> T,
    ) -> ResqResult<T> {
        let mut alerts = self.alerts.lock().unwrap();
        let alert = alerts
            .iter_mut()
            .find(|a| a.incident_id == incident_id)
            .ok_or_else(|| StoreError::NotFound {
                incident_id: incident_id.to_string(),
            })?;
        Ok(f(alert))
    }
}

impl IAlertStore for FakeAlertStore {
    async fn create(&self, alert: NewAlert) -> ResqResult<AlertReceipt> {
        self.record(StoreCall::Create(alert.clone()))?;
        let mut alerts = self.alerts.lock().unwrap();
        let n = alerts.len() + 1;
        let record = EmergencyAlert {
            id: format!("alert-{n}"),
            incident_id: format!("INC-TEST-{n:04}"),
            phone_number: alert.phone_number,
            location_lat: alert.location_lat,
            location_lng: alert.location_lng,
            emergency_type: alert.emergency_type,
            safe_to_call: alert.safe_to_call,
            status: AlertStatus::Pending,
            created_at: Utc::now(),
            updated_at: None,
            media_urls: alert.media_urls,
            notes: alert.notes,
        };
        let receipt = AlertReceipt {
            id: record.id.clone(),
            incident_id: record.incident_id.clone(),
        };
        alerts.push(record);
        Ok(receipt)
    }

    async fn list(&self) -> ResqResult<Vec<EmergencyAlert>> {
        self.record(StoreCall::List)?;
        Ok(self.alerts())
    }

    async fn update_status(&self, incident_id: &str, status: AlertStatus) -> ResqResult<()> {
        self.record(StoreCall::UpdateStatus {
            incident_id: incident_id.to_string(),
            status,
        })?;
        self.with_alert(incident_id, |a| {
            a.status = status;
            a.updated_at = Some(Utc::now());
        })
    }

    async fn update_media_urls(&self, incident_id: &str, urls: Vec<String>) -> ResqResult<()> {
        self.record(StoreCall::UpdateMediaUrls {
            incident_id: incident_id.to_string(),
            urls: urls.clone(),
        })?;
        self.with_alert(incident_id, |a| a.media_urls = urls)
    }

    async fn get_media_urls(&self, incident_id: &str) -> ResqResult<Vec<String>> {
        self.record(StoreCall::GetMediaUrls(incident_id.to_string()))?;
        self.with_alert(incident_id, |a| a.media_urls.clone())
    }

    async fn list_authority_contacts(&self) -> ResqResult<Vec<AuthorityContact>> {
        self.record(StoreCall::ListContacts)?;
        Ok(self
            .contacts
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.is_active)
            .cloned()
            .collect())
    }
}

#[derive(Debug, Clone)]
enum LocationOutcome {
    At(GeoPoint),
    Denied,
    Unavailable,
}

/// Location provider with a fixed outcome.
#[derive(Debug)]
pub struct FakeLocation {
    outcome: LocationOutcome,
    requests: Mutex<usize>,
}

impl FakeLocation {
    pub fn at(lat: f64, lng: f64) -> Self {
        Self::with(LocationOutcome::At(GeoPoint::new(lat, lng)))
    }

    pub fn denied() -> Self {
        Self::with(LocationOutcome::Denied)
    }

    pub fn unavailable() -> Self {
        Self::with(LocationOutcome::Unavailable)
    }

    fn with(outcome: LocationOutcome) -> Self {
        Self {
            outcome,
            requests: Mutex::new(0),
        }
    }

    pub fn requests(&self) -> usize {
        *self.requests.lock().unwrap()
    }
}

impl ILocationProvider for FakeLocation {
    async fn current_location(&self) -> ResqResult<GeoPoint> {
        *self.requests.lock().unwrap() += 1;
        match &self.outcome {
            LocationOutcome::At(point) => Ok(*point),
            LocationOutcome::Denied => Err(LocationError::PermissionDenied.into()),
            LocationOutcome::Unavailable => Err(LocationError::Unavailable {
                reason: "no fix".to_string(),
            }
            .into()),
        }
    }
}

/// One recorded upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub object_name: String,
    pub content_type: String,
    pub size: usize,
}

/// Evidence uploader that serves files from `{base_url}/{object_name}`.
#[derive(Debug)]
pub struct FakeUploader {
    base_url: Option<String>,
    uploads: Mutex<Vec<Upload>>,
}

impl FakeUploader {
    pub fn serving(base_url: &str) -> Self {
        Self {
            base_url: Some(base_url.trim_end_matches('/').to_string()),
            uploads: Mutex::new(Vec::new()),
        }
    }

    /// Every upload fails.
    pub fn failing() -> Self {
        Self {
            base_url: None,
            uploads: Mutex::new(Vec::new()),
        }
    }

    pub fn uploads(&self) -> Vec<Upload> {
        self.uploads.lock().unwrap().clone()
    }
}

impl IEvidenceUploader for FakeUploader {
    async fn upload(
        &self,
        object_name: &str,
        content_type: &str,
        file: &EvidenceFile,
    ) -> ResqResult<String> {
        self.uploads.lock().unwrap().push(Upload {
            object_name: object_name.to_string(),
            content_type: content_type.to_string(),
            size: file.bytes.len(),
        });
        match &self.base_url {
            Some(base) => Ok(format!("{base}/{object_name}")),
            None => Err(ResqError::EvidenceUpload {
                reason: "bucket unreachable".to_string(),
            }),
        }
    }
}
