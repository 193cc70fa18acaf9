//! IAlertStore: the remote alert persistence contract.

use crate::errors::ResqResult;
use crate::models::{AlertReceipt, AlertStatus, AuthorityContact, EmergencyAlert, NewAlert};

/// CRUD surface of the hosted alert database.
///
/// The store offers no atomic append and no ordering guarantee on `list`.
/// Every failure is returned as an error value; nothing is dropped silently.
#[allow(async_fn_in_trait)]
pub trait IAlertStore: Send + Sync {
    /// Insert a new alert. The store assigns `id`, `incident_id`,
    /// `created_at`, and status `pending`.
    async fn create(&self, alert: NewAlert) -> ResqResult<AlertReceipt>;

    /// Every known alert, in no particular order.
    async fn list(&self) -> ResqResult<Vec<EmergencyAlert>>;

    async fn update_status(&self, incident_id: &str, status: AlertStatus) -> ResqResult<()>;

    /// Replace the full media URL list of an incident.
    async fn update_media_urls(&self, incident_id: &str, urls: Vec<String>) -> ResqResult<()>;

    /// Current media URLs of an incident (read-before-append).
    async fn get_media_urls(&self, incident_id: &str) -> ResqResult<Vec<String>>;

    /// Active authority contacts.
    async fn list_authority_contacts(&self) -> ResqResult<Vec<AuthorityContact>>;
}
