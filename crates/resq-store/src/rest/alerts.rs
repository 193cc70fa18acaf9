//! RestAlertStore: `emergency_alerts` and `authority_contacts` tables.

use reqwest::Method;
use serde::Deserialize;
use serde_json::json;

use resq_core::config::StoreConfig;
use resq_core::errors::{ResqResult, StoreError};
use resq_core::models::{AlertReceipt, AlertStatus, AuthorityContact, EmergencyAlert, NewAlert};
use resq_core::traits::IAlertStore;

use super::client::BackendClient;

const RETURN_REPRESENTATION: (&str, &str) = ("Prefer", "return=representation");

#[derive(Debug, Deserialize)]
struct MediaRow {
    #[serde(default)]
    media_urls: Option<Vec<String>>,
}

/// Alert store backed by the hosted PostgREST API.
#[derive(Debug, Clone)]
pub struct RestAlertStore {
    client: BackendClient,
    alerts_table: String,
    contacts_table: String,
}

impl RestAlertStore {
    /// Requires `store.endpoint_url` and `store.api_key`.
    pub fn from_config(config: &StoreConfig) -> ResqResult<Self> {
        Ok(Self {
            client: BackendClient::from_config(config)?,
            alerts_table: config.alerts_table.clone(),
            contacts_table: config.contacts_table.clone(),
        })
    }

    fn alerts_path(&self, query: &str) -> String {
        format!("rest/v1/{}{}", self.alerts_table, query)
    }

    fn by_incident(incident_id: &str) -> String {
        format!("?incident_id=eq.{incident_id}")
    }

    /// PATCH one incident; an empty representation means no row matched.
    async fn patch(&self, incident_id: &str, body: serde_json::Value, what: &str) -> ResqResult<()> {
        let request = self
            .client
            .request(Method::PATCH, &self.alerts_path(&Self::by_incident(incident_id)))
            .header(RETURN_REPRESENTATION.0, RETURN_REPRESENTATION.1)
            .json(&body);
        let rows: Vec<serde_json::Value> = self.client.json(request, what).await?;
        if rows.is_empty() {
            return Err(StoreError::NotFound {
                incident_id: incident_id.to_string(),
            }
            .into());
        }
        Ok(())
    }
}

impl IAlertStore for RestAlertStore {
    async fn create(&self, alert: NewAlert) -> ResqResult<AlertReceipt> {
        let request = self
            .client
            .request(Method::POST, &self.alerts_path("?select=id,incident_id"))
            .header(RETURN_REPRESENTATION.0, RETURN_REPRESENTATION.1)
            .json(&alert);
        let rows: Vec<AlertReceipt> = self.client.json(request, "create alert").await?;
        rows.into_iter().next().ok_or_else(|| {
            StoreError::Rejected {
                reason: "insert returned no row".to_string(),
            }
            .into()
        })
    }

    async fn list(&self) -> ResqResult<Vec<EmergencyAlert>> {
        let request = self
            .client
            .request(Method::GET, &self.alerts_path("?select=*&order=created_at.desc"));
        self.client.json(request, "list alerts").await
    }

    async fn update_status(&self, incident_id: &str, status: AlertStatus) -> ResqResult<()> {
        self.patch(incident_id, json!({ "status": status }), "update status")
            .await
    }

    async fn update_media_urls(&self, incident_id: &str, urls: Vec<String>) -> ResqResult<()> {
        self.patch(incident_id, json!({ "media_urls": urls }), "update media")
            .await
    }

    async fn get_media_urls(&self, incident_id: &str) -> ResqResult<Vec<String>> {
        let query = format!("{}&select=media_urls", Self::by_incident(incident_id));
        let request = self.client.request(Method::GET, &self.alerts_path(&query));
        let rows: Vec<MediaRow> = self.client.json(request, "read media").await?;
        let row = rows.into_iter().next().ok_or_else(|| StoreError::NotFound {
            incident_id: incident_id.to_string(),
        })?;
        Ok(row.media_urls.unwrap_or_default())
    }

    async fn list_authority_contacts(&self) -> ResqResult<Vec<AuthorityContact>> {
        let path = format!("rest/v1/{}?select=*&is_active=eq.true", self.contacts_table);
        let request = self.client.request(Method::GET, &path);
        self.client.json(request, "list contacts").await
    }
}
