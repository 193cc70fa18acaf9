use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Hosted alert store configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Base URL of the hosted backend. `None` selects the in-process store.
    pub endpoint_url: Option<String>,
    /// Anonymous API key sent with every request.
    pub api_key: Option<String>,
    pub alerts_table: String,
    pub contacts_table: String,
    pub request_timeout_secs: u64,
    /// Storage bucket for uploaded evidence.
    pub evidence_bucket: String,
}

impl StoreConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn is_remote(&self) -> bool {
        self.endpoint_url.is_some()
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            endpoint_url: None,
            api_key: None,
            alerts_table: defaults::DEFAULT_ALERTS_TABLE.to_string(),
            contacts_table: defaults::DEFAULT_CONTACTS_TABLE.to_string(),
            request_timeout_secs: defaults::DEFAULT_REQUEST_TIMEOUT_SECS,
            evidence_bucket: defaults::DEFAULT_EVIDENCE_BUCKET.to_string(),
        }
    }
}
