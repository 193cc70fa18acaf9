//! Evidence upload and attachment to an existing incident.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::Instrument;

use resq_core::constants::DEFAULT_EVIDENCE_EXTENSION;
use resq_core::errors::ResqResult;
use resq_core::models::EvidenceFile;
use resq_core::traits::{IAlertStore, IEvidenceUploader};
use resq_observability::evidence_span;
use resq_triage::media::append_media_urls;

/// Storage object name and content type for a file attached at `at`.
///
/// The name is `{incident_id}_{unix_millis}.{ext}`, where `ext` comes from the
/// file name and defaults to `jpg`.
pub fn object_name(incident_id: &str, file: &EvidenceFile, at: DateTime<Utc>) -> (String, String) {
    let ext = file
        .extension()
        .unwrap_or_else(|| DEFAULT_EVIDENCE_EXTENSION.to_string());
    let name = format!("{incident_id}_{}.{ext}", at.timestamp_millis());
    (name, format!("image/{ext}"))
}

pub struct EvidenceAttacher<S: IAlertStore, U: IEvidenceUploader> {
    store: Arc<S>,
    uploader: Arc<U>,
}

impl<S: IAlertStore, U: IEvidenceUploader> EvidenceAttacher<S, U> {
    pub fn new(store: Arc<S>, uploader: Arc<U>) -> Self {
        Self { store, uploader }
    }

    /// Upload `file` and append its public URL to the incident's media.
    ///
    /// Returns the uploaded URL. A failed upload makes no store call.
    pub async fn attach(&self, incident_id: &str, file: &EvidenceFile) -> ResqResult<String> {
        async {
            let (name, content_type) = object_name(incident_id, file, Utc::now());
            let url = self
                .uploader
                .upload(&name, &content_type, file)
                .await
                .inspect_err(|e| tracing::warn!(object = %name, error = %e, "evidence upload failed"))?;

            append_media_urls(self.store.as_ref(), incident_id, vec![url.clone()]).await?;
            tracing::info!(object = %name, bytes = file.bytes.len(), "evidence attached");
            Ok(url)
        }
        .instrument(evidence_span!(incident_id))
        .await
    }
}
