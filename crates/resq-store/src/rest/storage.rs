//! RestEvidenceUploader: public bucket on the backend's storage API.

use reqwest::Method;

use resq_core::config::StoreConfig;
use resq_core::errors::{ResqError, ResqResult};
use resq_core::models::EvidenceFile;
use resq_core::traits::IEvidenceUploader;

use super::client::BackendClient;

#[derive(Debug, Clone)]
pub struct RestEvidenceUploader {
    client: BackendClient,
    bucket: String,
}

impl RestEvidenceUploader {
    pub fn from_config(config: &StoreConfig) -> ResqResult<Self> {
        Ok(Self {
            client: BackendClient::from_config(config)?,
            bucket: config.evidence_bucket.clone(),
        })
    }

    pub fn public_url(&self, object_name: &str) -> String {
        self.client.url(&format!(
            "storage/v1/object/public/{}/{object_name}",
            self.bucket
        ))
    }
}

impl IEvidenceUploader for RestEvidenceUploader {
    /// Objects are never overwritten; a name clash fails the upload.
    async fn upload(
        &self,
        object_name: &str,
        content_type: &str,
        file: &EvidenceFile,
    ) -> ResqResult<String> {
        let path = format!("storage/v1/object/{}/{object_name}", self.bucket);
        let request = self
            .client
            .request(Method::POST, &path)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .header("x-upsert", "false")
            .body(file.bytes.clone());

        self.client
            .send(request, "upload evidence")
            .await
            .map_err(|e| ResqError::EvidenceUpload {
                reason: e.to_string(),
            })?;
        Ok(self.public_url(object_name))
    }
}
