use crate::errors::ResqResult;
use crate::models::EvidenceFile;

/// Opaque media upload service.
#[allow(async_fn_in_trait)]
pub trait IEvidenceUploader: Send + Sync {
    /// Upload `file` under `object_name` and return its public URL.
    async fn upload(
        &self,
        object_name: &str,
        content_type: &str,
        file: &EvidenceFile,
    ) -> ResqResult<String>;
}
