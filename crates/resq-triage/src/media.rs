//! Read-before-append for incident media.

use resq_core::errors::ResqResult;
use resq_core::traits::IAlertStore;

/// Append `urls` to the incident's stored media list and return the full list.
///
/// The current list is read, extended in order, and written back whole.
/// Concurrent appenders race; the last writer wins. Empty `urls` makes no
/// store call and returns an empty list.
pub async fn append_media_urls<S: IAlertStore>(
    store: &S,
    incident_id: &str,
    urls: Vec<String>,
) -> ResqResult<Vec<String>> {
    if urls.is_empty() {
        return Ok(Vec::new());
    }
    let mut combined = store.get_media_urls(incident_id).await?;
    combined.extend(urls);
    store
        .update_media_urls(incident_id, combined.clone())
        .await
        .inspect_err(|e| tracing::warn!(incident_id, error = %e, "media update rejected"))?;
    Ok(combined)
}
