//! Shared HTTP plumbing: auth headers, timeouts, error mapping.

use reqwest::{Client, Method, RequestBuilder, Response};

use resq_core::config::StoreConfig;
use resq_core::errors::{ConfigError, ResqError, ResqResult};

#[derive(Debug, Clone)]
pub(crate) struct BackendClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl BackendClient {
    pub(crate) fn from_config(config: &StoreConfig) -> ResqResult<Self> {
        let base_url = config
            .endpoint_url
            .as_deref()
            .map(|u| u.trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
            .ok_or_else(|| missing("store.endpoint_url"))?;
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| missing("store.api_key"))?;

        let http = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ResqError::store_unavailable(format!("http client: {e}")))?;

        Ok(Self {
            http,
            base_url,
            api_key,
        })
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, self.url(path))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// Send and require a 2xx status. Transport errors and any other status
    /// become `StoreError::Unavailable`.
    pub(crate) async fn send(&self, request: RequestBuilder, what: &str) -> ResqResult<Response> {
        let response = request
            .send()
            .await
            .map_err(|e| ResqError::store_unavailable(format!("{what}: {e}")))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(%status, what, "backend returned an error status");
        Err(ResqError::store_unavailable(format!(
            "{what}: HTTP {status}: {}",
            body.trim()
        )))
    }

    /// Send and decode a JSON body. Undecodable bodies are
    /// `ResqError::Serialization`.
    pub(crate) async fn json<T: serde::de::DeserializeOwned>(
        &self,
        request: RequestBuilder,
        what: &str,
    ) -> ResqResult<T> {
        let body = self
            .send(request, what)
            .await?
            .bytes()
            .await
            .map_err(|e| ResqError::store_unavailable(format!("{what}: reading body: {e}")))?;
        serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!(what, error = %e, "undecodable backend response");
            ResqError::Serialization(e)
        })
    }
}

fn missing(field: &str) -> ResqError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: "required for the remote store".to_string(),
    }
    .into()
}
