use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use thiserror::Error;

use crate::api::error::{EndpointError, EndpointResult};
use crate::api::request::{EndpointRequest, Method};
use crate::config::ApiConfig;

/// Boxed future returned by [`EndpointClient::call`].
pub type CallFuture<'a> = Pin<Box<dyn Future<Output = EndpointResult> + Send + 'a>>;

/// Capability that performs a backend request and returns parsed JSON.
///
/// Implementations must not panic: transport failures, error statuses and
/// unparsable bodies all come back as `Err`. No retries happen here.
pub trait EndpointClient: Send + Sync {
    fn call(&self, request: EndpointRequest) -> CallFuture<'_>;
}

/// Errors that can occur while constructing the HTTP client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
}

/// `reqwest`-backed endpoint client bound to one API base URL.
#[derive(Debug, Clone)]
pub struct HttpEndpointClient {
    client: Client,
    base_url: String,
}

impl HttpEndpointClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let parsed = Url::parse(&config.base_url).map_err(|e| ClientError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidBaseUrl {
                url: config.base_url.clone(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds as u64))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, request: &EndpointRequest) -> EndpointResult<Url> {
        let raw = format!("{}{}", self.base_url, request.path);
        let mut url = Url::parse(&raw)
            .map_err(|e| EndpointError::network(format!("invalid url '{}': {}", raw, e)))?;
        if !request.params.is_empty() {
            url.query_pairs_mut().extend_pairs(request.params.iter());
        }
        Ok(url)
    }

    async fn execute(&self, request: EndpointRequest) -> EndpointResult {
        let url = self.url_for(&request)?;
        tracing::debug!(method = request.method.as_str(), url = %url, "Endpoint request");

        let mut builder = match request.method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
        };
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| EndpointError::from_transport(&e))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| EndpointError::from_transport(&e))?;

        if !status.is_success() {
            return Err(EndpointError::from_status(
                status.as_u16(),
                error_message(status, &body),
            ));
        }

        serde_json::from_slice(&body)
            .map_err(|e| EndpointError::decode(format!("invalid JSON body: {}", e)))
    }
}

impl EndpointClient for HttpEndpointClient {
    fn call(&self, request: EndpointRequest) -> CallFuture<'_> {
        Box::pin(async move {
            let path = request.path.clone();
            let result = self.execute(request).await;
            if let Err(err) = &result {
                tracing::warn!(path = %path, kind = %err.kind, error = %err.message, "Endpoint call failed");
            }
            result
        })
    }
}

/// Prefer the backend's `{"error": "..."}` text, fall back to the status line.
fn error_message(status: StatusCode, body: &[u8]) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| status.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        }
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        assert!(matches!(
            HttpEndpointClient::new(&config("ftp://example.com")),
            Err(ClientError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            HttpEndpointClient::new(&config("not a url")),
            Err(ClientError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_url_joins_path_and_params() {
        let client = HttpEndpointClient::new(&config("http://localhost:5000/")).unwrap();
        let request = EndpointRequest::get("/api/predict-patterns").with_param("days", 7);
        let url = client.url_for(&request).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:5000/api/predict-patterns?days=7"
        );
    }

    #[test]
    fn test_error_message_prefers_backend_text() {
        let msg = error_message(StatusCode::BAD_REQUEST, br#"{"success": false, "error": "bad input"}"#);
        assert_eq!(msg, "bad input");

        let msg = error_message(StatusCode::INTERNAL_SERVER_ERROR, b"<html>oops</html>");
        assert_eq!(msg, "500 Internal Server Error");
    }
}
