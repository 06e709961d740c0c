//! `reqwest`-backed transport.

use crate::PortalConfig;
use async_trait::async_trait;
use satudata_error::{HttpError, SatuDataError, SatuDataResult};
use satudata_interface::{HttpRequest, HttpResponse, Method, Transport};
use std::time::Duration;
use tracing::instrument;

/// Sends requests to the portal backend over HTTP.
///
/// Status codes are passed through untouched; only failures to obtain a
/// response become errors.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    config: PortalConfig,
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport for the configured backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    #[instrument(skip(config), fields(base_url = %config.base_url()))]
    pub fn new(config: PortalConfig) -> SatuDataResult<Self> {
        tracing::debug!("Creating HTTP transport");
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(*config.timeout_secs()))
            .user_agent(config.user_agent().as_str())
            .build()
            .map_err(|e| {
                SatuDataError::from(HttpError::new(format!("Failed to build HTTP client: {}", e)))
            })?;
        Ok(Self { config, client })
    }

    /// Get the transport configuration
    pub fn config(&self) -> &PortalConfig {
        &self.config
    }
}

fn reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self, request), fields(method = %request.method(), path = %request.path()))]
    async fn send(&self, request: HttpRequest) -> SatuDataResult<HttpResponse> {
        let url = self.config.url_for(request.path());
        tracing::debug!("Sending request to {}", url);

        let mut req = self
            .client
            .request(reqwest_method(*request.method()), &url);

        for (name, value) in request.headers() {
            req = req.header(name.as_str(), value.as_str());
        }

        if let Some(body) = request.body() {
            req = req.json(body);
        }

        let response = req.send().await.map_err(|e| {
            tracing::error!("Request failed: {}", e);
            SatuDataError::from(HttpError::new(format!("Request failed: {}", e)))
        })?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            SatuDataError::from(HttpError::with_status(
                status,
                format!("Failed to read response body: {}", e),
            ))
        })?;

        if (200..300).contains(&status) {
            tracing::debug!(status, bytes = body.len(), "Request completed");
        } else {
            tracing::warn!(status, "Server returned non-success status");
        }

        Ok(HttpResponse::new(status, body.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_every_method() {
        assert_eq!(reqwest_method(Method::Get), reqwest::Method::GET);
        assert_eq!(reqwest_method(Method::Patch), reqwest::Method::PATCH);
        assert_eq!(reqwest_method(Method::Delete), reqwest::Method::DELETE);
    }

    #[test]
    fn builds_from_default_config() {
        let transport = HttpTransport::new(PortalConfig::default()).unwrap();
        assert_eq!(*transport.config().timeout_secs(), 30);
    }
}
