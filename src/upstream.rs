//! Upstream HTTP
//!
//! Every outbound request (weather providers, the warnings page) goes through
//! the [`Fetcher`] trait so handlers can be exercised without a network.
//! There is no retry and no caching: each call is one request.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// Raw upstream response
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: String,
}

impl UpstreamResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Errors talking to an upstream service
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Connection, DNS, TLS or timeout failure
    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },

    /// Upstream answered with a non-2xx status
    #[error("upstream returned status {0}")]
    Status(u16),

    /// Body could not be read or decoded
    #[error("invalid upstream body: {0}")]
    Body(String),
}

/// Outbound GET seam
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Issue a GET with the given query pairs and return status + body text.
    ///
    /// Non-2xx statuses are returned as responses, not errors.
    async fn get(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<UpstreamResponse, UpstreamError>;
}

/// reqwest-backed fetcher
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher with a per-request timeout
    pub fn new(timeout: Duration) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .user_agent(concat!("yachtclub/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| UpstreamError::Request {
                url: String::new(),
                message: e.to_string(),
            })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn get(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<UpstreamResponse, UpstreamError> {
        tracing::debug!(url = %url, "Upstream GET");

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| UpstreamError::Request {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| UpstreamError::Body(e.to_string()))?;

        Ok(UpstreamResponse { status, body })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_success() {
        assert!(UpstreamResponse::new(200, "").is_success());
        assert!(UpstreamResponse::new(204, "").is_success());
        assert!(!UpstreamResponse::new(404, "").is_success());
        assert!(!UpstreamResponse::new(500, "").is_success());
    }

    #[tokio::test]
    async fn test_stub_records_requests() {
        let stub = testing::StubFetcher::new().respond("https://a.test", 200, "ok");

        let response = stub
            .get("https://a.test/x", &[("q", "1".to_string())])
            .await
            .unwrap();
        assert_eq!(response.body, "ok");

        let err = stub.get("https://b.test", &[]).await.unwrap_err();
        assert!(matches!(err, UpstreamError::Request { .. }));

        assert_eq!(stub.requests.lock().unwrap().len(), 2);
    }
}
