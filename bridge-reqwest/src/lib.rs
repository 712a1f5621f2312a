//! HTTP client implementation using reqwest.
//!
//! The only networking the player does itself is fetching station artwork,
//! so the surface is a single GET. Pooling, TLS, and timeouts come from
//! reqwest's `Client`.

use async_trait::async_trait;
use radio_bridges::{error::Result, BridgeError, HttpClient, HttpResponse};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Reqwest-based [`HttpClient`] implementation.
///
/// Provides HTTP operations with:
/// - Connection pooling via reqwest
/// - TLS support by default
/// - Request and connect timeouts
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Create a new HTTP client with default configuration.
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(30))
    }

    /// Create a new HTTP client with a custom request timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .pool_max_idle_per_host(10)
            .user_agent(concat!("radiokit/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to build HTTP client");

        Self { client }
    }

    /// Create a new HTTP client around a pre-configured `Client`.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        debug!(url, "Executing HTTP GET");

        let response = self.client.get(url).send().await.map_err(|e| {
            warn!(error = %e, url, "HTTP request failed");
            if e.is_timeout() {
                BridgeError::OperationFailed("Request timed out".to_string())
            } else if e.is_connect() {
                BridgeError::OperationFailed(format!("Connection failed: {}", e))
            } else {
                BridgeError::OperationFailed(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| BridgeError::OperationFailed(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn client_constructs_with_defaults() {
        let _client = ReqwestHttpClient::new();
    }

    #[tokio::test]
    async fn client_accepts_custom_timeout() {
        let _client = ReqwestHttpClient::with_timeout(Duration::from_secs(5));
    }
}
