//! HTTP client abstraction.
//!
//! The core's only network need of its own is fetching artwork bytes; the
//! stream itself is pulled by the playback engine. The contract is therefore
//! a single GET returning the response body.

use crate::error::Result;
use async_trait::async_trait;
use bytes::Bytes;
#[cfg(feature = "test-support")]
use mockall::automock;

/// HTTP response
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Bytes,
}

impl HttpResponse {
    /// Check if response status is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Async HTTP client trait
///
/// Implementations should handle TLS, connection pooling, and timeouts.
/// Callers treat any error as "no data"; retry policy, if any, belongs to
/// the implementation.
#[cfg_attr(feature = "test-support", automock)]
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Execute a GET request for `url` and return the full response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection fails, TLS validation fails, or
    /// the request times out. Non-2xx statuses are returned as responses,
    /// not errors.
    async fn get(&self, url: &str) -> Result<HttpResponse>;
}
