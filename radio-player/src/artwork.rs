//! Artwork fetch-with-cache.
//!
//! Remote station artwork is fetched at most once per URL and held in an
//! in-memory LRU cache. Fetch and decode failures are absorbed: the loader
//! yields `None` and the caller substitutes the item's placeholder. Errors
//! never reach the user.

use bytes::Bytes;
use lru::LruCache;
use radio_bridges::HttpClient;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Shared artwork loader.
///
/// Cloning is cheap; clones share the cache. Without an HTTP client every
/// remote fetch yields `None`, which callers treat as "use the placeholder".
#[derive(Clone)]
pub struct ArtworkLoader {
    http: Option<Arc<dyn HttpClient>>,
    cache: Arc<Mutex<LruCache<String, Bytes>>>,
}

impl ArtworkLoader {
    pub fn new(http: Option<Arc<dyn HttpClient>>, cache_entries: usize) -> Self {
        let capacity = NonZeroUsize::new(cache_entries).unwrap_or(NonZeroUsize::MIN);
        Self {
            http,
            cache: Arc::new(Mutex::new(LruCache::new(capacity))),
        }
    }

    /// Fetch the image bytes behind `url`.
    ///
    /// Returns `None` immediately when `url` is absent, on cache miss
    /// without an HTTP client, and on any fetch or decode failure. Cached
    /// entries were decode-validated at insertion, so a hit returns without
    /// re-fetching.
    pub async fn fetch(&self, url: Option<&str>) -> Option<Bytes> {
        let url = url?;

        if let Some(bytes) = self.cache.lock().await.get(url) {
            return Some(bytes.clone());
        }

        let http = self.http.as_ref()?;
        let response = match http.get(url).await {
            Ok(response) if response.is_success() => response,
            Ok(response) => {
                debug!(url, status = response.status, "artwork fetch rejected");
                return None;
            }
            Err(error) => {
                debug!(url, %error, "artwork fetch failed");
                return None;
            }
        };

        if image::load_from_memory(&response.body).is_err() {
            debug!(url, "artwork bytes did not decode as an image");
            return None;
        }

        self.cache
            .lock()
            .await
            .put(url.to_string(), response.body.clone());
        Some(response.body)
    }

    /// Number of cached entries, for diagnostics.
    pub async fn cached_entries(&self) -> usize {
        self.cache.lock().await.len()
    }
}
