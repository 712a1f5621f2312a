//! # Player Configuration Module
//!
//! Builder-pattern configuration for the radio playback core. The builder
//! collects host bridge implementations and tuning knobs, and enforces
//! fail-fast validation so a missing required collaborator is caught at
//! construction with an actionable message rather than at first use.
//!
//! ## Required Dependencies
//!
//! - `PlaybackEngine` - the streaming media pipeline
//! - `AudioSession` - interruption/route-change notifications
//! - `NowPlayingDisplay` - lock-screen metadata surface and remote commands
//!
//! ## Optional Dependencies
//!
//! - `HttpClient` - remote artwork fetch; when absent, artwork falls back to
//!   each item's placeholder image
//!
//! ## Usage
//!
//! ```ignore
//! use radio_runtime::config::PlayerConfig;
//! use std::sync::Arc;
//!
//! let config = PlayerConfig::builder()
//!     .engine(Arc::new(MyEngine::new()))
//!     .session(Arc::new(MySession::new()))
//!     .display(Arc::new(MyDisplay::new()))
//!     .http_client(Arc::new(MyHttpClient::new()))
//!     .build()?;
//! # Ok::<(), radio_runtime::RuntimeError>(())
//! ```

use crate::error::{Result, RuntimeError};
use radio_bridges::{AudioSession, HttpClient, NowPlayingDisplay, PlaybackEngine};
use std::sync::Arc;

/// Default capacity of the player event bus.
pub const DEFAULT_EVENT_BUFFER_SIZE: usize = 100;

/// Default number of artwork entries kept in the in-memory cache.
pub const DEFAULT_ARTWORK_CACHE_ENTRIES: usize = 64;

/// Default cap on consecutive stalled-stream reloads.
///
/// The platform reload recovery for an empty buffer can loop forever on a
/// dead stream; this bounds the loop. The counter resets whenever buffering
/// finishes.
pub const DEFAULT_MAX_BUFFER_RELOADS: u32 = 3;

/// Configuration for the radio playback core.
///
/// Use [`PlayerConfig::builder`] to construct instances.
#[derive(Clone)]
pub struct PlayerConfig {
    /// The streaming playback pipeline (required).
    pub engine: Arc<dyn PlaybackEngine>,

    /// The OS audio-session service (required).
    pub session: Arc<dyn AudioSession>,

    /// The OS now-playing display service (required).
    pub display: Arc<dyn NowPlayingDisplay>,

    /// HTTP client for remote artwork (optional).
    pub http_client: Option<Arc<dyn HttpClient>>,

    /// Capacity of the broadcast event bus.
    pub event_buffer_size: usize,

    /// Maximum entries in the artwork LRU cache.
    pub artwork_cache_entries: usize,

    /// Maximum consecutive reloads issued in response to an empty buffer.
    pub max_buffer_reloads: u32,
}

impl std::fmt::Debug for PlayerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerConfig")
            .field("engine", &"PlaybackEngine { ... }")
            .field("session", &"AudioSession { ... }")
            .field("display", &"NowPlayingDisplay { ... }")
            .field(
                "http_client",
                &self.http_client.as_ref().map(|_| "HttpClient { ... }"),
            )
            .field("event_buffer_size", &self.event_buffer_size)
            .field("artwork_cache_entries", &self.artwork_cache_entries)
            .field("max_buffer_reloads", &self.max_buffer_reloads)
            .finish()
    }
}

impl PlayerConfig {
    /// Create a new builder with defaults applied.
    pub fn builder() -> PlayerConfigBuilder {
        PlayerConfigBuilder::new()
    }
}

/// Builder for [`PlayerConfig`].
#[derive(Default)]
pub struct PlayerConfigBuilder {
    engine: Option<Arc<dyn PlaybackEngine>>,
    session: Option<Arc<dyn AudioSession>>,
    display: Option<Arc<dyn NowPlayingDisplay>>,
    http_client: Option<Arc<dyn HttpClient>>,
    event_buffer_size: Option<usize>,
    artwork_cache_entries: Option<usize>,
    max_buffer_reloads: Option<u32>,
}

impl PlayerConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the playback engine bridge (required).
    pub fn engine(mut self, engine: Arc<dyn PlaybackEngine>) -> Self {
        self.engine = Some(engine);
        self
    }

    /// Set the audio session bridge (required).
    pub fn session(mut self, session: Arc<dyn AudioSession>) -> Self {
        self.session = Some(session);
        self
    }

    /// Set the now-playing display bridge (required).
    pub fn display(mut self, display: Arc<dyn NowPlayingDisplay>) -> Self {
        self.display = Some(display);
        self
    }

    /// Set the HTTP client used for remote artwork (optional).
    pub fn http_client(mut self, http_client: Arc<dyn HttpClient>) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Override the event bus capacity.
    pub fn event_buffer_size(mut self, size: usize) -> Self {
        self.event_buffer_size = Some(size);
        self
    }

    /// Override the artwork cache entry count.
    pub fn artwork_cache_entries(mut self, entries: usize) -> Self {
        self.artwork_cache_entries = Some(entries);
        self
    }

    /// Override the consecutive buffer-reload cap.
    pub fn max_buffer_reloads(mut self, reloads: u32) -> Self {
        self.max_buffer_reloads = Some(reloads);
        self
    }

    /// Validate and build the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::CapabilityMissing`] when a required bridge is
    /// absent and [`RuntimeError::Config`] for invalid tunables.
    pub fn build(self) -> Result<PlayerConfig> {
        let engine = self
            .engine
            .ok_or_else(|| RuntimeError::CapabilityMissing {
                capability: "PlaybackEngine".to_string(),
                message: "No playback engine provided. Inject the host's streaming \
                          pipeline adapter via PlayerConfigBuilder::engine()."
                    .to_string(),
            })?;

        let session = self
            .session
            .ok_or_else(|| RuntimeError::CapabilityMissing {
                capability: "AudioSession".to_string(),
                message: "No audio session provided. Inject the host's audio-session \
                          adapter via PlayerConfigBuilder::session()."
                    .to_string(),
            })?;

        let display = self
            .display
            .ok_or_else(|| RuntimeError::CapabilityMissing {
                capability: "NowPlayingDisplay".to_string(),
                message: "No now-playing display provided. Inject the host's \
                          media-remote adapter via PlayerConfigBuilder::display()."
                    .to_string(),
            })?;

        let event_buffer_size = self.event_buffer_size.unwrap_or(DEFAULT_EVENT_BUFFER_SIZE);
        if event_buffer_size == 0 {
            return Err(RuntimeError::Config(
                "event_buffer_size must be greater than zero".to_string(),
            ));
        }

        let artwork_cache_entries = self
            .artwork_cache_entries
            .unwrap_or(DEFAULT_ARTWORK_CACHE_ENTRIES);
        if artwork_cache_entries == 0 {
            return Err(RuntimeError::Config(
                "artwork_cache_entries must be greater than zero".to_string(),
            ));
        }

        Ok(PlayerConfig {
            engine,
            session,
            display,
            http_client: self.http_client,
            event_buffer_size,
            artwork_cache_entries,
            max_buffer_reloads: self.max_buffer_reloads.unwrap_or(DEFAULT_MAX_BUFFER_RELOADS),
        })
    }
}
