//! # Host Bridge Traits
//!
//! Platform abstraction traits that must be implemented by each host platform.
//!
//! ## Overview
//!
//! This crate defines the contract between the radio playback core and the
//! platform services it relays. Each trait represents a capability the core
//! requires but that must be implemented differently per platform (desktop,
//! iOS, Android, web):
//!
//! - [`PlaybackEngine`](engine::PlaybackEngine) - the streaming media pipeline
//!   (load/play/pause plus a typed signal source replacing key-path
//!   observation)
//! - [`AudioSession`](session::AudioSession) - interruption and route-change
//!   notifications from the OS audio-session service
//! - [`NowPlayingDisplay`](now_playing::NowPlayingDisplay) - the lock-screen /
//!   control-center metadata surface and its remote commands
//! - [`HttpClient`](http::HttpClient) - byte fetches for remote artwork
//!
//! ## Event sources
//!
//! Platform callbacks arrive from system-managed threads. Rather than letting
//! hosts call into the core directly, every observable capability exposes its
//! events as a `tokio::sync::mpsc` receiver. The core consumes all receivers
//! on a single coordination task, which serializes state mutation without any
//! further locking.
//!
//! ## Error Handling
//!
//! All bridge traits use [`BridgeError`](error::BridgeError). Platform
//! implementations should convert platform-specific errors and provide
//! actionable messages.
//!
//! ## Thread Safety
//!
//! All bridge traits require `Send + Sync` bounds so handles can be shared
//! across async tasks behind `Arc`.

pub mod engine;
pub mod error;
pub mod http;
pub mod now_playing;
pub mod session;

pub use error::BridgeError;

// Re-export commonly used types
pub use engine::{EngineStatus, PlaybackEngine, PlaybackSignal};
pub use http::{HttpClient, HttpResponse};
pub use now_playing::{CommandStatus, NowPlayingDisplay, NowPlayingInfo, RemoteCommand};
pub use session::{AudioSession, SessionSignal};

#[cfg(feature = "test-support")]
pub use engine::MockPlaybackEngine;
#[cfg(feature = "test-support")]
pub use http::MockHttpClient;
#[cfg(feature = "test-support")]
pub use now_playing::MockNowPlayingDisplay;
#[cfg(feature = "test-support")]
pub use session::MockAudioSession;
