//! Audio session abstraction.
//!
//! Wraps the OS audio-session service: category configuration plus the
//! interruption and route-change notifications the coordinator reacts to.

use crate::error::Result;
use async_trait::async_trait;
#[cfg(feature = "test-support")]
use mockall::automock;
use tokio::sync::mpsc::UnboundedReceiver;

/// Session-level signals originating outside the application.
///
/// Unknown interruption types cannot occur here: the host adapter maps the
/// platform's raw values into this enum, and anything it cannot map is a
/// contract violation on the adapter's side. Route changes other than device
/// add/remove are forwarded as [`SessionSignal::RouteChanged`] and are
/// log-only for the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionSignal {
    /// An external event (phone call, alarm) suspended audio out of band.
    InterruptionBegan,
    /// The interruption ended.
    InterruptionEnded {
        /// Whether the platform hints that playback should resume.
        should_resume: bool,
    },
    /// A new output device became available (e.g. headphones connected).
    RouteAdded,
    /// The active output device disappeared (e.g. headphones unplugged).
    RouteRemoved,
    /// Any other route-change reason, carried for diagnostics.
    RouteChanged { reason: String },
}

/// The OS audio-session service.
#[cfg_attr(feature = "test-support", automock)]
#[async_trait]
pub trait AudioSession: Send + Sync {
    /// Configure the session for playback.
    ///
    /// # Errors
    ///
    /// Configuration failures are reported but are non-fatal to the core:
    /// playback proceeds with the platform's default session behavior.
    async fn configure(&self) -> Result<()>;

    /// Take the session's signal stream. Single-consumer, like
    /// [`PlaybackEngine::signals`](crate::engine::PlaybackEngine::signals).
    fn events(&self) -> UnboundedReceiver<SessionSignal>;
}
