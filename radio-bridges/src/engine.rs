//! Playback engine abstraction.
//!
//! The engine wraps the host platform's streaming media pipeline. It owns the
//! network connection, buffering, and decoding for exactly one stream item at
//! a time; the core only issues control actions and consumes the typed signal
//! stream the engine publishes for the currently loaded item.

use crate::error::Result;
use async_trait::async_trait;
#[cfg(feature = "test-support")]
use mockall::automock;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::UnboundedReceiver;

/// Timeline state derived from the engine, never stored by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineStatus {
    /// Audio is advancing.
    Playing,
    /// Playback is suspended but an item is loaded.
    Paused,
    /// The engine is stalled waiting for enough data to (re)start.
    Waiting,
}

impl EngineStatus {
    pub fn is_playing(&self) -> bool {
        matches!(self, EngineStatus::Playing)
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, EngineStatus::Paused)
    }
}

/// Low-level playback signals for the currently loaded item.
///
/// These replace key-path observation of the platform player item: the engine
/// publishes one signal per observed state change, in observation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackSignal {
    /// The item became playable.
    Ready,
    /// The item's status is still undetermined. Log-only.
    NotReady,
    /// The item failed with an unrecoverable error.
    Failed {
        /// Human-readable description of the underlying platform error.
        message: String,
    },
    /// The playback buffer ran dry.
    BufferingStarted {
        /// Whether the buffer was genuinely empty at observation time, as
        /// opposed to merely shrinking. Drives the stalled-stream reload.
        buffer_empty: bool,
    },
    /// The engine reports playback is likely to keep up again.
    BufferingFinished,
    /// In-band timed metadata was decoded from the stream.
    TimedMetadata {
        /// First string value of the metadata group, typically the track title.
        title: String,
    },
}

/// The streaming playback pipeline provided by the host.
///
/// Implementations are expected to re-arm signal observation whenever `load`
/// swaps the current item, so that `signals()` always describes the item most
/// recently loaded.
///
/// # Signal delivery
///
/// `signals()` hands out the receiving half of the engine's signal channel.
/// The channel is single-consumer: the core calls this exactly once at
/// construction and consumes it on its coordination task.
#[cfg_attr(feature = "test-support", automock)]
#[async_trait]
pub trait PlaybackEngine: Send + Sync {
    /// Replace the current item with a fresh one built from `url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is rejected by the platform pipeline.
    /// Network and format failures surface later as
    /// [`PlaybackSignal::Failed`], not here.
    async fn load(&self, url: &str) -> Result<()>;

    /// Start or resume the timeline.
    async fn play(&self) -> Result<()>;

    /// Suspend the timeline, keeping the current item loaded.
    async fn pause(&self) -> Result<()>;

    /// Drop the current item entirely.
    async fn unload(&self) -> Result<()>;

    /// Current timeline state, queried on demand.
    async fn status(&self) -> EngineStatus;

    /// Take the engine's signal stream.
    fn signals(&self) -> UnboundedReceiver<PlaybackSignal>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_predicates() {
        assert!(EngineStatus::Playing.is_playing());
        assert!(!EngineStatus::Playing.is_paused());
        assert!(EngineStatus::Paused.is_paused());
        assert!(!EngineStatus::Waiting.is_playing());
        assert!(!EngineStatus::Waiting.is_paused());
    }

    #[test]
    fn signals_compare_by_payload() {
        assert_eq!(
            PlaybackSignal::BufferingStarted { buffer_empty: true },
            PlaybackSignal::BufferingStarted { buffer_empty: true },
        );
        assert_ne!(
            PlaybackSignal::BufferingStarted { buffer_empty: true },
            PlaybackSignal::BufferingStarted {
                buffer_empty: false
            },
        );
    }
}
