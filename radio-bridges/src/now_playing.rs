//! Now-playing display abstraction.
//!
//! Covers the OS-level metadata surface (lock screen / control center): the
//! core pushes a full key-value snapshot on every mutation, and the display
//! feeds remote play/pause commands back as a typed stream.

use crate::error::Result;
use async_trait::async_trait;
use bytes::Bytes;
#[cfg(feature = "test-support")]
use mockall::automock;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::UnboundedReceiver;

/// The metadata snapshot mirrored to the OS display.
///
/// The display always receives the whole snapshot; there is no partial
/// update. A cleared snapshot (all fields absent) is a valid payload and
/// tells the display to blank itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NowPlayingInfo {
    /// Track or station title.
    pub title: Option<String>,
    /// Artist line; radio streams use the station description here.
    pub artist: Option<String>,
    /// Encoded artwork image bytes (PNG/JPEG), already validated by the core.
    pub artwork_data: Option<Bytes>,
}

impl NowPlayingInfo {
    /// A snapshot with every field absent.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.artist.is_none() && self.artwork_data.is_none()
    }
}

/// Remote commands delivered from the OS media-command service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemoteCommand {
    Play,
    Pause,
}

/// Outcome a display adapter reports back to the OS for a remote command.
///
/// Adapters own the sending half of the command channel. When the consumer
/// is gone (the channel is closed), the adapter must report
/// [`CommandStatus::Rejected`] to the OS instead of silently dropping the
/// command — the equivalent of a released command handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Handled,
    Rejected,
}

/// The OS now-playing display service.
#[cfg_attr(feature = "test-support", automock)]
#[async_trait]
pub trait NowPlayingDisplay: Send + Sync {
    /// Replace the displayed snapshot.
    ///
    /// # Errors
    ///
    /// Display failures are diagnostic only; the core logs and continues.
    async fn update(&self, info: &NowPlayingInfo) -> Result<()>;

    /// Take the remote command stream. Single-consumer.
    fn remote_commands(&self) -> UnboundedReceiver<RemoteCommand>;
}
