//! Now-playing metadata mirror.
//!
//! Holds the key-value snapshot shown on the OS lock screen / control center
//! and keeps the external display in sync: every mutation pushes the whole
//! snapshot to the [`NowPlayingDisplay`] collaborator and emits an
//! `InfoUpdated` event with the same payload. Clearing resets the snapshot
//! to empty and produces exactly one push and one event carrying the empty
//! payload.

use bytes::Bytes;
use radio_bridges::{NowPlayingDisplay, NowPlayingInfo};
use radio_runtime::events::{EventBus, PlayerEvent};
use std::sync::Arc;
use tracing::warn;

/// The metadata snapshot mirrored to the OS display.
pub struct NowPlayingMirror {
    display: Arc<dyn NowPlayingDisplay>,
    events: EventBus,
    info: NowPlayingInfo,
}

impl NowPlayingMirror {
    pub fn new(display: Arc<dyn NowPlayingDisplay>, events: EventBus) -> Self {
        Self {
            display,
            events,
            info: NowPlayingInfo::empty(),
        }
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> &NowPlayingInfo {
        &self.info
    }

    pub async fn set_title(&mut self, title: impl Into<String>) {
        self.info.title = Some(title.into());
        self.push().await;
    }

    pub async fn set_artist(&mut self, artist: impl Into<String>) {
        self.info.artist = Some(artist.into());
        self.push().await;
    }

    pub async fn set_artwork(&mut self, data: Bytes) {
        self.info.artwork_data = Some(data);
        self.push().await;
    }

    /// Reset the whole snapshot; subscribers get one event with the empty
    /// payload.
    pub async fn clear(&mut self) {
        self.info = NowPlayingInfo::empty();
        self.push().await;
    }

    async fn push(&self) {
        if let Err(error) = self.display.update(&self.info).await {
            warn!(%error, "now-playing display update failed");
        }
        self.events
            .emit(PlayerEvent::InfoUpdated(self.info.clone()))
            .ok();
    }
}
