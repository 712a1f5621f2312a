//! The playback coordination state machine.
//!
//! The coordinator receives low-level platform signals and decides the next
//! playback action from the current [`StreamState`]: start playback on
//! readiness, reload a stalled stream, resume after interruptions, pause
//! when the output route disappears, stop on failure. Actions are side
//! effects on the [`PlaybackEngine`] collaborator plus an event-bus publish.
//!
//! All handlers run on the owning service's single coordination task, so the
//! state is mutated by exactly one writer. Transitions are synchronous and
//! idempotent at the flag level: clearing an already-clear flag is legal.

use crate::artwork::ArtworkLoader;
use crate::error::Result;
use crate::item::StreamItem;
use crate::mirror::NowPlayingMirror;
use crate::state::StreamState;
use bytes::Bytes;
use radio_bridges::{PlaybackEngine, PlaybackSignal, RemoteCommand, SessionSignal};
use radio_runtime::events::{EventBus, PlayerEvent};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info, warn};

/// The signal-to-action playback coordinator.
///
/// Owns [`StreamState`] exclusively. `is_playing`/`is_paused` are derived
/// from the engine timeline on demand; the invariant that a Play is never
/// issued while `is_interrupted` is set holds because the only Play path
/// that runs during an interruption is the explicit interruption-end
/// handler, which clears the flag.
pub struct Coordinator {
    engine: Arc<dyn PlaybackEngine>,
    mirror: NowPlayingMirror,
    artwork: ArtworkLoader,
    events: EventBus,
    state: StreamState,
    max_buffer_reloads: u32,
    artwork_tx: UnboundedSender<Option<Bytes>>,
}

impl Coordinator {
    /// `artwork_tx` is the channel through which background artwork fetches
    /// deliver their result back onto the coordination task; the owning
    /// service feeds received values into [`Coordinator::apply_artwork`].
    pub fn new(
        engine: Arc<dyn PlaybackEngine>,
        mirror: NowPlayingMirror,
        artwork: ArtworkLoader,
        events: EventBus,
        max_buffer_reloads: u32,
        artwork_tx: UnboundedSender<Option<Bytes>>,
    ) -> Self {
        Self {
            engine,
            mirror,
            artwork,
            events,
            state: StreamState::new(),
            max_buffer_reloads,
            artwork_tx,
        }
    }

    /// Read-only view of the coordinator state.
    pub fn state(&self) -> &StreamState {
        &self.state
    }

    /// The mirrored now-playing snapshot.
    pub fn now_playing(&self) -> &radio_bridges::NowPlayingInfo {
        self.mirror.snapshot()
    }

    // ========================================================================
    // Actions
    // ========================================================================

    /// Replace the current item wholesale and hand its stream to the engine.
    pub async fn load(&mut self, item: StreamItem) -> Result<()> {
        info!(name = %item.name, url = %item.stream_url, "loading stream item");
        self.state.reload_attempts = 0;
        self.engine.load(&item.stream_url).await?;
        self.state.current_item = Some(item);
        Ok(())
    }

    /// Start the engine timeline and announce it.
    pub async fn play(&mut self) -> Result<()> {
        self.engine.play().await?;
        self.events.emit(PlayerEvent::Play).ok();
        Ok(())
    }

    /// Suspend the engine timeline and announce it.
    pub async fn pause(&mut self) -> Result<()> {
        self.engine.pause().await?;
        self.events.emit(PlayerEvent::Pause).ok();
        Ok(())
    }

    /// Stop playback entirely: drop the item, reset every flag, blank the
    /// now-playing display, and announce the stop.
    pub async fn stop(&mut self) -> Result<()> {
        self.state.clear();
        self.engine.pause().await?;
        self.engine.unload().await?;
        self.mirror.clear().await;
        self.events.emit(PlayerEvent::Stop).ok();
        Ok(())
    }

    // ========================================================================
    // Platform signal handling
    // ========================================================================

    /// React to a signal from the playback engine.
    pub async fn handle_playback_signal(&mut self, signal: PlaybackSignal) -> Result<()> {
        match signal {
            PlaybackSignal::Ready => {
                let status = self.engine.status().await;
                if !status.is_playing() && !status.is_paused() {
                    self.play().await?;
                }
            }
            PlaybackSignal::NotReady => {
                debug!("stream item not ready yet");
            }
            PlaybackSignal::Failed { message } => {
                warn!(%message, "stream item failed");
                self.events
                    .emit(PlayerEvent::Failed {
                        message: message.clone(),
                    })
                    .ok();
                self.stop().await?;
            }
            PlaybackSignal::BufferingStarted { buffer_empty } => {
                self.events.emit(PlayerEvent::BufferingStarted).ok();
                if buffer_empty {
                    self.reload_current_item().await?;
                }
                self.state.is_buffering = true;
            }
            PlaybackSignal::BufferingFinished => {
                self.events.emit(PlayerEvent::BufferingFinished).ok();
                let status = self.engine.status().await;
                if status.is_paused() && self.state.is_buffering {
                    self.play().await?;
                    self.refresh_now_playing().await;
                }
                self.state.is_buffering = false;
                self.state.reload_attempts = 0;
            }
            PlaybackSignal::TimedMetadata { title } => {
                self.mirror.set_title(title).await;
            }
        }
        Ok(())
    }

    /// React to an audio-session signal.
    pub async fn handle_session_signal(&mut self, signal: SessionSignal) -> Result<()> {
        match signal {
            SessionSignal::InterruptionBegan => {
                self.state.is_interrupted = true;
            }
            SessionSignal::InterruptionEnded { should_resume } => {
                debug!(should_resume, "interruption ended");
                if self.state.is_interrupted {
                    self.play().await?;
                }
                self.state.is_interrupted = false;
            }
            SessionSignal::RouteAdded => {
                info!("audio output route added");
            }
            SessionSignal::RouteRemoved => {
                if self.engine.status().await.is_playing() {
                    self.pause().await?;
                }
            }
            SessionSignal::RouteChanged { reason } => {
                debug!(reason, "audio route changed");
            }
        }
        Ok(())
    }

    /// React to a remote command from the now-playing display.
    pub async fn handle_remote_command(&mut self, command: RemoteCommand) -> Result<()> {
        match command {
            RemoteCommand::Play => self.play().await,
            RemoteCommand::Pause => self.pause().await,
        }
    }

    /// Apply the result of a background artwork fetch. `None` falls back to
    /// the current item's placeholder. Results are applied in arrival order;
    /// a superseded fetch simply loses to the last writer.
    pub async fn apply_artwork(&mut self, fetched: Option<Bytes>) {
        let Some(item) = &self.state.current_item else {
            return;
        };
        let data = fetched.unwrap_or_else(|| item.artwork.placeholder.clone());
        self.mirror.set_artwork(data).await;
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Recovery path for a genuinely empty buffer: reissue the load for the
    /// current item, bounded by `max_buffer_reloads` consecutive attempts.
    async fn reload_current_item(&mut self) -> Result<()> {
        let Some(item) = self.state.current_item.clone() else {
            return Ok(());
        };
        if self.state.reload_attempts >= self.max_buffer_reloads {
            warn!(
                attempts = self.state.reload_attempts,
                "buffer still empty after maximum reloads; leaving stream stalled"
            );
            return Ok(());
        }
        self.state.reload_attempts += 1;
        info!(
            attempt = self.state.reload_attempts,
            url = %item.stream_url,
            "reloading stalled stream"
        );
        self.engine.load(&item.stream_url).await?;
        Ok(())
    }

    /// Push the current item's metadata to the now-playing mirror and kick
    /// off the artwork fetch on a background task.
    async fn refresh_now_playing(&mut self) {
        let Some(item) = self.state.current_item.clone() else {
            return;
        };
        self.mirror.set_title(item.name.clone()).await;
        self.mirror.set_artist(item.description.clone()).await;

        let loader = self.artwork.clone();
        let url = item.artwork.remote_url.clone();
        let tx = self.artwork_tx.clone();
        tokio::spawn(async move {
            let fetched = loader.fetch(url.as_deref()).await;
            // The receiver is gone only during shutdown.
            tx.send(fetched).ok();
        });
    }
}
