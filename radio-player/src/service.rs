//! The owned player service.
//!
//! [`RadioPlayer`] is the explicit, passed-by-reference replacement for a
//! global shared player instance: construct it with a validated
//! [`PlayerConfig`], use the async API, and tear it down with
//! [`RadioPlayer::shutdown`].
//!
//! On construction the service configures the audio session (failures are
//! logged and non-fatal), takes every bridge event stream exactly once, and
//! spawns one coordination task that multiplexes public commands, playback
//! signals, session signals, remote commands, and artwork fetch results.
//! Because the [`Coordinator`] lives on that task alone, no shared mutable
//! state needs locking.

use crate::artwork::ArtworkLoader;
use crate::coordinator::Coordinator;
use crate::error::{PlayerError, Result};
use crate::item::StreamItem;
use crate::mirror::NowPlayingMirror;
use radio_bridges::PlaybackEngine;
use radio_runtime::config::PlayerConfig;
use radio_runtime::events::{EventBus, PlayerEvent, Receiver};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::warn;

enum PlayerCommand {
    Load(StreamItem),
    Play,
    Pause,
    Stop,
}

/// Handle to the running player service.
pub struct RadioPlayer {
    commands: mpsc::UnboundedSender<PlayerCommand>,
    events: EventBus,
    engine: Arc<dyn PlaybackEngine>,
    task: JoinHandle<()>,
}

impl RadioPlayer {
    /// Construct the service and spawn its coordination task.
    pub async fn new(config: PlayerConfig) -> Self {
        if let Err(error) = config.session.configure().await {
            warn!(%error, "audio session configuration failed; continuing with platform defaults");
        }

        let events = EventBus::new(config.event_buffer_size);
        let mirror = NowPlayingMirror::new(config.display.clone(), events.clone());
        let artwork = ArtworkLoader::new(config.http_client.clone(), config.artwork_cache_entries);

        let (artwork_tx, mut artwork_rx) = mpsc::unbounded_channel();
        let (command_tx, mut command_rx) = mpsc::unbounded_channel();

        let mut coordinator = Coordinator::new(
            config.engine.clone(),
            mirror,
            artwork,
            events.clone(),
            config.max_buffer_reloads,
            artwork_tx,
        );

        let mut playback_signals = config.engine.signals();
        let mut session_signals = config.session.events();
        let mut remote_commands = config.display.remote_commands();

        let task = tokio::spawn(async move {
            loop {
                tokio::select! {
                    command = command_rx.recv() => {
                        let Some(command) = command else { break };
                        let result = match command {
                            PlayerCommand::Load(item) => coordinator.load(item).await,
                            PlayerCommand::Play => coordinator.play().await,
                            PlayerCommand::Pause => coordinator.pause().await,
                            PlayerCommand::Stop => coordinator.stop().await,
                        };
                        if let Err(error) = result {
                            warn!(%error, "player command failed");
                        }
                    }
                    Some(signal) = playback_signals.recv() => {
                        if let Err(error) = coordinator.handle_playback_signal(signal).await {
                            warn!(%error, "playback signal handling failed");
                        }
                    }
                    Some(signal) = session_signals.recv() => {
                        if let Err(error) = coordinator.handle_session_signal(signal).await {
                            warn!(%error, "session signal handling failed");
                        }
                    }
                    Some(command) = remote_commands.recv() => {
                        if let Err(error) = coordinator.handle_remote_command(command).await {
                            warn!(%error, "remote command handling failed");
                        }
                    }
                    Some(fetched) = artwork_rx.recv() => {
                        coordinator.apply_artwork(fetched).await;
                    }
                }
            }
        });

        Self {
            commands: command_tx,
            events,
            engine: config.engine,
            task,
        }
    }

    /// Queue a new item for playback.
    pub fn load(&self, item: StreamItem) -> Result<()> {
        self.send(PlayerCommand::Load(item))
    }

    /// Start or resume playback.
    pub fn play(&self) -> Result<()> {
        self.send(PlayerCommand::Play)
    }

    /// Pause playback.
    pub fn pause(&self) -> Result<()> {
        self.send(PlayerCommand::Pause)
    }

    /// Stop playback and reset all state.
    pub fn stop(&self) -> Result<()> {
        self.send(PlayerCommand::Stop)
    }

    /// Whether the engine timeline is currently advancing.
    pub async fn is_playing(&self) -> bool {
        self.engine.status().await.is_playing()
    }

    /// Whether the engine timeline is suspended with an item loaded.
    pub async fn is_paused(&self) -> bool {
        self.engine.status().await.is_paused()
    }

    /// Subscribe to lifecycle events. No replay for late subscribers.
    pub fn subscribe(&self) -> Receiver<PlayerEvent> {
        self.events.subscribe()
    }

    /// Tear the service down: close the command channel and wait for the
    /// coordination task to drain.
    pub async fn shutdown(self) {
        drop(self.commands);
        self.task.await.ok();
    }

    fn send(&self, command: PlayerCommand) -> Result<()> {
        self.commands
            .send(command)
            .map_err(|_| PlayerError::ServiceStopped)
    }
}
