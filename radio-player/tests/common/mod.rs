//! Hand-rolled bridge fakes shared by the integration suites.

#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use radio_bridges::error::Result as BridgeResult;
use radio_bridges::{
    AudioSession, BridgeError, EngineStatus, NowPlayingDisplay, NowPlayingInfo, PlaybackEngine,
    PlaybackSignal, RemoteCommand, SessionSignal,
};
use radio_player::{StreamArtwork, StreamItem};
use std::sync::Mutex;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

// ============================================================================
// FakeEngine
// ============================================================================

/// Every action issued to the engine, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineAction {
    Load(String),
    Play,
    Pause,
    Unload,
}

/// Engine fake that records actions and reports a settable status.
pub struct FakeEngine {
    actions: Mutex<Vec<EngineAction>>,
    status: Mutex<EngineStatus>,
    signals: Mutex<Option<UnboundedReceiver<PlaybackSignal>>>,
}

impl FakeEngine {
    /// Returns the engine plus the sending half of its signal channel.
    pub fn new() -> (std::sync::Arc<Self>, UnboundedSender<PlaybackSignal>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let engine = std::sync::Arc::new(Self {
            actions: Mutex::new(Vec::new()),
            status: Mutex::new(EngineStatus::Waiting),
            signals: Mutex::new(Some(rx)),
        });
        (engine, tx)
    }

    pub fn set_status(&self, status: EngineStatus) {
        *self.status.lock().unwrap() = status;
    }

    pub fn actions(&self) -> Vec<EngineAction> {
        self.actions.lock().unwrap().clone()
    }

    pub fn action_count(&self, wanted: &EngineAction) -> usize {
        self.actions().iter().filter(|a| *a == wanted).count()
    }
}

#[async_trait]
impl PlaybackEngine for FakeEngine {
    async fn load(&self, url: &str) -> BridgeResult<()> {
        self.actions
            .lock()
            .unwrap()
            .push(EngineAction::Load(url.to_string()));
        Ok(())
    }

    async fn play(&self) -> BridgeResult<()> {
        self.actions.lock().unwrap().push(EngineAction::Play);
        Ok(())
    }

    async fn pause(&self) -> BridgeResult<()> {
        self.actions.lock().unwrap().push(EngineAction::Pause);
        Ok(())
    }

    async fn unload(&self) -> BridgeResult<()> {
        self.actions.lock().unwrap().push(EngineAction::Unload);
        Ok(())
    }

    async fn status(&self) -> EngineStatus {
        *self.status.lock().unwrap()
    }

    fn signals(&self) -> UnboundedReceiver<PlaybackSignal> {
        self.signals
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| mpsc::unbounded_channel().1)
    }
}

// ============================================================================
// FakeSession
// ============================================================================

/// Session fake with a settable configure outcome.
pub struct FakeSession {
    configure_error: Mutex<Option<BridgeError>>,
    events: Mutex<Option<UnboundedReceiver<SessionSignal>>>,
}

impl FakeSession {
    pub fn new() -> (std::sync::Arc<Self>, UnboundedSender<SessionSignal>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let session = std::sync::Arc::new(Self {
            configure_error: Mutex::new(None),
            events: Mutex::new(Some(rx)),
        });
        (session, tx)
    }

    pub fn fail_configure(&self, error: BridgeError) {
        *self.configure_error.lock().unwrap() = Some(error);
    }
}

#[async_trait]
impl AudioSession for FakeSession {
    async fn configure(&self) -> BridgeResult<()> {
        match self.configure_error.lock().unwrap().take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn events(&self) -> UnboundedReceiver<SessionSignal> {
        self.events
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| mpsc::unbounded_channel().1)
    }
}

// ============================================================================
// RecordingDisplay
// ============================================================================

/// Display fake that records every snapshot it receives.
pub struct RecordingDisplay {
    updates: Mutex<Vec<NowPlayingInfo>>,
    commands: Mutex<Option<UnboundedReceiver<RemoteCommand>>>,
}

impl RecordingDisplay {
    pub fn new() -> (std::sync::Arc<Self>, UnboundedSender<RemoteCommand>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let display = std::sync::Arc::new(Self {
            updates: Mutex::new(Vec::new()),
            commands: Mutex::new(Some(rx)),
        });
        (display, tx)
    }

    pub fn updates(&self) -> Vec<NowPlayingInfo> {
        self.updates.lock().unwrap().clone()
    }
}

#[async_trait]
impl NowPlayingDisplay for RecordingDisplay {
    async fn update(&self, info: &NowPlayingInfo) -> BridgeResult<()> {
        self.updates.lock().unwrap().push(info.clone());
        Ok(())
    }

    fn remote_commands(&self) -> UnboundedReceiver<RemoteCommand> {
        self.commands
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| mpsc::unbounded_channel().1)
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn test_item(name: &str) -> StreamItem {
    StreamItem::new(
        name,
        format!("{name} description"),
        format!("https://stream.example/{name}.aac"),
        StreamArtwork::placeholder_only(Bytes::from_static(&[0xAA, 0xBB])),
    )
}
