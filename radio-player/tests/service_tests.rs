//! End-to-end tests for the owned player service.
//!
//! These drive [`RadioPlayer`] through its public API and through the fakes'
//! signal channels, then observe the outcome on the event bus. Event waits
//! are bounded so a regression hangs a test for at most a second.

mod common;

use common::{EngineAction, FakeEngine, FakeSession, RecordingDisplay};
use radio_bridges::{BridgeError, PlaybackSignal, RemoteCommand, SessionSignal};
use radio_player::RadioPlayer;
use radio_runtime::config::PlayerConfig;
use radio_runtime::events::{PlayerEvent, Receiver};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::time::timeout;

struct Rig {
    player: RadioPlayer,
    engine: std::sync::Arc<FakeEngine>,
    display: std::sync::Arc<RecordingDisplay>,
    signal_tx: UnboundedSender<PlaybackSignal>,
    session_tx: UnboundedSender<SessionSignal>,
    remote_tx: UnboundedSender<RemoteCommand>,
}

async fn rig() -> Rig {
    let (engine, signal_tx) = FakeEngine::new();
    let (session, session_tx) = FakeSession::new();
    let (display, remote_tx) = RecordingDisplay::new();

    let config = PlayerConfig::builder()
        .engine(engine.clone())
        .session(session)
        .display(display.clone())
        .build()
        .unwrap();

    Rig {
        player: RadioPlayer::new(config).await,
        engine,
        display,
        signal_tx,
        session_tx,
        remote_tx,
    }
}

async fn next_event(sub: &mut Receiver<PlayerEvent>) -> PlayerEvent {
    timeout(Duration::from_secs(1), sub.recv())
        .await
        .expect("timed out waiting for event")
        .expect("event bus closed")
}

/// Commands and bridge signals travel on separate channels, so a test that
/// sends both must wait until the engine has seen the command before firing
/// the signal.
async fn wait_for_action(engine: &FakeEngine, wanted: &EngineAction) {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(1);
    while engine.action_count(wanted) == 0 {
        if tokio::time::Instant::now() > deadline {
            panic!("timed out waiting for engine action {wanted:?}");
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}

#[tokio::test]
async fn readiness_after_load_starts_playback() {
    let rig = rig().await;
    let mut sub = rig.player.subscribe();

    rig.player.load(common::test_item("city-fm")).unwrap();
    wait_for_action(
        &rig.engine,
        &EngineAction::Load("https://stream.example/city-fm.aac".into()),
    )
    .await;
    rig.signal_tx.send(PlaybackSignal::Ready).unwrap();

    assert_eq!(next_event(&mut sub).await, PlayerEvent::Play);
    assert_eq!(
        rig.engine.actions(),
        vec![
            EngineAction::Load("https://stream.example/city-fm.aac".into()),
            EngineAction::Play,
        ]
    );
}

#[tokio::test]
async fn remote_pause_flows_through_the_service() {
    let rig = rig().await;
    let mut sub = rig.player.subscribe();

    rig.remote_tx.send(RemoteCommand::Pause).unwrap();

    assert_eq!(next_event(&mut sub).await, PlayerEvent::Pause);
    assert_eq!(rig.engine.action_count(&EngineAction::Pause), 1);
}

#[tokio::test]
async fn interruption_cycle_resumes_playback() {
    let rig = rig().await;
    let mut sub = rig.player.subscribe();

    rig.session_tx.send(SessionSignal::InterruptionBegan).unwrap();
    rig.session_tx
        .send(SessionSignal::InterruptionEnded {
            should_resume: true,
        })
        .unwrap();

    assert_eq!(next_event(&mut sub).await, PlayerEvent::Play);
    assert_eq!(rig.engine.action_count(&EngineAction::Play), 1);
}

#[tokio::test]
async fn stop_clears_the_display() {
    let rig = rig().await;
    let mut sub = rig.player.subscribe();

    rig.player.load(common::test_item("city-fm")).unwrap();
    rig.player.stop().unwrap();

    // InfoUpdated(empty) from the mirror clear, then Stop.
    match next_event(&mut sub).await {
        PlayerEvent::InfoUpdated(info) => assert!(info.is_empty()),
        other => panic!("unexpected event {other:?}"),
    }
    assert_eq!(next_event(&mut sub).await, PlayerEvent::Stop);

    let updates = rig.display.updates();
    assert!(updates.last().unwrap().is_empty());
}

#[tokio::test]
async fn session_configure_failure_is_non_fatal() {
    let (engine, _signal_tx) = FakeEngine::new();
    let (session, _session_tx) = FakeSession::new();
    let (display, _remote_tx) = RecordingDisplay::new();
    session.fail_configure(BridgeError::NotAvailable("no audio hardware".into()));

    let config = PlayerConfig::builder()
        .engine(engine.clone())
        .session(session)
        .display(display)
        .build()
        .unwrap();
    let player = RadioPlayer::new(config).await;
    let mut sub = player.subscribe();

    player.play().unwrap();
    assert_eq!(next_event(&mut sub).await, PlayerEvent::Play);
}

#[tokio::test]
async fn failed_stream_stops_the_player() {
    let rig = rig().await;
    let mut sub = rig.player.subscribe();

    rig.player.load(common::test_item("city-fm")).unwrap();
    wait_for_action(
        &rig.engine,
        &EngineAction::Load("https://stream.example/city-fm.aac".into()),
    )
    .await;
    rig.signal_tx
        .send(PlaybackSignal::Failed {
            message: "stream gone".into(),
        })
        .unwrap();

    assert_eq!(
        next_event(&mut sub).await,
        PlayerEvent::Failed {
            message: "stream gone".into()
        }
    );
    loop {
        if next_event(&mut sub).await == PlayerEvent::Stop {
            break;
        }
    }
    assert_eq!(rig.engine.action_count(&EngineAction::Unload), 1);
}

#[tokio::test]
async fn shutdown_drains_queued_commands() {
    let rig = rig().await;

    rig.player.load(common::test_item("city-fm")).unwrap();
    timeout(Duration::from_secs(1), rig.player.shutdown())
        .await
        .expect("shutdown timed out");

    // The queued load ran before the task drained.
    assert_eq!(
        rig.engine.actions(),
        vec![EngineAction::Load("https://stream.example/city-fm.aac".into())]
    );
}

#[tokio::test]
async fn is_playing_reflects_engine_status() {
    let rig = rig().await;

    assert!(!rig.player.is_playing().await);
    assert!(!rig.player.is_paused().await);

    rig.engine.set_status(radio_bridges::EngineStatus::Playing);
    assert!(rig.player.is_playing().await);

    rig.engine.set_status(radio_bridges::EngineStatus::Paused);
    assert!(rig.player.is_paused().await);
}
