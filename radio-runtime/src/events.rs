//! # Event Bus System
//!
//! Publishes playback lifecycle events to subscribers using
//! `tokio::sync::broadcast`. This is the internal notification bus the player
//! republishes platform events through: consumers subscribe to the typed
//! [`PlayerEvent`] stream instead of observing platform notifications
//! directly.
//!
//! ## Delivery semantics
//!
//! - Delivery order matches emission order.
//! - Events are ephemeral: published, cloned to each live subscriber, and
//!   discarded. There is no persistence and no replay for late subscribers.
//! - Slow subscribers receive `RecvError::Lagged` and can continue; `Closed`
//!   signals shutdown.
//!
//! ## Usage
//!
//! ```rust
//! use radio_runtime::events::{EventBus, PlayerEvent};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let bus = EventBus::new(100);
//! let mut sub = bus.subscribe();
//!
//! bus.emit(PlayerEvent::Play).ok();
//! assert_eq!(sub.recv().await.unwrap(), PlayerEvent::Play);
//! # }
//! ```

use radio_bridges::NowPlayingInfo;
use serde::{Deserialize, Serialize};
use std::fmt;
use tokio::sync::broadcast;

// Re-export commonly used types
pub use tokio::sync::broadcast::error::{RecvError, SendError};
pub use tokio::sync::broadcast::Receiver;

/// Default buffer size for the event bus channel.
///
/// Subscribers that fall behind by more than this receive
/// `RecvError::Lagged`.
pub const DEFAULT_EVENT_BUFFER_SIZE: usize = 100;

// ============================================================================
// Event Types
// ============================================================================

/// Playback lifecycle events published by the player.
///
/// One variant per notification the player emits; payloads are lightweight
/// because every subscriber receives a clone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event")]
pub enum PlayerEvent {
    /// A Play action was issued to the engine.
    Play,
    /// A Pause action was issued to the engine.
    Pause,
    /// Playback was stopped and state reset.
    Stop,
    /// The playback buffer ran dry.
    BufferingStarted,
    /// The engine reported playback is likely to keep up again.
    BufferingFinished,
    /// Playback failed; a Stop follows immediately.
    Failed {
        /// Human-readable description of the underlying error.
        message: String,
    },
    /// The now-playing snapshot changed; carries the full snapshot, which is
    /// empty after a clear.
    InfoUpdated(NowPlayingInfo),
}

impl PlayerEvent {
    /// Returns a human-readable description of the event.
    pub fn description(&self) -> &str {
        match self {
            PlayerEvent::Play => "Playback started",
            PlayerEvent::Pause => "Playback paused",
            PlayerEvent::Stop => "Playback stopped",
            PlayerEvent::BufferingStarted => "Buffering started",
            PlayerEvent::BufferingFinished => "Buffering finished",
            PlayerEvent::Failed { .. } => "Playback failed",
            PlayerEvent::InfoUpdated(_) => "Now-playing info updated",
        }
    }

    /// Returns the severity level of the event.
    pub fn severity(&self) -> EventSeverity {
        match self {
            PlayerEvent::Failed { .. } => EventSeverity::Error,
            PlayerEvent::BufferingStarted => EventSeverity::Warning,
            PlayerEvent::Play | PlayerEvent::Pause | PlayerEvent::Stop => EventSeverity::Info,
            _ => EventSeverity::Debug,
        }
    }
}

/// Event severity levels for filtering and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EventSeverity {
    /// Debug-level events (verbose)
    Debug,
    /// Informational events
    Info,
    /// Warning events
    Warning,
    /// Error events
    Error,
}

// ============================================================================
// Event Bus
// ============================================================================

/// Central event bus for publishing and subscribing to player events.
///
/// Uses `tokio::sync::broadcast` internally, which provides:
/// - Multiple producers (clone the `EventBus`)
/// - Multiple consumers (each `subscribe()` creates a new receiver)
/// - Non-blocking sends (events are cloned for each subscriber)
/// - Lagging detection (slow subscribers get `RecvError::Lagged`)
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<PlayerEvent>,
}

impl EventBus {
    /// Creates a new event bus with the specified buffer capacity.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publishes an event to all subscribers.
    ///
    /// Returns the number of subscribers that received the event, or an
    /// error when there are none. Emission with no subscribers is legal for
    /// the player (early in startup), so callers typically `.ok()` this.
    pub fn emit(&self, event: PlayerEvent) -> Result<usize, SendError<PlayerEvent>> {
        self.sender.send(event)
    }

    /// Creates a new subscriber receiving all future events.
    ///
    /// Past events are not replayed.
    pub fn subscribe(&self) -> Receiver<PlayerEvent> {
        self.sender.subscribe()
    }

    /// Returns the number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_BUFFER_SIZE)
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscriber_count", &self.subscriber_count())
            .finish()
    }
}

// ============================================================================
// Event Stream Wrapper
// ============================================================================

/// Type alias for event filter functions.
type EventFilter = Box<dyn Fn(&PlayerEvent) -> bool + Send + Sync>;

/// A wrapper around `broadcast::Receiver` with predicate filtering.
///
/// ```rust
/// use radio_runtime::events::{EventBus, EventStream, PlayerEvent};
///
/// let bus = EventBus::new(100);
/// let mut failures = EventStream::new(bus.subscribe())
///     .filter(|event| matches!(event, PlayerEvent::Failed { .. }));
/// ```
pub struct EventStream {
    receiver: Receiver<PlayerEvent>,
    filter: Option<EventFilter>,
}

impl EventStream {
    /// Creates a new event stream from a receiver.
    pub fn new(receiver: Receiver<PlayerEvent>) -> Self {
        Self {
            receiver,
            filter: None,
        }
    }

    /// Adds a filter; only matching events are returned by `recv()`.
    pub fn filter<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&PlayerEvent) -> bool + Send + Sync + 'static,
    {
        self.filter = Some(Box::new(predicate));
        self
    }

    /// Receives the next event that passes the filter.
    ///
    /// # Errors
    ///
    /// Returns `RecvError::Lagged(n)` if the subscriber fell behind by `n`
    /// events, or `RecvError::Closed` once all senders are dropped.
    pub async fn recv(&mut self) -> Result<PlayerEvent, RecvError> {
        loop {
            let event = self.receiver.recv().await?;

            let Some(filter) = &self.filter else {
                return Ok(event);
            };

            if filter(&event) {
                return Ok(event);
            }
        }
    }

    /// Attempts to receive a matching event without blocking.
    ///
    /// Returns `None` if no matching event is currently available.
    pub fn try_recv(&mut self) -> Option<Result<PlayerEvent, RecvError>> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) => {
                    let Some(filter) = &self.filter else {
                        return Some(Ok(event));
                    };

                    if filter(&event) {
                        return Some(Ok(event));
                    }
                }
                Err(broadcast::error::TryRecvError::Empty) => return None,
                Err(broadcast::error::TryRecvError::Lagged(n)) => {
                    return Some(Err(RecvError::Lagged(n)))
                }
                Err(broadcast::error::TryRecvError::Closed) => return Some(Err(RecvError::Closed)),
            }
        }
    }
}

impl fmt::Debug for EventStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventStream")
            .field("has_filter", &self.filter.is_some())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
