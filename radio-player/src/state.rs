//! Transient stream state owned by the coordinator.

use crate::item::StreamItem;

/// The coordinator's mutable view of the current stream.
///
/// `is_playing` / `is_paused` are deliberately absent: the timeline state is
/// derived from the engine on demand, never stored. `is_buffering` and
/// `is_interrupted` are independent flags; clearing an already-clear flag is
/// legal.
#[derive(Debug, Clone)]
pub struct StreamState {
    /// The currently loaded item, owned exclusively by the coordinator.
    pub current_item: Option<StreamItem>,
    /// Set while the engine is rebuffering.
    pub is_buffering: bool,
    /// Set between interruption-begin and interruption-end signals.
    pub is_interrupted: bool,
    /// Connectivity hint. Tracked, defaulted to connected, and not consulted
    /// by any transition.
    pub is_connected: bool,
    /// Consecutive stalled-stream reloads since buffering last finished.
    pub reload_attempts: u32,
}

impl StreamState {
    pub fn new() -> Self {
        Self {
            current_item: None,
            is_buffering: false,
            is_interrupted: false,
            is_connected: true,
            reload_attempts: 0,
        }
    }

    /// Reset to the fresh-stop state: no item, all flags cleared.
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

impl Default for StreamState {
    fn default() -> Self {
        Self::new()
    }
}
