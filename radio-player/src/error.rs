//! Player error types.

use radio_bridges::BridgeError;
use thiserror::Error;

/// Errors surfaced by the player.
///
/// Unrecoverable stream failures are not errors here: they arrive as engine
/// signals and are republished as `Failed` events followed by a Stop that
/// resets state.
#[derive(Error, Debug)]
pub enum PlayerError {
    /// A bridge collaborator rejected an operation.
    #[error("Bridge error: {0}")]
    Bridge(#[from] BridgeError),

    /// The service task has shut down; no further commands are accepted.
    #[error("Player service has stopped")]
    ServiceStopped,
}

/// Result type for player operations.
pub type Result<T> = std::result::Result<T, PlayerError>;
