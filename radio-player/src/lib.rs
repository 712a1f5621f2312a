//! # Radio Player Core
//!
//! A platform-independent playback coordinator for a single internet radio
//! stream. The core receives low-level platform signals (readiness, failure,
//! buffering, interruptions, route changes, remote commands) through the
//! bridge traits in `radio-bridges`, decides the next playback action from
//! the current stream state, republishes lifecycle events on the
//! `radio-runtime` event bus, and mirrors now-playing metadata to the OS
//! display surface.
//!
//! ## Components
//!
//! - [`StreamItem`](item::StreamItem) - the immutable description of the
//!   station being streamed
//! - [`StreamState`](state::StreamState) - the coordinator-owned transient
//!   flags
//! - [`Coordinator`](coordinator::Coordinator) - the signal-to-action state
//!   machine
//! - [`NowPlayingMirror`](mirror::NowPlayingMirror) - the metadata snapshot
//!   mirrored to the OS
//! - [`ArtworkLoader`](artwork::ArtworkLoader) - fetch-with-cache for remote
//!   artwork
//! - [`RadioPlayer`](service::RadioPlayer) - the owned service serializing
//!   all of the above onto one coordination task
//!
//! ## Concurrency model
//!
//! Platform callbacks arrive from system-managed threads as messages on
//! bridge channels. The service consumes every channel on a single task, so
//! all `StreamState` mutation is serialized without locks. Artwork fetches
//! run on background tasks and deliver results back to the same task; a
//! superseded fetch simply loses to the last writer.

pub mod artwork;
pub mod coordinator;
pub mod error;
pub mod item;
pub mod mirror;
pub mod service;
pub mod state;

pub use artwork::ArtworkLoader;
pub use coordinator::Coordinator;
pub use error::{PlayerError, Result};
pub use item::{StreamArtwork, StreamItem};
pub use mirror::NowPlayingMirror;
pub use service::RadioPlayer;
pub use state::StreamState;
