//! # Radio Runtime Module
//!
//! Provides foundational runtime infrastructure for the radio playback core:
//! - Logging and tracing infrastructure
//! - Configuration management
//! - Event bus system
//!
//! ## Overview
//!
//! This crate contains the runtime utilities the player crate depends on. It
//! establishes the logging conventions, the fail-fast configuration builder
//! that collects host bridge implementations, and the broadcast event bus
//! through which playback lifecycle events reach subscribers.

pub mod config;
pub mod error;
pub mod events;
pub mod logging;

pub use error::{Result, RuntimeError};
