//! Workspace placeholder crate.
//!
//! This crate exists to expose shared feature flags that map to the individual
//! workspace crates (e.g., `radio-player`, `radio-runtime`, `bridge-reqwest`).
//! Host applications can depend on `radiokit` and enable the documented
//! features without needing to wire each crate individually.
