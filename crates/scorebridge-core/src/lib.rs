//! Scorebridge Core — shared errors and configuration.
//!
//! This crate provides the foundational types used across all scorebridge
//! crates. It has no internal scorebridge dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error taxonomy and Result alias
//! - [`config`]: Layered configuration (file, environment, defaults)

#![doc = include_str!("../README.md")]

pub mod config;
pub mod error;

// Re-export key types at crate root for convenience
pub use config::{ScorebridgeConfig, ScoringConfig, ServerConfig};
pub use error::{Error, Result};
