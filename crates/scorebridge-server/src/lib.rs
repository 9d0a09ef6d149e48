//! HTTP host for scorebridge.
//!
//! # Modules
//!
//! - [`cli`]: argument parsing and command definitions
//! - [`app`]: logging init and command dispatch
//! - [`http`]: the axum router and MCP service mount

#![doc = include_str!("../README.md")]

pub mod app;
pub mod cli;
pub mod http;

pub use app::App;
pub use cli::{BaseCommand, CliArgs};
