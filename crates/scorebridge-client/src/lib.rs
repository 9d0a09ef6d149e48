//! Scorebridge endpoint invoker.
//!
//! One outbound call per invocation, no retry, no shared mutable state.
//!
//! # Modules
//!
//! - [`payload`]: Split-orient table encoding of the scoring request
//! - [`provider`]: The `ScoringProvider` trait seam
//! - [`endpoint`]: reqwest-backed implementation against the remote service
//! - [`mock`]: Canned-response provider for tests

#![doc = include_str!("../README.md")]

pub mod endpoint;
pub mod mock;
pub mod payload;
pub mod provider;

pub use endpoint::EndpointClient;
pub use mock::MockScoringProvider;
pub use payload::{ScoreRequest, SplitTable};
pub use provider::ScoringProvider;
