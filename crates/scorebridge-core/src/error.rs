//! Error types for scorebridge operations.
//!
//! This module provides the common `Error` type and `Result<T>` alias used
//! across all scorebridge crates. Uses `thiserror` for derive macros.
//!
//! The invocation-facing variants mirror the stages of an endpoint call:
//! configuration is checked before any I/O ([`Error::Config`]), the network
//! can fail ([`Error::Transport`]), the remote service can answer with a
//! non-success status ([`Error::Upstream`]), and a successful response can
//! still carry an uninterpretable body ([`Error::ResponseFormat`]). None of
//! these are retried; every error is surfaced to the immediate caller.

use thiserror::Error;

/// Sentinel used when an upstream error response has no readable body.
pub const NO_RESPONSE_BODY: &str = "no response body";

/// Errors that can occur in scorebridge operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Required configuration value absent or empty. Raised before any
    /// network activity; fails the invocation, not the process.
    #[error("configuration error: {0}")]
    Config(String),

    /// Network-level failure reaching the remote service (DNS resolution,
    /// connection refused, TLS handshake).
    #[error("transport error: {message}")]
    Transport {
        /// Description of the failed operation.
        message: String,
        /// Underlying transport error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The remote service responded with a non-success status.
    #[error("upstream error {status} {reason}: {body}")]
    Upstream {
        /// HTTP status code.
        status: u16,
        /// Canonical reason phrase for the status.
        reason: String,
        /// Raw response body, or [`NO_RESPONSE_BODY`] when unavailable.
        body: String,
    },

    /// The remote service responded successfully but the body could not be
    /// interpreted as the expected array shape.
    #[error("response format error: {message}")]
    ResponseFormat {
        /// What was wrong with the body.
        message: String,
        /// Raw response body, kept for diagnostics.
        body: String,
    },

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a transport error wrapping an underlying cause.
    pub fn transport(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Transport {
            message: msg.into(),
            source: Box::new(source),
        }
    }

    /// Create an upstream error from a status code, reason, and body.
    pub fn upstream(status: u16, reason: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            reason: reason.into(),
            body: body.into(),
        }
    }

    /// Create a response format error carrying the raw body.
    pub fn response_format(msg: impl Into<String>, body: impl Into<String>) -> Self {
        Self::ResponseFormat {
            message: msg.into(),
            body: body.into(),
        }
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Returns true for configuration errors.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Returns true for transport-level failures.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Returns true for non-success upstream responses.
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Upstream { .. })
    }

    /// Returns true for uninterpretable success responses.
    pub fn is_response_format(&self) -> bool {
        matches!(self, Self::ResponseFormat { .. })
    }

    /// The upstream HTTP status code, if this is an upstream error.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias using scorebridge's Error type.
pub type Result<T> = std::result::Result<T, Error>;

// ============================================================================
// Tests
// ============================================================================
