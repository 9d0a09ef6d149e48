//! Scoring provider abstraction.

use async_trait::async_trait;

use scorebridge_core::Result;

/// Abstraction over scoring backends.
///
/// This trait lets the MCP layer work against the real endpoint client or a
/// mock without changing tool code.
#[async_trait]
pub trait ScoringProvider: Send + Sync {
    /// Request a prediction for one distributor and delivery date.
    ///
    /// Performs at most one outbound call; errors are surfaced to the
    /// caller without retry.
    async fn invoke(&self, distributor_id: f64, delivery_date: &str) -> Result<f64>;
}
