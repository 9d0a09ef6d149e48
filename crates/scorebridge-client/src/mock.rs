//! Mock scoring provider for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use scorebridge_core::{Error, Result};

use crate::provider::ScoringProvider;

/// Canned outcome returned by the mock.
#[derive(Clone, Debug)]
pub enum CannedOutcome {
    /// A successful prediction.
    Value(f64),
    /// An upstream failure with the given status and body.
    Upstream {
        /// HTTP status code to report.
        status: u16,
        /// Error body to report.
        body: String,
    },
}

/// Mock scoring provider that returns canned outcomes.
///
/// Outcomes are returned in order and cycle after the last one. Every call
/// is recorded so tests can assert on received arguments and call counts.
#[derive(Clone)]
pub struct MockScoringProvider {
    state: Arc<Mutex<MockState>>,
}

struct MockState {
    canned: Vec<CannedOutcome>,
    index: usize,
    calls: Vec<(f64, String)>,
}

impl MockScoringProvider {
    /// Creates a new mock provider with canned outcomes.
    ///
    /// # Panics
    ///
    /// Panics if `canned` is empty; the mock needs at least one outcome
    /// to cycle through.
    pub fn new(canned: Vec<CannedOutcome>) -> Self {
        assert!(!canned.is_empty(), "at least one canned outcome required");
        Self {
            state: Arc::new(Mutex::new(MockState {
                canned,
                index: 0,
                calls: Vec::new(),
            })),
        }
    }

    /// Creates a mock provider that always returns one prediction.
    pub fn with_prediction(value: f64) -> Self {
        Self::new(vec![CannedOutcome::Value(value)])
    }

    /// Creates a mock provider that always fails upstream.
    pub fn with_upstream_error(status: u16, body: impl Into<String>) -> Self {
        Self::new(vec![CannedOutcome::Upstream {
            status,
            body: body.into(),
        }])
    }

    /// Number of invocations received so far.
    pub async fn call_count(&self) -> usize {
        self.state.lock().await.calls.len()
    }

    /// Arguments received so far, in call order.
    pub async fn calls(&self) -> Vec<(f64, String)> {
        self.state.lock().await.calls.clone()
    }
}

#[async_trait]
impl ScoringProvider for MockScoringProvider {
    async fn invoke(&self, distributor_id: f64, delivery_date: &str) -> Result<f64> {
        let mut state = self.state.lock().await;
        state.calls.push((distributor_id, delivery_date.to_string()));

        let outcome = state.canned[state.index].clone();
        // Advance to next outcome (cycling)
        state.index = (state.index + 1) % state.canned.len();

        match outcome {
            CannedOutcome::Value(v) => Ok(v),
            CannedOutcome::Upstream { status, body } => {
                Err(Error::upstream(status, "Mock", body))
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
