//! The scoring tool.
//!
//! Provides `ScoringTools<P>`, a `ToolRegistry` exposing one tool that
//! forwards to a [`ScoringProvider`].

use std::sync::Arc;

use rmcp::model::{CallToolResult, Content, ErrorData, Tool};
use serde::Deserialize;
use serde_json::Value;

use scorebridge_client::provider::ScoringProvider;

use crate::error::McpErrorExt;
use crate::registry::{ToolRegistry, ToolResult};

/// Name of the endpoint-invocation tool.
pub const INVOKE_TOOL: &str = "invoke_scoring_endpoint";

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Convert a `serde_json::Value::Object` to an `Arc<serde_json::Map>`.
fn json_schema(value: Value) -> Arc<serde_json::Map<String, Value>> {
    match value {
        Value::Object(map) => Arc::new(map),
        _ => Arc::new(serde_json::Map::new()),
    }
}

/// Build a `Tool` with a JSON schema.
fn make_tool(name: &str, description: &str, schema: Value) -> Tool {
    Tool::new(name.to_string(), description.to_string(), json_schema(schema))
}

// ---------------------------------------------------------------------------
// Argument types
// ---------------------------------------------------------------------------

/// Arguments for the invoke_scoring_endpoint tool.
#[derive(Debug, Deserialize)]
pub struct InvokeEndpointArgs {
    /// Distributor organization reference ID.
    pub distributor_id: f64,
    /// Scheduled delivery date, "YYYY-MM-DD".
    pub delivery_date: String,
}

// ---------------------------------------------------------------------------
// ScoringTools<P>
// ---------------------------------------------------------------------------

/// MCP tools backed by a [`ScoringProvider`].
///
/// Exposes a single tool, `invoke_scoring_endpoint`, which requests one
/// prediction from the remote model and returns it as text content.
pub struct ScoringTools<P: ScoringProvider> {
    provider: Arc<P>,
}

impl<P: ScoringProvider + 'static> ScoringTools<P> {
    /// Create new scoring tools with the given provider.
    pub fn new(provider: P) -> Self {
        Self {
            provider: Arc::new(provider),
        }
    }

    /// Create scoring tools with a shared provider reference.
    pub fn with_shared(provider: Arc<P>) -> Self {
        Self { provider }
    }
}

impl<P: ScoringProvider + 'static> ToolRegistry for ScoringTools<P> {
    fn tools(&self) -> Vec<Tool> {
        vec![make_tool(
            INVOKE_TOOL,
            "Invoke the hosted forecasting model for a prediction. \
             Takes a distributor organization reference ID and a scheduled \
             delivery date (YYYY-MM-DD) and returns the predicted value.",
            serde_json::json!({
                "type": "object",
                "properties": {
                    "distributor_id": {
                        "type": "number",
                        "description": "Distributor organization reference ID"
                    },
                    "delivery_date": {
                        "type": "string",
                        "description": "Scheduled delivery date in YYYY-MM-DD format"
                    }
                },
                "required": ["distributor_id", "delivery_date"]
            }),
        )]
    }

    fn call(&self, name: &str, args: Value) -> Option<ToolResult> {
        if name != INVOKE_TOOL {
            return None;
        }

        let provider = Arc::clone(&self.provider);
        Some(Box::pin(async move {
            let args: InvokeEndpointArgs = serde_json::from_value(args)
                .map_err(|e| ErrorData::invalid_params(e.to_string(), None))?;
            let prediction = provider
                .invoke(args.distributor_id, &args.delivery_date)
                .await
                .map_err(|e| e.to_mcp_error())?;
            Ok(CallToolResult::success(vec![Content::text(
                prediction.to_string(),
            )]))
        }))
    }
}

// ============================================================================
// Tests
// ============================================================================
