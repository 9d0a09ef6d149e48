//! The MCP server handler.
//!
//! [`McpServer`] implements `rmcp::ServerHandler` over a set of
//! [`ToolRegistry`] values: `tools/list` concatenates every registry's
//! tools, `tools/call` dispatches to the first registry that owns the name.

use std::sync::Arc;

use rmcp::model::{
    CallToolRequestParam, CallToolResult, ErrorData, ListToolsResult, PaginatedRequestParam,
    ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::RequestContext;
use rmcp::{RoleServer, ServerHandler};
use serde_json::Value;
use tracing::debug;

use crate::registry::{ToolRegistry, ToolResult};

/// MCP server handler dispatching tool calls to registries.
///
/// Cloning is cheap; the registries are shared. Each inbound session gets a
/// clone of this handler from the transport service.
#[derive(Clone)]
pub struct McpServer {
    registries: Arc<Vec<Box<dyn ToolRegistry>>>,
    instructions: String,
}

impl McpServer {
    /// Create a server handler over the given registries.
    pub fn new(registries: Vec<Box<dyn ToolRegistry>>) -> Self {
        Self {
            registries: Arc::new(registries),
            instructions: "Exposes a hosted forecasting model as a callable tool.".to_string(),
        }
    }

    /// Override the instructions advertised to clients.
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    /// All tools across all registries, in registration order.
    pub fn all_tools(&self) -> Vec<Tool> {
        self.registries.iter().flat_map(|r| r.tools()).collect()
    }

    /// Dispatch a call to the first registry that owns the tool.
    pub fn dispatch(&self, name: &str, args: Value) -> Option<ToolResult> {
        self.registries
            .iter()
            .find_map(|r| r.call(name, args.clone()))
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.capabilities = ServerCapabilities::builder().enable_tools().build();
        info.instructions = Some(self.instructions.clone());
        info
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult {
            tools: self.all_tools(),
            ..Default::default()
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        debug!(tool = %request.name, "tool call received");

        let args = request
            .arguments
            .map(Value::Object)
            .unwrap_or_else(|| Value::Object(serde_json::Map::new()));

        match self.dispatch(&request.name, args) {
            Some(future) => future.await,
            None => Err(ErrorData::invalid_params(
                format!("unknown tool: {}", request.name),
                None,
            )),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::{ScoringTools, INVOKE_TOOL};
    use scorebridge_client::mock::MockScoringProvider;

    fn server_with_prediction(value: f64) -> McpServer {
        McpServer::new(vec![Box::new(ScoringTools::new(
            MockScoringProvider::with_prediction(value),
        ))])
    }

    #[test]
    fn test_server_lists_registry_tools() {
        let server = server_with_prediction(1.0);
        let tools = server.all_tools();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, INVOKE_TOOL);
    }

    #[test]
    fn test_server_info_advertises_tools() {
        let server = server_with_prediction(1.0).with_instructions("custom instructions");
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert_eq!(info.instructions.as_deref(), Some("custom instructions"));
    }

    #[tokio::test]
    async fn test_dispatch_routes_to_owning_registry() {
        let server = server_with_prediction(42.5);
        let result = server
            .dispatch(
                INVOKE_TOOL,
                serde_json::json!({"distributor_id": 7, "delivery_date": "2024-01-15"}),
            )
            .unwrap()
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(false));
    }

    #[test]
    fn test_dispatch_unknown_tool_is_none() {
        let server = server_with_prediction(1.0);
        assert!(server
            .dispatch("no_such_tool", serde_json::json!({}))
            .is_none());
    }

    #[test]
    fn test_empty_server_has_no_tools() {
        let server = McpServer::new(Vec::new());
        assert!(server.all_tools().is_empty());
    }
}
