//! Tool registration and dispatch seam.
//!
//! Registries own a set of MCP tools and dispatch calls to them. The server
//! handler composes any number of registries; a registry answers `None` for
//! names it does not own so dispatch can fall through.

use std::future::Future;
use std::pin::Pin;

use rmcp::model::{CallToolResult, ErrorData, Tool};
use serde_json::Value;

/// Boxed future produced by a tool call.
pub type ToolResult = Pin<Box<dyn Future<Output = Result<CallToolResult, ErrorData>> + Send>>;

/// A set of MCP tools with a dispatcher.
pub trait ToolRegistry: Send + Sync {
    /// The tools this registry exposes, for `tools/list`.
    fn tools(&self) -> Vec<Tool>;

    /// Dispatch a call by tool name.
    ///
    /// Returns `None` when this registry does not own the tool.
    fn call(&self, name: &str, args: Value) -> Option<ToolResult>;

    /// Whether this registry owns a tool with the given name.
    fn has_tool(&self, name: &str) -> bool {
        self.tools().iter().any(|t| t.name == name)
    }

    /// Number of tools exposed by this registry.
    fn tool_count(&self) -> usize {
        self.tools().len()
    }
}
