//! MCP surface for scorebridge.
//!
//! # Key Abstractions
//!
//! - [`registry::ToolRegistry`]: tool registration and dispatch seam
//! - [`tools::ScoringTools`]: the scoring tool backed by a `ScoringProvider`
//! - [`server::McpServer`]: `rmcp` server handler over registries
//!
//! # Modules
//!
//! - [`registry`]: ToolRegistry trait and boxed tool-call futures
//! - [`error`]: conversion from scorebridge errors to MCP error data
//! - [`tools`]: the `invoke_scoring_endpoint` tool
//! - [`server`]: rmcp ServerHandler implementation

#![doc = include_str!("../README.md")]

pub mod error;
pub mod registry;
pub mod server;
pub mod tools;

pub use error::McpErrorExt;
pub use registry::{ToolRegistry, ToolResult};
pub use server::McpServer;
pub use tools::ScoringTools;

/// Re-export of the MCP model types used at the tool seam.
pub mod model {
    pub use rmcp::model::{CallToolResult, Content, ErrorData, Tool};
}
