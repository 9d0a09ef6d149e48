//! Conversion from scorebridge errors to MCP error data.
//!
//! The tool-dispatch layer is responsible for turning invocation failures
//! into whatever the calling agent protocol expects; this is that bridge.
//! Upstream failures keep their status code and body in the error data so
//! the calling agent has something to diagnose with.

use rmcp::model::ErrorData;
use scorebridge_core::Error;

/// Extension trait converting scorebridge errors into MCP `ErrorData`.
pub trait McpErrorExt {
    /// Convert to the MCP error representation.
    fn to_mcp_error(&self) -> ErrorData;
}

impl McpErrorExt for Error {
    fn to_mcp_error(&self) -> ErrorData {
        match self {
            Error::Upstream { status, body, .. } => ErrorData::internal_error(
                self.to_string(),
                Some(serde_json::json!({
                    "status_code": status,
                    "body": body,
                })),
            ),
            Error::ResponseFormat { body, .. } => ErrorData::internal_error(
                self.to_string(),
                Some(serde_json::json!({ "body": body })),
            ),
            _ => ErrorData::internal_error(self.to_string(), None),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_maps_to_internal_error() {
        let data = Error::config("missing scoring URL").to_mcp_error();
        assert!(data.message.contains("missing scoring URL"));
        assert!(data.data.is_none());
    }

    #[test]
    fn test_upstream_error_keeps_diagnostics() {
        let data = Error::upstream(401, "Unauthorized", r#"{"error": "unauthorized"}"#)
            .to_mcp_error();
        assert!(data.message.contains("401"));
        let extra = data.data.unwrap();
        assert_eq!(extra["status_code"], 401);
        assert!(extra["body"].as_str().unwrap().contains("unauthorized"));
    }

    #[test]
    fn test_response_format_error_keeps_body() {
        let data = Error::response_format("expected a JSON array", "{}").to_mcp_error();
        let extra = data.data.unwrap();
        assert_eq!(extra["body"], "{}");
    }
}
