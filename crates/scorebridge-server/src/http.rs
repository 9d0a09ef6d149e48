//! The axum application hosting the MCP service.
//!
//! Routes:
//!
//! - `/mcp` — the MCP streamable-HTTP mount (stateless sessions, so cloud
//!   load balancers can route requests to any replica)
//! - `/health` — liveness probe for container orchestration
//! - `/` — service descriptor listing the mount paths
//!
//! CORS is wide open; browser-based MCP clients need it.

use axum::routing::get;
use axum::{Json, Router};
use rmcp::transport::streamable_http_server::session::local::LocalSessionManager;
use rmcp::transport::streamable_http_server::{StreamableHttpServerConfig, StreamableHttpService};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tracing::info;

use scorebridge_client::EndpointClient;
use scorebridge_core::{Result, ScorebridgeConfig};
use scorebridge_mcp::{McpServer, ScoringTools};

/// Path the MCP service is nested under.
pub const MCP_PATH: &str = "/mcp";

/// Build the axum router around an MCP server handler.
pub fn router(handler: McpServer) -> Router {
    let mut mcp_config = StreamableHttpServerConfig::default();
    mcp_config.stateful_mode = false;
    let mcp_service = StreamableHttpService::new(
        move || Ok(handler.clone()),
        LocalSessionManager::default().into(),
        mcp_config,
    );

    Router::new()
        .route("/health", get(health))
        .route("/", get(root))
        .nest_service(MCP_PATH, mcp_service)
        .layer(CorsLayer::permissive())
}

/// Liveness probe for container orchestration.
async fn health() -> Json<Value> {
    Json(json!({"status": "healthy"}))
}

/// Service descriptor listing the mount paths.
async fn root() -> Json<Value> {
    Json(json!({
        "service": "scorebridge",
        "mcp_endpoint": MCP_PATH,
        "health_endpoint": "/health",
    }))
}

/// Build the handler from configuration and serve until shutdown.
pub async fn serve(config: &ScorebridgeConfig, port_override: Option<u16>) -> Result<()> {
    let port = port_override.unwrap_or(config.server.port);
    let addr = format!("{}:{}", config.server.host, port);

    let client = EndpointClient::new(config.scoring.clone());
    let handler = McpServer::new(vec![Box::new(ScoringTools::new(client))]);
    let app = router(handler);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, mcp = MCP_PATH, "scorebridge listening");
    axum::serve(listener, app).await?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
