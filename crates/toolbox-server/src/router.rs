use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::app_state::AppState;
use crate::handlers;

/// Prefix the MCP application is mounted under.
pub const MCP_MOUNT: &str = "/mcp-server";
/// Path of the JSON-RPC endpoint inside the MCP application.
pub const MCP_PATH: &str = "/mcp";

/// Full path of the JSON-RPC endpoint.
pub fn mcp_endpoint() -> String {
    format!("{MCP_MOUNT}{MCP_PATH}")
}

/// Create the main application router with all routes.
pub fn create_router(state: AppState) -> Router {
    let mcp = Router::new().route(MCP_PATH, post(handlers::mcp_request));

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .nest(MCP_MOUNT, mcp)
        // CORS: any origin is echoed back with credentials allowed. This is a
        // development default, not a security boundary.
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}
