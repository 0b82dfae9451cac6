use axum::{extract::State, Json};
use serde_json::Value;

use crate::app_state::AppState;
use crate::router::mcp_endpoint;

/// Service summary: where the MCP endpoint lives and which tools it serves.
pub async fn root(State(state): State<AppState>) -> Json<Value> {
    Json(serde_json::json!({
        "message": "MCP Server is running",
        "mcp_endpoint": mcp_endpoint(),
        "tools": state.registry.names(),
    }))
}

/// Health check endpoint.
pub async fn health() -> Json<Value> {
    Json(serde_json::json!({ "status": "healthy" }))
}
