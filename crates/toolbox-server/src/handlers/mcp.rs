use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use toolbox_mcp::jsonrpc::{INVALID_PARAMS, INVALID_REQUEST, METHOD_NOT_FOUND, PARSE_ERROR};
use toolbox_mcp::{JsonRpcRequest, JsonRpcResponse};

use crate::app_state::AppState;

pub const PROTOCOL_VERSION: &str = "2024-11-05";
pub const SERVER_NAME: &str = "MCP Server";

/// Handle an MCP JSON-RPC request.
///
/// Requests are answered synchronously in the response body; notifications
/// get `202 Accepted` and no body.
pub async fn mcp_request(State(state): State<AppState>, body: Bytes) -> Response {
    let value: Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!("Rejecting unparseable MCP body: {e}");
            return Json(JsonRpcResponse::error(
                Value::Null,
                PARSE_ERROR,
                format!("Parse error: {e}"),
            ))
            .into_response();
        }
    };

    let id = value.get("id").cloned().unwrap_or(Value::Null);
    let req: JsonRpcRequest = match serde_json::from_value(value) {
        Ok(req) => req,
        Err(e) => {
            return Json(JsonRpcResponse::error(
                id,
                INVALID_REQUEST,
                format!("Invalid request: {e}"),
            ))
            .into_response();
        }
    };

    // Notifications (no id key) - no response needed
    if req.is_notification() {
        tracing::info!("Received MCP notification: {}", req.method);
        return StatusCode::ACCEPTED.into_response();
    }

    let response = match req.method.as_str() {
        "initialize" => handle_initialize(&req),
        "ping" => JsonRpcResponse::success(req.response_id(), serde_json::json!({})),
        "tools/list" => handle_tools_list(&state, &req),
        "tools/call" => handle_tools_call(&state, &req).await,
        _ => JsonRpcResponse::error(req.response_id(), METHOD_NOT_FOUND, "Method not found"),
    };

    Json(response).into_response()
}

fn handle_initialize(req: &JsonRpcRequest) -> JsonRpcResponse {
    JsonRpcResponse::success(
        req.response_id(),
        serde_json::json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {
                "tools": {}
            },
            "serverInfo": {
                "name": SERVER_NAME,
                "version": env!("CARGO_PKG_VERSION")
            }
        }),
    )
}

fn handle_tools_list(state: &AppState, req: &JsonRpcRequest) -> JsonRpcResponse {
    let tools = state.registry.definitions();
    JsonRpcResponse::success(req.response_id(), serde_json::json!({ "tools": tools }))
}

async fn handle_tools_call(state: &AppState, req: &JsonRpcRequest) -> JsonRpcResponse {
    let Some(params) = &req.params else {
        return JsonRpcResponse::error(req.response_id(), INVALID_PARAMS, "Missing params");
    };

    let Some(tool_name) = params.get("name").and_then(Value::as_str) else {
        return JsonRpcResponse::error(req.response_id(), INVALID_PARAMS, "Missing tool name");
    };

    let arguments = match params.get("arguments") {
        None | Some(Value::Null) => Value::Object(serde_json::Map::new()),
        Some(arguments) => arguments.clone(),
    };

    tracing::info!("Calling tool: {tool_name}");

    match state.registry.call(tool_name, arguments).await {
        Ok(output) => JsonRpcResponse::success(req.response_id(), output.to_call_result()),
        Err(err) => {
            tracing::warn!("Tool call rejected: {err}");
            JsonRpcResponse::error(req.response_id(), INVALID_PARAMS, err.to_string())
        }
    }
}
