use anyhow::Context;
use reqwest::Client;
use serde_json::Value;
use uuid::Uuid;

use toolbox_mcp::{JsonRpcRequest, JsonRpcResponse, ToolDefinition};

/// Minimal JSON-RPC client for a toolbox server's MCP endpoint.
pub struct McpClient {
    http: Client,
    url: String,
}

impl McpClient {
    pub fn new(url: &str) -> Self {
        Self {
            http: Client::new(),
            url: url.to_string(),
        }
    }

    async fn request(&self, method: &str, params: Option<Value>) -> anyhow::Result<Value> {
        let id = Uuid::new_v4().to_string();
        tracing::debug!(%id, method, "sending request");
        let request = JsonRpcRequest::new(id, method, params);

        let resp = self.http.post(&self.url).json(&request).send().await?;
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await?;
            anyhow::bail!("Server returned {status}: {body}");
        }

        let response: JsonRpcResponse = resp.json().await.context("invalid JSON-RPC response")?;
        into_result(response)
    }

    pub async fn list_tools(&self) -> anyhow::Result<Vec<ToolDefinition>> {
        let result = self.request("tools/list", Some(serde_json::json!({}))).await?;
        let tools = result.get("tools").cloned().unwrap_or(Value::Array(Vec::new()));
        Ok(serde_json::from_value(tools)?)
    }

    /// Call a tool and return its text content.
    pub async fn call_tool(&self, name: &str, arguments: Value) -> anyhow::Result<String> {
        let result = self
            .request(
                "tools/call",
                Some(serde_json::json!({ "name": name, "arguments": arguments })),
            )
            .await?;
        Ok(result_text(&result))
    }
}

/// Parse `--args`, which must be a JSON object.
pub fn parse_arguments(raw: &str) -> anyhow::Result<Value> {
    let value: Value = serde_json::from_str(raw).context("--args is not valid JSON")?;
    if !value.is_object() {
        anyhow::bail!("--args must be a JSON object, got: {value}");
    }
    Ok(value)
}

fn into_result(response: JsonRpcResponse) -> anyhow::Result<Value> {
    if let Some(error) = response.error {
        anyhow::bail!("JSON-RPC error {}: {}", error.code, error.message);
    }
    response.result.context("response carried neither result nor error")
}

/// Join the text items of a `tools/call` result.
fn result_text(result: &Value) -> String {
    result
        .get("content")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.get("text").and_then(Value::as_str))
                .collect::<Vec<_>>()
                .join("\n")
        })
        .unwrap_or_default()
}
