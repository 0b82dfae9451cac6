use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use toolbox_core::number::format_number;

/// Definition of a tool as advertised by `tools/list`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
    #[serde(rename = "outputSchema", skip_serializing_if = "Option::is_none")]
    pub output_schema: Option<Value>,
}

/// Value produced by a tool call.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutput {
    Number(f64),
    Text(String),
}

impl ToolOutput {
    /// The text content shown to the caller.
    pub fn text(&self) -> String {
        match self {
            Self::Number(value) => format_number(*value),
            Self::Text(text) => text.clone(),
        }
    }

    /// Render as the result object of a `tools/call` response.
    pub fn to_call_result(&self) -> Value {
        let structured = match self {
            Self::Number(value) => serde_json::json!(value),
            Self::Text(text) => serde_json::json!(text),
        };
        serde_json::json!({
            "content": [{
                "type": "text",
                "text": self.text()
            }],
            "structuredContent": { "result": structured },
            "isError": false
        })
    }
}

/// Errors raised before a tool runs. Tools themselves report upstream
/// failures in their output text instead.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments for {tool}: {reason}")]
    InvalidArguments { tool: String, reason: String },
}

/// A named operation callable through `tools/call`.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Name the tool is registered and invoked under.
    fn name(&self) -> &'static str;

    fn definition(&self) -> ToolDefinition;

    /// Run the tool with the caller's `arguments` object.
    async fn call(&self, arguments: Value) -> Result<ToolOutput, ToolError>;
}

/// Name-to-handler map, populated at startup and read-only afterwards.
///
/// Listing order is registration order.
#[derive(Default, Clone)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
    by_name: HashMap<&'static str, usize>,
}

impl ToolRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool. A tool registered under an existing name replaces
    /// the earlier one in place.
    pub fn register(&mut self, tool: impl Tool + 'static) -> &mut Self {
        let name = tool.name();
        let tool: Arc<dyn Tool> = Arc::new(tool);

        if let Some(&slot) = self.by_name.get(name) {
            tracing::warn!("Replacing registered tool: {name}");
            self.tools[slot] = tool;
        } else {
            self.by_name.insert(name, self.tools.len());
            self.tools.push(tool);
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.by_name.get(name).map(|&slot| &self.tools[slot])
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.tools.iter().map(|tool| tool.name()).collect()
    }

    /// Return the list of tool definitions for the MCP `tools/list` method.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.iter().map(|tool| tool.definition()).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Look up `name` and run it.
    ///
    /// # Errors
    ///
    /// [`ToolError::UnknownTool`] if nothing is registered under `name`, or
    /// whatever the tool itself rejects.
    pub async fn call(&self, name: &str, arguments: Value) -> Result<ToolOutput, ToolError> {
        let tool = self
            .get(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        tool.call(arguments).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Constant {
        name: &'static str,
        value: f64,
    }

    #[async_trait]
    impl Tool for Constant {
        fn name(&self) -> &'static str {
            self.name
        }

        fn definition(&self) -> ToolDefinition {
            ToolDefinition {
                name: self.name.to_string(),
                description: "Return a constant".to_string(),
                input_schema: serde_json::json!({ "type": "object", "properties": {} }),
                output_schema: None,
            }
        }

        async fn call(&self, _arguments: Value) -> Result<ToolOutput, ToolError> {
            Ok(ToolOutput::Number(self.value))
        }
    }

    #[tokio::test]
    async fn register_and_call() {
        let mut registry = ToolRegistry::new();
        registry
            .register(Constant { name: "one", value: 1.0 })
            .register(Constant { name: "two", value: 2.0 });

        assert_eq!(registry.names(), ["one", "two"]);
        let out = registry.call("two", Value::Null).await.unwrap();
        assert_eq!(out, ToolOutput::Number(2.0));
    }

    #[tokio::test]
    async fn unknown_tool() {
        let registry = ToolRegistry::new();
        assert!(registry.is_empty());

        let err = registry.call("nope", Value::Null).await.unwrap_err();
        assert!(matches!(err, ToolError::UnknownTool(ref n) if n == "nope"));
        assert_eq!(err.to_string(), "Unknown tool: nope");
    }

    #[tokio::test]
    async fn re_registering_replaces_in_place() {
        let mut registry = ToolRegistry::new();
        registry
            .register(Constant { name: "a", value: 1.0 })
            .register(Constant { name: "b", value: 2.0 })
            .register(Constant { name: "a", value: 3.0 });

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names(), ["a", "b"]);
        assert_eq!(registry.call("a", Value::Null).await.unwrap(), ToolOutput::Number(3.0));
    }

    #[test]
    fn call_result_shapes() {
        let number = ToolOutput::Number(6.0).to_call_result();
        assert_eq!(number["content"][0]["type"], "text");
        assert_eq!(number["content"][0]["text"], "6.0");
        assert_eq!(number["structuredContent"]["result"], 6.0);
        assert_eq!(number["isError"], false);

        let text = ToolOutput::Text("No active alerts for CA".into()).to_call_result();
        assert_eq!(text["content"][0]["text"], "No active alerts for CA");
        assert_eq!(text["structuredContent"]["result"], "No active alerts for CA");
    }

    #[test]
    fn non_finite_numbers_render() {
        let result = ToolOutput::Number(f64::NAN).to_call_result();
        assert_eq!(result["content"][0]["text"], "nan");
        assert!(result["structuredContent"]["result"].is_null());
    }

    #[test]
    fn definitions_serialize_with_camel_case_schemas() {
        let definition = Constant { name: "one", value: 1.0 }.definition();
        let json = serde_json::to_string(&definition).unwrap();
        assert!(json.contains("inputSchema"));
        assert!(!json.contains("outputSchema"));
    }
}
