use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use toolbox_core::conversions;

use super::{object_schema, parse_arguments, result_schema};
use crate::registry::{Tool, ToolDefinition, ToolError, ToolOutput};

#[derive(Debug, Deserialize)]
struct MultiplyArgs {
    a: f64,
    b: f64,
}

/// `multiply(a, b)`.
pub struct Multiply;

#[async_trait]
impl Tool for Multiply {
    fn name(&self) -> &'static str {
        "multiply"
    }

    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            description: "Multiply two numbers".to_string(),
            input_schema: object_schema(
                serde_json::json!({
                    "a": { "type": "number", "description": "First factor" },
                    "b": { "type": "number", "description": "Second factor" }
                }),
                &["a", "b"],
            ),
            output_schema: Some(result_schema("number")),
        }
    }

    async fn call(&self, arguments: Value) -> Result<ToolOutput, ToolError> {
        let args: MultiplyArgs = parse_arguments(self.name(), arguments)?;
        Ok(ToolOutput::Number(conversions::multiply(args.a, args.b)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn multiplies() {
        let out = Multiply
            .call(serde_json::json!({ "a": 6, "b": 7.5 }))
            .await
            .unwrap();
        assert_eq!(out, ToolOutput::Number(45.0));
        assert_eq!(out.text(), "45.0");
    }
}
