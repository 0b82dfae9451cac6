use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use toolbox_core::conversions;

use super::{object_schema, parse_arguments, result_schema};
use crate::registry::{Tool, ToolDefinition, ToolError, ToolOutput};

#[derive(Debug, Deserialize)]
struct CelsiusArgs {
    celsius: f64,
}

#[derive(Debug, Deserialize)]
struct FahrenheitArgs {
    fahrenheit: f64,
}

fn conversion_definition(name: &str, description: &str, param: &str, unit: &str) -> ToolDefinition {
    ToolDefinition {
        name: name.to_string(),
        description: description.to_string(),
        input_schema: object_schema(
            serde_json::json!({
                param: { "type": "number", "description": format!("Temperature in degrees {unit}") }
            }),
            &[param],
        ),
        output_schema: Some(result_schema("number")),
    }
}

pub struct CelsiusToFahrenheit;

#[async_trait]
impl Tool for CelsiusToFahrenheit {
    fn name(&self) -> &'static str {
        "celsius_to_fahrenheit"
    }

    fn definition(&self) -> ToolDefinition {
        conversion_definition(self.name(), "Convert Celsius to Fahrenheit", "celsius", "Celsius")
    }

    async fn call(&self, arguments: Value) -> Result<ToolOutput, ToolError> {
        let args: CelsiusArgs = parse_arguments(self.name(), arguments)?;
        Ok(ToolOutput::Number(conversions::celsius_to_fahrenheit(args.celsius)))
    }
}

pub struct FahrenheitToCelsius;

#[async_trait]
impl Tool for FahrenheitToCelsius {
    fn name(&self) -> &'static str {
        "fahrenheit_to_celsius"
    }

    fn definition(&self) -> ToolDefinition {
        conversion_definition(self.name(), "Convert Fahrenheit to Celsius", "fahrenheit", "Fahrenheit")
    }

    async fn call(&self, arguments: Value) -> Result<ToolOutput, ToolError> {
        let args: FahrenheitArgs = parse_arguments(self.name(), arguments)?;
        Ok(ToolOutput::Number(conversions::fahrenheit_to_celsius(args.fahrenheit)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn boiling_point() {
        let out = CelsiusToFahrenheit
            .call(serde_json::json!({ "celsius": 100 }))
            .await
            .unwrap();
        assert_eq!(out.text(), "212.0");

        let out = FahrenheitToCelsius
            .call(serde_json::json!({ "fahrenheit": 212 }))
            .await
            .unwrap();
        assert_eq!(out.text(), "100.0");
    }

    #[test]
    fn schema_names_the_parameter() {
        let def = FahrenheitToCelsius.definition();
        assert_eq!(def.input_schema["required"][0], "fahrenheit");
        assert_eq!(
            def.input_schema["properties"]["fahrenheit"]["description"],
            "Temperature in degrees Fahrenheit"
        );
    }
}
