//! The tools this server exposes, and the registry they are assembled into.

mod arithmetic;
mod temperature;
mod weather;

use serde::de::DeserializeOwned;
use serde_json::Value;

use toolbox_core::WeatherClient;

use crate::registry::{ToolError, ToolRegistry};

pub use arithmetic::Multiply;
pub use temperature::{CelsiusToFahrenheit, FahrenheitToCelsius};
pub use weather::{GetAlerts, GetForecast};

/// Registry holding every tool, in the order `tools/list` reports them.
pub fn default_registry(weather: WeatherClient) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry
        .register(Multiply)
        .register(CelsiusToFahrenheit)
        .register(FahrenheitToCelsius)
        .register(GetAlerts::new(weather.clone()))
        .register(GetForecast::new(weather));
    registry
}

/// Decode a tool's `arguments` object into its typed parameters.
fn parse_arguments<T: DeserializeOwned>(tool: &str, arguments: Value) -> Result<T, ToolError> {
    serde_json::from_value(arguments).map_err(|e| ToolError::InvalidArguments {
        tool: tool.to_string(),
        reason: e.to_string(),
    })
}

fn object_schema(properties: Value, required: &[&str]) -> Value {
    serde_json::json!({
        "type": "object",
        "properties": properties,
        "required": required
    })
}

/// Output schema wrapping a single `result` of the given JSON type.
fn result_schema(kind: &str) -> Value {
    object_schema(serde_json::json!({ "result": { "type": kind } }), &["result"])
}
