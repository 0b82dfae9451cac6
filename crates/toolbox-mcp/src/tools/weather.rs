use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use toolbox_core::WeatherClient;

use super::{object_schema, parse_arguments, result_schema};
use crate::registry::{Tool, ToolDefinition, ToolError, ToolOutput};

#[derive(Debug, Deserialize)]
struct GetAlertsArgs {
    state: String,
}

#[derive(Debug, Deserialize)]
struct GetForecastArgs {
    latitude: f64,
    longitude: f64,
}

/// Active NWS alerts for a state. Upstream failures come back as text.
pub struct GetAlerts {
    client: WeatherClient,
}

impl GetAlerts {
    pub fn new(client: WeatherClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for GetAlerts {
    fn name(&self) -> &'static str {
        "get_alerts"
    }

    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            description: "Get weather alerts for a US state".to_string(),
            input_schema: object_schema(
                serde_json::json!({
                    "state": {
                        "type": "string",
                        "description": "Two-letter US state or territory code (e.g. CA, NY)"
                    }
                }),
                &["state"],
            ),
            output_schema: Some(result_schema("string")),
        }
    }

    async fn call(&self, arguments: Value) -> Result<ToolOutput, ToolError> {
        let args: GetAlertsArgs = parse_arguments(self.name(), arguments)?;
        Ok(ToolOutput::Text(self.client.get_alerts(&args.state).await))
    }
}

/// NWS forecast for a coordinate pair. Upstream failures come back as text.
pub struct GetForecast {
    client: WeatherClient,
}

impl GetForecast {
    pub fn new(client: WeatherClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for GetForecast {
    fn name(&self) -> &'static str {
        "get_forecast"
    }

    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            description: "Get weather forecast for coordinates".to_string(),
            input_schema: object_schema(
                serde_json::json!({
                    "latitude": { "type": "number", "description": "Latitude of the location" },
                    "longitude": { "type": "number", "description": "Longitude of the location" }
                }),
                &["latitude", "longitude"],
            ),
            output_schema: Some(result_schema("string")),
        }
    }

    async fn call(&self, arguments: Value) -> Result<ToolOutput, ToolError> {
        let args: GetForecastArgs = parse_arguments(self.name(), arguments)?;
        Ok(ToolOutput::Text(
            self.client.get_forecast(args.latitude, args.longitude).await,
        ))
    }
}
