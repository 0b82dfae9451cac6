use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde_json::Value;

use crate::error::WeatherError;
use crate::number::format_number;
use crate::summary::{self, AlertSummary, ForecastSummary};

/// National Weather Service API base URL.
pub const NWS_API_BASE: &str = "https://api.weather.gov";

/// User agent the NWS API requires on every request.
pub const USER_AGENT: &str = "(mcp-server, example@example.com)";

/// Per-request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Where and how the weather client reaches the upstream API.
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    pub api_base: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_base: NWS_API_BASE.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Client for the weather alert and forecast lookups.
///
/// Holds configuration only. Each lookup builds its own HTTP client, which is
/// dropped together with its connections when the lookup returns, whichever
/// way it returns.
#[derive(Debug, Clone, Default)]
pub struct WeatherClient {
    config: WeatherConfig,
}

impl WeatherClient {
    pub fn new(config: WeatherConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WeatherConfig {
        &self.config
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{path}", self.config.api_base.trim_end_matches('/'))
    }

    /// Redirects are not followed; a 3xx surfaces as [`WeatherError::Status`].
    fn http_client(&self) -> Result<Client, WeatherError> {
        Client::builder()
            .user_agent(self.config.user_agent.as_str())
            .timeout(self.config.timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| WeatherError::Request(e.to_string()))
    }

    /// Active alerts for a state or territory code.
    ///
    /// The code is upper-cased for the request; the summary keeps it as given.
    ///
    /// # Errors
    ///
    /// Any [`WeatherError`] except `MissingField`.
    pub async fn alerts(&self, state: &str) -> Result<AlertSummary, WeatherError> {
        let client = self.http_client()?;
        let area = state.to_uppercase();

        let body = fetch_json(
            client
                .get(self.api_url("/alerts/active"))
                .query(&[("area", area.as_str())]),
        )
        .await?;

        AlertSummary::from_response(state, &body)
    }

    /// Forecast for a coordinate pair: resolves the gridpoint forecast URL
    /// through `/points`, then fetches it.
    ///
    /// # Errors
    ///
    /// Returns the first failure; the forecast request is never sent if the
    /// points lookup failed.
    pub async fn forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ForecastSummary, WeatherError> {
        let client = self.http_client()?;

        let points_url = self.api_url(&format!(
            "/points/{},{}",
            format_number(latitude),
            format_number(longitude)
        ));
        let points = fetch_json(client.get(points_url)).await?;
        let forecast_url = summary::forecast_url(&points)?;

        let forecast = fetch_json(client.get(forecast_url)).await?;
        ForecastSummary::from_response(latitude, longitude, &forecast)
    }

    /// Text form of [`Self::alerts`]. Never fails: errors come back as text.
    pub async fn get_alerts(&self, state: &str) -> String {
        tracing::info!("Getting alerts for state: {state}");

        match self.alerts(state).await {
            Ok(summary) => summary.to_string(),
            Err(err) => {
                tracing::warn!(state, error = %err, "alert lookup failed");
                format!("Error fetching alerts: {err}")
            }
        }
    }

    /// Text form of [`Self::forecast`]. Never fails: errors come back as text.
    pub async fn get_forecast(&self, latitude: f64, longitude: f64) -> String {
        tracing::info!("Getting forecast for coordinates: {latitude}, {longitude}");

        match self.forecast(latitude, longitude).await {
            Ok(summary) => summary.to_string(),
            Err(err) => {
                tracing::warn!(latitude, longitude, error = %err, "forecast lookup failed");
                match err {
                    WeatherError::MissingField(_) => format!("Error parsing weather data: {err}"),
                    _ => format!("Error fetching forecast: {err}"),
                }
            }
        }
    }
}

/// Send a GET, check the status, decode the body.
async fn fetch_json(request: RequestBuilder) -> Result<Value, WeatherError> {
    let response = request.send().await?;
    tracing::debug!(url = %response.url(), status = %response.status(), "upstream response");

    let status = response.status();
    if !status.is_success() {
        return Err(WeatherError::Status(status.as_u16()));
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| WeatherError::Request(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_tolerates_trailing_slash() {
        let client = WeatherClient::new(WeatherConfig {
            api_base: "http://localhost:9000/".to_string(),
            ..WeatherConfig::default()
        });
        assert_eq!(client.api_url("/points/1.0,2.0"), "http://localhost:9000/points/1.0,2.0");
    }

    #[test]
    fn default_config_targets_nws() {
        let config = WeatherClient::default().config().clone();
        assert_eq!(config.api_base, "https://api.weather.gov");
        assert_eq!(config.user_agent, "(mcp-server, example@example.com)");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
