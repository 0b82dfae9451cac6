//! Request-scoped summaries built from National Weather Service responses.
//!
//! Upstream JSON is loosely structured. Every field read here is either
//! optional with an explicit default or required with a
//! [`WeatherError::MissingField`] when absent.

use std::fmt;

use serde_json::Value;

use crate::error::WeatherError;
use crate::number::format_number;

/// Alerts rendered per lookup.
pub const MAX_ALERTS: usize = 5;
/// Area names rendered per alert.
pub const MAX_ALERT_AREAS: usize = 3;
/// Forecast periods rendered per lookup.
pub const MAX_FORECAST_PERIODS: usize = 4;

const DEFAULT_HEADLINE: &str = "Unknown alert";
const DEFAULT_SEVERITY: &str = "Unknown";
const AREA_SEPARATOR: &str = "; ";

static NULL: Value = Value::Null;

/// One active alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertEntry {
    pub headline: String,
    pub severity: String,
    pub areas: Vec<String>,
}

/// Active alerts for a state, capped at [`MAX_ALERTS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertSummary {
    /// State code as the caller supplied it.
    pub state: String,
    pub alerts: Vec<AlertEntry>,
}

impl AlertSummary {
    /// Build a summary from an `/alerts/active` response body.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError::Malformed`] if the body is not an object, if
    /// `features` is present but not an array, or if a feature is not an
    /// object.
    pub fn from_response(state: &str, body: &Value) -> Result<Self, WeatherError> {
        let body = body
            .as_object()
            .ok_or_else(|| WeatherError::Malformed("alerts response is not a JSON object".into()))?;

        let features: &[Value] = match body.get("features") {
            None | Some(Value::Null) => &[],
            Some(Value::Array(features)) => features.as_slice(),
            Some(_) => {
                return Err(WeatherError::Malformed(
                    "alerts response field 'features' is not an array".into(),
                ))
            }
        };

        let alerts = features
            .iter()
            .take(MAX_ALERTS)
            .map(AlertEntry::from_feature)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            state: state.to_string(),
            alerts,
        })
    }
}

impl AlertEntry {
    fn from_feature(feature: &Value) -> Result<Self, WeatherError> {
        let feature = feature
            .as_object()
            .ok_or_else(|| WeatherError::Malformed("alert feature is not a JSON object".into()))?;
        let props = feature.get("properties").unwrap_or(&NULL);

        let area_desc = optional_text(props, "areaDesc", "");
        let areas = if area_desc.is_empty() {
            Vec::new()
        } else {
            area_desc
                .split(AREA_SEPARATOR)
                .take(MAX_ALERT_AREAS)
                .map(str::to_string)
                .collect()
        };

        Ok(Self {
            headline: optional_text(props, "headline", DEFAULT_HEADLINE).to_string(),
            severity: optional_text(props, "severity", DEFAULT_SEVERITY).to_string(),
            areas,
        })
    }
}

impl fmt::Display for AlertEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- {}\n  Severity: {}\n  Areas: {}",
            self.headline,
            self.severity,
            self.areas.join(", ")
        )
    }
}

impl fmt::Display for AlertSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alerts.is_empty() {
            return write!(f, "No active alerts for {}", self.state);
        }

        write!(f, "Active alerts for {}:", self.state)?;
        for alert in &self.alerts {
            write!(f, "\n{alert}")?;
        }
        Ok(())
    }
}

/// One forecast period, every field already in display form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastPeriod {
    pub name: String,
    pub detailed_forecast: String,
    pub temperature: String,
    pub temperature_unit: String,
}

/// Forecast for a coordinate pair, capped at [`MAX_FORECAST_PERIODS`].
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSummary {
    pub latitude: f64,
    pub longitude: f64,
    pub periods: Vec<ForecastPeriod>,
}

/// Extract `properties.forecast` from a `/points` response.
///
/// # Errors
///
/// [`WeatherError::MissingField`] when either field is absent,
/// [`WeatherError::Malformed`] when the URL is not a string.
pub fn forecast_url(points: &Value) -> Result<String, WeatherError> {
    let properties = required(points, "properties")?;
    required(properties, "forecast")?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| WeatherError::Malformed("field 'forecast' is not a string".into()))
}

impl ForecastSummary {
    /// Build a summary from a gridpoint forecast response body.
    ///
    /// # Errors
    ///
    /// [`WeatherError::MissingField`] when `properties`, `periods` or a field
    /// of a rendered period is absent; [`WeatherError::Malformed`] when
    /// `periods` is not an array.
    pub fn from_response(latitude: f64, longitude: f64, body: &Value) -> Result<Self, WeatherError> {
        let properties = required(body, "properties")?;
        let periods = required(properties, "periods")?
            .as_array()
            .ok_or_else(|| WeatherError::Malformed("field 'periods' is not an array".into()))?;

        let periods = periods
            .iter()
            .take(MAX_FORECAST_PERIODS)
            .map(ForecastPeriod::from_period)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            latitude,
            longitude,
            periods,
        })
    }
}

impl ForecastPeriod {
    fn from_period(period: &Value) -> Result<Self, WeatherError> {
        Ok(Self {
            name: scalar_text(required(period, "name")?),
            detailed_forecast: scalar_text(required(period, "detailedForecast")?),
            temperature: scalar_text(required(period, "temperature")?),
            temperature_unit: scalar_text(required(period, "temperatureUnit")?),
        })
    }
}

impl fmt::Display for ForecastPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\n{}:\n  {}\n  Temperature: {}\u{00b0}{}\n",
            self.name, self.detailed_forecast, self.temperature, self.temperature_unit
        )
    }
}

impl fmt::Display for ForecastSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.periods.is_empty() {
            return f.write_str("No forecast data available");
        }

        writeln!(
            f,
            "Forecast for coordinates ({}, {}):",
            format_number(self.latitude),
            format_number(self.longitude)
        )?;
        for period in &self.periods {
            write!(f, "{period}")?;
        }
        Ok(())
    }
}

/// String field with a default for absent, null or non-string values.
fn optional_text<'a>(object: &'a Value, key: &str, default: &'a str) -> &'a str {
    object.get(key).and_then(Value::as_str).unwrap_or(default)
}

fn required<'a>(object: &'a Value, key: &str) -> Result<&'a Value, WeatherError> {
    match object {
        Value::Object(map) => map
            .get(key)
            .ok_or_else(|| WeatherError::MissingField(key.to_string())),
        _ => Err(WeatherError::Malformed(format!(
            "expected a JSON object holding '{key}'"
        ))),
    }
}

/// Strings verbatim, everything else as JSON text (`72`, `72.5`, `null`).
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
