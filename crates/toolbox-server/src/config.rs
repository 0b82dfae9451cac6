use std::time::Duration;

use clap::Parser;

use toolbox_core::weather::{NWS_API_BASE, USER_AGENT};
use toolbox_core::WeatherConfig;

/// Server configuration. Every flag can also be set from the environment.
#[derive(Debug, Clone, Parser)]
#[command(name = "toolbox-server", about = "MCP server exposing arithmetic, temperature and weather tools")]
pub struct Config {
    /// Interface to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Deployment environment; `development` enables reload and debug logging
    #[arg(long, env = "ENVIRONMENT", default_value = "production")]
    pub environment: String,

    /// Base URL of the weather API
    #[arg(long, env = "WEATHER_API_BASE", default_value = NWS_API_BASE)]
    pub weather_api_base: String,

    /// User-Agent sent to the weather API
    #[arg(long, env = "WEATHER_USER_AGENT", default_value = USER_AGENT)]
    pub weather_user_agent: String,

    /// Per-request timeout for weather API calls, in seconds
    #[arg(long, env = "WEATHER_TIMEOUT_SECS", default_value_t = 5)]
    pub weather_timeout_secs: u64,
}

impl Config {
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Restart-on-change is requested. The restart itself is left to an
    /// external watcher.
    pub fn reload(&self) -> bool {
        self.is_development()
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Log filter used when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> &'static str {
        if self.is_development() {
            "debug"
        } else {
            "info"
        }
    }

    pub fn weather(&self) -> WeatherConfig {
        WeatherConfig {
            api_base: self.weather_api_base.clone(),
            user_agent: self.weather_user_agent.clone(),
            timeout: Duration::from_secs(self.weather_timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn default_of(name: &str) -> String {
        let command = Config::command();
        let arg = command
            .get_arguments()
            .find(|a| a.get_id() == name)
            .unwrap();
        arg.get_default_values()[0].to_string_lossy().into_owned()
    }

    #[test]
    fn command_is_well_formed() {
        Config::command().debug_assert();
    }

    #[test]
    fn defaults() {
        assert_eq!(default_of("port"), "8000");
        assert_eq!(default_of("host"), "0.0.0.0");
        assert_eq!(default_of("environment"), "production");
        assert_eq!(default_of("weather_api_base"), "https://api.weather.gov");
        assert_eq!(default_of("weather_timeout_secs"), "5");
    }

    #[test]
    fn development_mode() {
        let config = Config::try_parse_from([
            "toolbox-server",
            "--port",
            "9001",
            "--environment",
            "development",
        ])
        .unwrap();

        assert_eq!(config.port, 9001);
        assert!(config.reload());
        assert_eq!(config.default_log_filter(), "debug");
        assert!(config.bind_addr().ends_with(":9001"));
    }

    #[test]
    fn production_mode() {
        let config = Config::try_parse_from([
            "toolbox-server",
            "--environment",
            "production",
            "--weather-timeout-secs",
            "12",
            "--weather-api-base",
            "http://localhost:9999",
        ])
        .unwrap();

        assert!(!config.reload());
        assert_eq!(config.default_log_filter(), "info");

        let weather = config.weather();
        assert_eq!(weather.timeout, Duration::from_secs(12));
        assert_eq!(weather.api_base, "http://localhost:9999");
    }
}
