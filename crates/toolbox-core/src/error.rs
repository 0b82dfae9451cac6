/// Failure of an upstream weather lookup.
///
/// None of these escape the tool layer: `WeatherClient::get_alerts` and
/// `WeatherClient::get_forecast` render them into the text returned to the
/// caller.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    /// Upstream answered with a non-success status.
    #[error("HTTP {0}")]
    Status(u16),

    /// A field the forecast rendering cannot do without was absent.
    #[error("Missing field '{0}'")]
    MissingField(String),

    /// Transport failure: connect, timeout, body read, JSON decode.
    #[error("{0}")]
    Request(String),

    /// The body decoded but has an unexpected shape.
    #[error("{0}")]
    Malformed(String),
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        Self::Request(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_rendered_text() {
        assert_eq!(WeatherError::Status(404).to_string(), "HTTP 404");
        assert_eq!(
            WeatherError::MissingField("forecast".to_string()).to_string(),
            "Missing field 'forecast'"
        );
        assert_eq!(
            WeatherError::Request("connection refused".to_string()).to_string(),
            "connection refused"
        );
    }

    #[tokio::test]
    async fn transport_failure_is_a_request_error() {
        let err = reqwest::get("http://127.0.0.1:1/").await.unwrap_err();
        assert!(matches!(WeatherError::from(err), WeatherError::Request(_)));
    }
}
