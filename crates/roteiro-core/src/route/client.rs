//! Google Directions HTTP client.

use std::time::Duration;

use log::debug;
use serde::Deserialize;

use super::{RouteAnnotator, RouteError, RouteSummary};

/// Default base URL for the Directions API.
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/directions";

/// Configuration for the Directions client.
#[derive(Debug, Clone)]
pub struct DirectionsConfig {
    /// API key for authentication
    pub api_key: String,
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Language of the distance and duration text
    pub language: String,
    /// Travel mode (driving, walking, bicycling, transit)
    pub mode: String,
}

impl DirectionsConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
            language: "pt-PT".to_string(),
            mode: "driving".to_string(),
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the travel mode.
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }
}

/// Directions API client.
#[derive(Debug, Clone)]
pub struct GoogleDirections {
    http: reqwest::Client,
    config: DirectionsConfig,
}

impl GoogleDirections {
    /// Create a new client with the given configuration.
    pub fn new(config: DirectionsConfig) -> Result<Self, RouteError> {
        if config.api_key.trim().is_empty() {
            return Err(RouteError::NotConfigured("missing Directions API key".into()));
        }
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { http, config })
    }
}

impl RouteAnnotator for GoogleDirections {
    async fn route(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Option<RouteSummary>, RouteError> {
        let url = format!("{}/json", self.config.base_url.trim_end_matches('/'));
        debug!("Requesting directions from {origin:?} to {destination:?}");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("origin", origin),
                ("destination", destination),
                ("mode", self.config.mode.as_str()),
                ("language", self.config.language.as_str()),
                ("key", self.config.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(redact)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RouteError::Api {
                status: status.as_u16().to_string(),
                message: status
                    .canonical_reason()
                    .unwrap_or("unexpected status")
                    .to_string(),
            });
        }
        let body = response.text().await.map_err(redact)?;
        parse_directions(&body)
    }
}

/// Drops the request URL, which carries the API key, from a transport error.
fn redact(err: reqwest::Error) -> RouteError {
    RouteError::Http(err.without_url())
}

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    routes: Vec<Route>,
}

#[derive(Debug, Deserialize)]
struct Route {
    #[serde(default)]
    legs: Vec<Leg>,
}

#[derive(Debug, Deserialize)]
struct Leg {
    distance: TextValue,
    duration: TextValue,
}

#[derive(Debug, Deserialize)]
struct TextValue {
    text: String,
}

/// Extracts the first leg of the first route from a Directions response.
fn parse_directions(body: &str) -> Result<Option<RouteSummary>, RouteError> {
    let response: DirectionsResponse = serde_json::from_str(body)?;
    if matches!(response.status.as_str(), "ZERO_RESULTS" | "NOT_FOUND") {
        return Ok(None);
    }
    if response.status != "OK" {
        return Err(RouteError::Api {
            status: response.status,
            message: response
                .error_message
                .unwrap_or_else(|| "no error message".to_string()),
        });
    }
    Ok(response
        .routes
        .into_iter()
        .next()
        .and_then(|route| route.legs.into_iter().next())
        .map(|leg| RouteSummary {
            distance: leg.distance.text,
            duration: leg.duration.text,
        }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_first_leg() {
        let body = r#"{
            "status": "OK",
            "routes": [{
                "legs": [{
                    "distance": {"text": "314 km", "value": 313842},
                    "duration": {"text": "3 h 10 min", "value": 11400}
                }]
            }]
        }"#;
        assert_eq!(
            parse_directions(body).expect("valid body"),
            Some(RouteSummary {
                distance: "314 km".into(),
                duration: "3 h 10 min".into(),
            })
        );
    }

    #[test]
    fn test_parse_zero_results() {
        let body = r#"{"status": "ZERO_RESULTS", "routes": []}"#;
        assert_eq!(parse_directions(body).expect("valid body"), None);
    }

    #[test]
    fn test_parse_ok_without_routes() {
        let body = r#"{"status": "OK"}"#;
        assert_eq!(parse_directions(body).expect("valid body"), None);
    }

    #[test]
    fn test_parse_api_error() {
        let body = r#"{"status": "REQUEST_DENIED", "error_message": "The provided API key is invalid.", "routes": []}"#;
        let err = parse_directions(body).unwrap_err();
        assert!(matches!(err, RouteError::Api { ref status, .. } if status == "REQUEST_DENIED"));
    }

    #[test]
    fn test_parse_garbage() {
        assert!(matches!(parse_directions("<html>"), Err(RouteError::Json(_))));
    }

    #[test]
    fn test_new_requires_api_key() {
        let err = GoogleDirections::new(DirectionsConfig::new("  ")).unwrap_err();
        assert!(matches!(err, RouteError::NotConfigured(_)));
    }

    #[test]
    fn test_config_builders() {
        let config = DirectionsConfig::new("key")
            .with_base_url("http://localhost:9999")
            .with_timeout(2)
            .with_mode("walking");
        assert_eq!(config.base_url, "http://localhost:9999");
        assert_eq!(config.timeout_secs, 2);
        assert_eq!(config.mode, "walking");
        assert_eq!(config.language, "pt-PT");
    }
}
