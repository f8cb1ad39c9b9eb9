//! Route lookup error types.

use thiserror::Error;

/// Errors from a route lookup.
///
/// These never abort a submission: [`super::annotate`] folds them into the
/// record's route text.
#[derive(Error, Debug)]
pub enum RouteError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The service answered with an error status
    #[error("API error {status}: {message}")]
    Api { status: String, message: String },

    /// Lookup requested without the required configuration
    #[error("not configured: {0}")]
    NotConfigured(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = RouteError::Api {
            status: "REQUEST_DENIED".into(),
            message: "The provided API key is invalid.".into(),
        };
        assert_eq!(
            err.to_string(),
            "API error REQUEST_DENIED: The provided API key is invalid."
        );

        let err = RouteError::NotConfigured("missing API key".into());
        assert_eq!(err.to_string(), "not configured: missing API key");
    }
}
