//! Provider-specific error helpers

use thinkwire_core::Error;

/// Convert network errors to core errors
pub fn network_error(error: reqwest::Error) -> Error {
    Error::Network {
        message: error.to_string(),
        source: Box::new(error),
    }
}

/// Convert a non-success HTTP status to a provider error
pub fn status_error(
    provider: impl Into<String>,
    status: reqwest::StatusCode,
    body: &str,
) -> Error {
    Error::Provider {
        provider: provider.into(),
        status: Some(status.as_u16()),
        message: format!("HTTP {}: {}", status, body),
    }
}
