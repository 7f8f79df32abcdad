//! Error types for the Thinkwire library

use std::error::Error as StdError;
use thiserror::Error;

/// The main error type for all Thinkwire operations
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A required collaborator or setting was missing when it was needed
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The provider payload lacks structurally required fields
    #[error("Malformed response: missing required field(s) {}", .fields.join(", "))]
    MalformedResponse {
        /// Names of the missing fields, in the order they were checked
        fields: Vec<String>,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error message
        message: String,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },

    /// Transport-level failures reported by the HTTP collaborator
    #[error("Network error: {message}")]
    Network {
        /// Error message
        message: String,
        /// Underlying error
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// The provider answered with a non-success status
    #[error("Provider error ({provider}): {message}")]
    Provider {
        /// Provider name (e.g., "openai")
        provider: String,
        /// HTTP status code, when one was received
        status: Option<u16>,
        /// Error message
        message: String,
    },
}

impl Error {
    /// Build a [`Error::MalformedResponse`] from field names
    pub fn malformed<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Error::MalformedResponse {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether this error was caused by a malformed provider payload
    pub fn is_malformed_response(&self) -> bool {
        matches!(self, Error::MalformedResponse { .. })
    }
}

/// Result type alias for Thinkwire operations
pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization {
            message: err.to_string(),
            source: err,
        }
    }
}
