//! Common traits for provider implementations

use serde_json::Value;
use thinkwire_core::{ChatResponse, Error};

/// Write access to a provider-shaped request under construction
///
/// Adapters only ever write through this trait; they never read back what
/// is already there.
pub trait RequestBodyBuilder {
    /// Set an additional top-level body field, replacing any previous value
    fn put_additional_body_property(&mut self, key: &str, value: Value);
}

/// Parse responses from provider-specific format
pub trait ResponseParser: Send + Sync {
    /// Parse provider-specific JSON into a chat response
    fn parse_response(&self, value: Value) -> Result<ChatResponse, Error>;
}
