//! Request body for OpenAI chat completions

use crate::traits::RequestBodyBuilder;
use serde::Serialize;
use serde_json::{Map, Value};

/// A chat completion request body under construction
///
/// Typed fields cover the standard parameters; anything else a provider
/// accepts goes into the additional body properties, which are flattened
/// into the top level when serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChatCompletionBody {
    /// Model identifier
    pub model: String,
    /// Wire-formatted messages
    pub messages: Vec<Value>,
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Top-p nucleus sampling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Frequency penalty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_penalty: Option<f32>,
    /// Presence penalty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presence_penalty: Option<f32>,
    /// Random seed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Whether the response is delivered incrementally
    pub stream: bool,
    #[serde(flatten)]
    additional: Map<String, Value>,
}

impl ChatCompletionBody {
    /// Create an empty body for a model
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }

    /// An additional body property, if one was written
    pub fn additional_body_property(&self, key: &str) -> Option<&Value> {
        self.additional.get(key)
    }

    /// All additional body properties
    pub fn additional_body_properties(&self) -> &Map<String, Value> {
        &self.additional
    }

    /// Serialize the body into the JSON sent over the wire
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

impl RequestBodyBuilder for ChatCompletionBody {
    fn put_additional_body_property(&mut self, key: &str, value: Value) {
        self.additional.insert(key.to_string(), value);
    }
}
