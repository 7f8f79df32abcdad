//! Builder for [`OpenAIChatModel`]
//!
//! Every configuration method returns `self` and `build()` is the terminal,
//! fallible step. Missing required settings are reported as
//! [`Error::Configuration`] naming the setting.
//!
//! # Examples
//!
//! ```no_run
//! use thinkwire_providers::OpenAIChatModel;
//! use std::sync::Arc;
//!
//! // Basic usage
//! let model = OpenAIChatModel::builder()
//!     .api_key("api-key")
//!     .model_name("gpt-4o")
//!     .build()
//!     .expect("Failed to build model");
//!
//! // With all options
//! # let custom_client = Arc::new(thinkwire_providers::http::ReqwestClient::new().unwrap());
//! let model = OpenAIChatModel::builder()
//!     .api_key("api-key")
//!     .model_name("o1")
//!     .base_url("https://custom.openai.azure.com/v1")
//!     .organization("org-123")
//!     .enable_thinking(true)
//!     .with_client(custom_client)
//!     .build()
//!     .expect("Failed to build model");
//! ```

use crate::http::{HttpClient, ReqwestClient};
use crate::openai::{
    OpenAIChatModel, OpenAIConfig, OpenAIFormatter, OpenAIResponseParser, ThinkingAdapter,
};
use std::sync::Arc;
use thinkwire_core::{Error, GenerateOptions};
use tracing::debug;

/// Builder for [`OpenAIChatModel`]
#[derive(Default)]
pub struct OpenAIChatModelBuilder {
    api_key: Option<String>,
    config: Option<OpenAIConfig>,
    base_url: Option<String>,
    organization: Option<String>,
    model_name: Option<String>,
    enable_thinking: bool,
    stream: bool,
    default_options: Option<GenerateOptions>,
    client: Option<Arc<dyn HttpClient>>,
}

impl OpenAIChatModelBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Start from a full provider configuration, e.g. [`OpenAIConfig::from_env`]
    pub fn config(mut self, config: OpenAIConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the base URL (for compatible endpoints)
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the organization ID
    pub fn organization(mut self, org: impl Into<String>) -> Self {
        self.organization = Some(org.into());
        self
    }

    /// Set the model name
    pub fn model_name(mut self, model: impl Into<String>) -> Self {
        self.model_name = Some(model.into());
        self
    }

    /// Request extended reasoning on every call
    pub fn enable_thinking(mut self, enabled: bool) -> Self {
        self.enable_thinking = enabled;
        self
    }

    /// Prefer incremental delivery when options leave it unset
    pub fn stream(mut self, stream: bool) -> Self {
        self.stream = stream;
        self
    }

    /// Set the baseline options per-call options are resolved against
    pub fn default_options(mut self, options: GenerateOptions) -> Self {
        self.default_options = Some(options);
        self
    }

    /// Set a custom HTTP client
    pub fn with_client(mut self, client: Arc<dyn HttpClient>) -> Self {
        self.client = Some(client);
        self
    }

    /// Build the model
    pub fn build(self) -> Result<OpenAIChatModel, Error> {
        let mut config = match (self.config, self.api_key) {
            (Some(config), Some(key)) => OpenAIConfig { api_key: key, ..config },
            (Some(config), None) => config,
            (None, Some(key)) => OpenAIConfig::new(key),
            (None, None) => {
                return Err(Error::Configuration(
                    "API key is required to build an OpenAI chat model".to_string(),
                ))
            }
        };
        if let Some(url) = self.base_url {
            config = config.with_base_url(url);
        }
        if let Some(org) = self.organization {
            config = config.with_organization(org);
        }

        let model_name = self.model_name.ok_or_else(|| {
            Error::Configuration("model name is required to build an OpenAI chat model".to_string())
        })?;

        let client = match self.client {
            Some(client) => client,
            None => Arc::new(ReqwestClient::new()?),
        };

        debug!(
            model = %model_name,
            base_url = %config.base_url,
            thinking = self.enable_thinking,
            "Built OpenAI chat model"
        );

        Ok(OpenAIChatModel {
            client,
            config,
            model_name,
            enable_thinking: self.enable_thinking,
            stream: self.stream,
            default_options: self.default_options.unwrap_or_default(),
            formatter: OpenAIFormatter,
            adapter: ThinkingAdapter,
            parser: OpenAIResponseParser,
        })
    }
}
