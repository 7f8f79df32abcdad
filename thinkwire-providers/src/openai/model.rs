//! OpenAI chat model
//!
//! This module composes the request formatter, the thinking adapter, the
//! HTTP transport and the response parser into one [`ChatModel`].

use crate::builder::OpenAIChatModelBuilder;
use crate::http::{create_headers, HttpClient};
use crate::openai::{
    body::ChatCompletionBody, config::OpenAIConfig, formatter::OpenAIFormatter,
    parser::OpenAIResponseParser, thinking::ThinkingAdapter,
};
use crate::traits::ResponseParser;
use async_trait::async_trait;
use std::sync::Arc;
use thinkwire_core::{ChatModel, ChatResponse, Error, GenerateOptions, Message};
use tracing::{debug, warn};

/// OpenAI-compatible chat model with optional extended reasoning
///
/// When thinking is enabled every request carries the `thinking` field and
/// is sent with incremental delivery disabled, whatever the stream settings
/// say.
///
/// # Example
///
/// ```no_run
/// use thinkwire_core::GenerateOptions;
/// use thinkwire_providers::OpenAIChatModel;
///
/// let model = OpenAIChatModel::builder()
///     .api_key("your-api-key")
///     .model_name("o1")
///     .enable_thinking(true)
///     .default_options(GenerateOptions::builder().thinking_budget(5000).build())
///     .build()
///     .expect("Failed to build model");
/// ```
#[derive(Clone)]
pub struct OpenAIChatModel {
    pub(crate) client: Arc<dyn HttpClient>,
    pub(crate) config: OpenAIConfig,
    pub(crate) model_name: String,
    pub(crate) enable_thinking: bool,
    pub(crate) stream: bool,
    pub(crate) default_options: GenerateOptions,
    pub(crate) formatter: OpenAIFormatter,
    pub(crate) adapter: ThinkingAdapter,
    pub(crate) parser: OpenAIResponseParser,
}

impl OpenAIChatModel {
    /// Create a builder
    pub fn builder() -> OpenAIChatModelBuilder {
        OpenAIChatModelBuilder::new()
    }

    /// Whether requests ask for extended reasoning
    pub fn thinking_enabled(&self) -> bool {
        self.enable_thinking
    }

    /// The model's baseline options
    pub fn default_options(&self) -> &GenerateOptions {
        &self.default_options
    }

    /// Build the request body for a call without sending it
    ///
    /// The stream flag comes from the effective options, falling back to the
    /// model's stream setting. With thinking enabled it is cleared before the
    /// `thinking` field is written.
    pub fn prepare_request(
        &self,
        messages: &[Message],
        options: Option<&GenerateOptions>,
    ) -> ChatCompletionBody {
        let effective = GenerateOptions::merge(options, &self.default_options);
        let mut body = self
            .formatter
            .build_body(&self.model_name, messages, &effective);
        body.stream = effective.stream().unwrap_or(self.stream);

        if self.enable_thinking {
            if body.stream {
                warn!(
                    model = %self.model_name,
                    "Disabling streaming: thinking requires a complete response"
                );
                body.stream = false;
            }
            self.adapter
                .apply_thinking(&mut body, options, &self.default_options);
        }

        body
    }
}

#[async_trait]
impl ChatModel for OpenAIChatModel {
    async fn call(
        &self,
        messages: &[Message],
        options: Option<&GenerateOptions>,
    ) -> Result<ChatResponse, Error> {
        let mut body = self.prepare_request(messages, options);
        if body.stream {
            debug!(
                model = %self.model_name,
                "Requesting a complete response for call()"
            );
            body.stream = false;
        }

        debug!(
            model = %self.model_name,
            messages = messages.len(),
            thinking = self.enable_thinking,
            "Sending chat completion"
        );

        let organization = self.config.organization_id.as_deref();
        let headers = create_headers(&self.config.api_key, organization)?;
        let response = self
            .client
            .post(&self.config.chat_url(), headers, body.to_value()?)
            .await?;

        let parsed = self.parser.parse_response(response)?;
        debug!(
            id = %parsed.id,
            blocks = parsed.content.len(),
            has_thinking = parsed.has_thinking(),
            finish_reason = %parsed.finish_reason,
            "Received chat completion"
        );
        Ok(parsed)
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
