//! Response parsing for OpenAI chat completions

use crate::traits::ResponseParser;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use thinkwire_core::{ChatResponse, ContentBlock, Error, FinishReason, Usage};
use tracing::{debug, trace};

/// Parses OpenAI chat completion responses into ordered content blocks
///
/// Blocks are always emitted as reasoning, then text, then tool calls,
/// whatever the field order in the payload. A field that is present emits a
/// block even when its string is empty; `null` counts as absent. Strings are
/// passed through unmodified.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenAIResponseParser;

impl OpenAIResponseParser {
    /// Parse a payload, stamping it with the current time
    pub fn parse(&self, value: Value) -> Result<ChatResponse, Error> {
        self.parse_at(value, Utc::now())
    }

    /// Parse a raw JSON string
    pub fn parse_str(&self, raw: &str) -> Result<ChatResponse, Error> {
        self.parse(serde_json::from_str(raw)?)
    }

    /// Parse a payload observed at `observed_at`
    pub fn parse_at(
        &self,
        value: Value,
        observed_at: DateTime<Utc>,
    ) -> Result<ChatResponse, Error> {
        if !value.is_object() {
            return Err(Error::malformed(["id", "choices"]));
        }

        let response: OpenAIResponse = serde_json::from_value(value)?;

        let choice = response.choices.and_then(|choices| choices.into_iter().next());

        let (id, message, finish_reason) = match (response.id, choice) {
            (
                Some(id),
                Some(Choice {
                    message,
                    finish_reason: Some(reason),
                }),
            ) => (id, message, reason),
            (id, choice) => {
                let mut missing = Vec::new();
                if id.is_none() {
                    missing.push("id");
                }
                match choice {
                    None => missing.push("choices"),
                    Some(choice) if choice.finish_reason.is_none() => {
                        missing.push("choices[0].finish_reason")
                    }
                    Some(_) => {}
                }
                debug!(fields = ?missing, "Rejecting malformed chat completion");
                return Err(Error::malformed(missing));
            }
        };

        let content = content_blocks(message.unwrap_or_default());

        trace!(
            id = %id,
            blocks = content.len(),
            kinds = ?content.iter().map(ContentBlock::kind).collect::<Vec<_>>(),
            "Parsed chat completion"
        );

        Ok(ChatResponse {
            id,
            content,
            finish_reason: FinishReason::from_wire(&finish_reason),
            model: response.model,
            usage: response.usage.map(Usage::from),
            created_at: observed_at,
        })
    }
}

impl ResponseParser for OpenAIResponseParser {
    fn parse_response(&self, value: Value) -> Result<ChatResponse, Error> {
        self.parse(value)
    }
}

fn content_blocks(message: MessageResponse) -> Vec<ContentBlock> {
    let mut blocks = Vec::new();

    if let Some(thinking) = message.reasoning_content {
        blocks.push(ContentBlock::Thinking { thinking });
    }
    if let Some(text) = message.content {
        blocks.push(ContentBlock::Text { text });
    }
    for call in message.tool_calls.unwrap_or_default() {
        blocks.push(ContentBlock::ToolUse {
            id: call.id,
            name: call.function.name,
            input: call.function.arguments,
        });
    }

    blocks
}

impl From<UsageInfo> for Usage {
    fn from(usage: UsageInfo) -> Self {
        Usage {
            prompt_tokens: usage.prompt_tokens,
            completion_tokens: usage.completion_tokens,
            total_tokens: usage.total_tokens,
            reasoning_tokens: usage
                .completion_tokens_details
                .and_then(|details| details.reasoning_tokens),
        }
    }
}

// Response structures
#[derive(Deserialize)]
struct OpenAIResponse {
    id: Option<String>,
    model: Option<String>,
    choices: Option<Vec<Choice>>,
    usage: Option<UsageInfo>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<MessageResponse>,
    finish_reason: Option<String>,
}

#[derive(Deserialize, Default)]
struct MessageResponse {
    reasoning_content: Option<String>,
    content: Option<String>,
    tool_calls: Option<Vec<ToolCallResponse>>,
}

#[derive(Deserialize)]
struct ToolCallResponse {
    id: String,
    function: FunctionCall,
}

#[derive(Deserialize)]
struct FunctionCall {
    name: String,
    arguments: String,
}

#[derive(Deserialize)]
struct UsageInfo {
    #[serde(default)]
    prompt_tokens: u32,
    #[serde(default)]
    completion_tokens: u32,
    #[serde(default)]
    total_tokens: u32,
    completion_tokens_details: Option<CompletionTokensDetails>,
}

#[derive(Deserialize)]
struct CompletionTokensDetails {
    reasoning_tokens: Option<u32>,
}
