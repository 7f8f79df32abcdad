//! Request formatting for OpenAI chat completions

use crate::openai::body::ChatCompletionBody;
use serde_json::{json, Value};
use thinkwire_core::{ContentBlock, GenerateOptions, Message, Role};
use tracing::trace;

/// Converts messages and options into an OpenAI request body
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenAIFormatter;

impl OpenAIFormatter {
    /// Build a request body from messages and already-resolved options
    ///
    /// The stream flag is taken from `options` and defaults to `false`.
    pub fn build_body(
        &self,
        model: &str,
        messages: &[Message],
        options: &GenerateOptions,
    ) -> ChatCompletionBody {
        let mut body = ChatCompletionBody::new(model);
        body.messages = self.format_messages(messages);
        body.temperature = options.temperature();
        body.top_p = options.top_p();
        body.max_tokens = options.max_tokens();
        body.frequency_penalty = options.frequency_penalty();
        body.presence_penalty = options.presence_penalty();
        body.seed = options.seed();
        body.stream = options.stream().unwrap_or(false);
        body
    }

    /// Convert messages to the wire format
    pub fn format_messages(&self, messages: &[Message]) -> Vec<Value> {
        messages.iter().map(|msg| self.format_message(msg)).collect()
    }

    fn format_message(&self, message: &Message) -> Value {
        let role = match message.role {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::Tool => "tool",
            _ => "user",
        };

        let mut texts = Vec::new();
        let mut tool_calls = Vec::new();
        for block in &message.content {
            match block {
                ContentBlock::Text { text } => texts.push(text.as_str()),
                // OpenAI-compatible endpoints reject reasoning in history
                ContentBlock::Thinking { thinking } => {
                    trace!(
                        length = thinking.len(),
                        "Dropping thinking block from history"
                    );
                }
                ContentBlock::ToolUse { id, name, input } => {
                    tool_calls.push(json!({
                        "id": id,
                        "type": "function",
                        "function": {
                            "name": name,
                            "arguments": input,
                        },
                    }));
                }
            }
        }

        let mut msg = json!({ "role": role });

        if texts.is_empty() && !tool_calls.is_empty() {
            msg["content"] = Value::Null;
        } else {
            msg["content"] = json!(texts.join("\n"));
        }
        if !tool_calls.is_empty() {
            msg["tool_calls"] = json!(tool_calls);
        }
        if let Some(name) = &message.name {
            msg["name"] = json!(name);
        }
        if let Some(tool_call_id) = &message.tool_call_id {
            msg["tool_call_id"] = json!(tool_call_id);
        }

        msg
    }
}
