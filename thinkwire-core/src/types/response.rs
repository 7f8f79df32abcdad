//! Response types for chat completions

use crate::types::message::ContentBlock;
use chrono::{DateTime, Utc};
use std::fmt;

/// Token usage statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Usage {
    /// Tokens in the prompt
    pub prompt_tokens: u32,
    /// Tokens in the completion
    pub completion_tokens: u32,
    /// Total tokens used
    pub total_tokens: u32,
    /// Completion tokens spent on reasoning, when the provider reports it
    pub reasoning_tokens: Option<u32>,
}

/// Why the model stopped generating
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinishReason {
    /// Natural end of message
    Stop,
    /// Hit max_tokens limit
    Length,
    /// Model decided to call a tool
    ToolCalls,
    /// Content was filtered
    ContentFilter,
    /// Any other value, kept verbatim
    Other(String),
}

impl FinishReason {
    /// Map a wire value to a finish reason
    pub fn from_wire(reason: &str) -> Self {
        match reason {
            "stop" => FinishReason::Stop,
            "length" => FinishReason::Length,
            "tool_calls" => FinishReason::ToolCalls,
            "content_filter" => FinishReason::ContentFilter,
            other => FinishReason::Other(other.to_string()),
        }
    }

    /// The wire representation of this finish reason
    pub fn as_str(&self) -> &str {
        match self {
            FinishReason::Stop => "stop",
            FinishReason::Length => "length",
            FinishReason::ToolCalls => "tool_calls",
            FinishReason::ContentFilter => "content_filter",
            FinishReason::Other(other) => other,
        }
    }
}

impl fmt::Display for FinishReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complete response from a chat-completion call
///
/// Produced once per call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatResponse {
    /// Provider-assigned response ID
    pub id: String,
    /// Ordered content blocks; reasoning precedes text
    pub content: Vec<ContentBlock>,
    /// Why generation stopped
    pub finish_reason: FinishReason,
    /// Model that produced the response, if reported
    pub model: Option<String>,
    /// Usage statistics, if reported
    pub usage: Option<Usage>,
    /// When the response was observed
    pub created_at: DateTime<Utc>,
}

impl ChatResponse {
    /// Reasoning content of the first Thinking block
    pub fn thinking(&self) -> Option<&str> {
        self.content.iter().find_map(ContentBlock::as_thinking)
    }

    /// Text of the first Text block
    pub fn text(&self) -> Option<&str> {
        self.content.iter().find_map(ContentBlock::as_text)
    }

    /// Check if the response carries reasoning content
    pub fn has_thinking(&self) -> bool {
        self.content.iter().any(ContentBlock::is_thinking)
    }

    /// Tool use blocks, in order
    pub fn tool_uses(&self) -> impl Iterator<Item = &ContentBlock> {
        self.content
            .iter()
            .filter(|block| matches!(block, ContentBlock::ToolUse { .. }))
    }
}

impl fmt::Display for ChatResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text().unwrap_or_default())?;
        let tool_uses = self.tool_uses().count();
        if tool_uses > 0 {
            write!(f, " [+{} tool calls]", tool_uses)?;
        }
        Ok(())
    }
}

impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Usage(prompt: {}, completion: {}, total: {})",
            self.prompt_tokens, self.completion_tokens, self.total_tokens
        )
    }
}
