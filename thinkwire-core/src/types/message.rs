//! Message and content block types for conversations

use serde::{Deserialize, Serialize};

/// The role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Role {
    /// System message (instructions)
    System,
    /// User message
    User,
    /// Assistant message
    Assistant,
    /// Tool message (function result)
    Tool,
}

/// One typed unit of a message payload
///
/// Blocks are plain values: two blocks are the same block when their
/// contents are equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Final answer text
    Text {
        /// The text content
        text: String,
    },
    /// Reasoning the model produced before answering; may be empty
    Thinking {
        /// The reasoning content
        thinking: String,
    },
    /// A tool invocation requested by the model
    ToolUse {
        /// Provider-assigned call ID
        id: String,
        /// Name of the tool to call
        name: String,
        /// JSON-encoded arguments, exactly as received
        input: String,
    },
}

impl ContentBlock {
    /// Create a text block
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Create a thinking block
    pub fn thinking(thinking: impl Into<String>) -> Self {
        Self::Thinking {
            thinking: thinking.into(),
        }
    }

    /// Create a tool use block
    pub fn tool_use(
        id: impl Into<String>,
        name: impl Into<String>,
        input: impl Into<String>,
    ) -> Self {
        Self::ToolUse {
            id: id.into(),
            name: name.into(),
            input: input.into(),
        }
    }

    /// Get text content if this is a Text variant
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentBlock::Text { text } => Some(text),
            _ => None,
        }
    }

    /// Get reasoning content if this is a Thinking variant
    pub fn as_thinking(&self) -> Option<&str> {
        match self {
            ContentBlock::Thinking { thinking } => Some(thinking),
            _ => None,
        }
    }

    /// Check if this is a Thinking variant
    pub fn is_thinking(&self) -> bool {
        matches!(self, ContentBlock::Thinking { .. })
    }

    /// Short name of the variant, used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            ContentBlock::Text { .. } => "text",
            ContentBlock::Thinking { .. } => "thinking",
            ContentBlock::ToolUse { .. } => "tool_use",
        }
    }
}

/// A message in a conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender
    pub role: Role,
    /// Ordered content blocks
    pub content: Vec<ContentBlock>,
    /// Name override for the message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Tool call ID if this is a tool response
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

impl Message {
    /// Create a message from content blocks
    pub fn with_blocks(role: Role, content: impl IntoIterator<Item = ContentBlock>) -> Self {
        Self {
            role,
            content: content.into_iter().collect(),
            name: None,
            tool_call_id: None,
        }
    }

    /// Create a simple text message
    pub fn text(role: Role, text: impl Into<String>) -> Self {
        Self::with_blocks(role, [ContentBlock::text(text)])
    }

    /// Create a system message
    pub fn system(text: impl Into<String>) -> Self {
        Self::text(Role::System, text)
    }

    /// Create a user message
    pub fn user(text: impl Into<String>) -> Self {
        Self::text(Role::User, text)
    }

    /// Create an assistant message
    pub fn assistant(text: impl Into<String>) -> Self {
        Self::text(Role::Assistant, text)
    }

    /// Create a tool message
    pub fn tool(text: impl Into<String>, tool_call_id: impl Into<String>) -> Self {
        let mut msg = Self::text(Role::Tool, text);
        msg.tool_call_id = Some(tool_call_id.into());
        msg
    }

    /// Concatenate every text block, in order
    pub fn text_content(&self) -> String {
        self.content
            .iter()
            .filter_map(ContentBlock::as_text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Check if any block is a Thinking block
    pub fn has_thinking(&self) -> bool {
        self.content.iter().any(ContentBlock::is_thinking)
    }
}
