//! Core chat model trait

use crate::error::Result;
use crate::types::message::Message;
use crate::types::options::GenerateOptions;
use crate::types::response::ChatResponse;
use async_trait::async_trait;

/// A chat-completion model bound to one provider
///
/// Implementations own their default options; `options` passed to
/// [`call`](ChatModel::call) override them field by field.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Send the conversation and return the parsed response
    async fn call(
        &self,
        messages: &[Message],
        options: Option<&GenerateOptions>,
    ) -> Result<ChatResponse>;

    /// The model identifier requests are sent with
    fn model_name(&self) -> &str;
}
