//! Provider adapters for chat-completion services
//!
//! Each adapter turns generation options into provider-specific request
//! fields and parses the provider's reply back into ordered content blocks.

#![warn(missing_docs)]

pub mod builder;
pub mod constants;
pub mod error;
pub mod http;
pub mod traits;

// Provider implementations
pub mod openai;

// Re-export provider types
pub use openai::{OpenAIChatModel, OpenAIResponseParser, ThinkingAdapter};

// Re-export common traits
pub use traits::{RequestBodyBuilder, ResponseParser};
