//! Thinkwire - reasoning-aware adapters for chat-completion providers
//!
//! This crate translates generation options, including an extended-reasoning
//! budget, into provider request fields, and parses provider responses back
//! into ordered content blocks with reasoning ahead of the answer.
//!
//! # Quick Start
//!
//! ```no_run
//! # use thinkwire::prelude::*;
//! #
//! # #[tokio::main]
//! # async fn main() -> thinkwire::Result<()> {
//! #     #[cfg(feature = "providers")]
//! #     {
//!     let model = OpenAIChatModel::builder()
//!         .api_key("your-api-key")
//!         .model_name("o1")
//!         .enable_thinking(true)
//!         .default_options(GenerateOptions::builder().thinking_budget(5000).build())
//!         .build()?;
//!
//!     let response = model.call(&[Message::user("What is 6 * 7?")], None).await?;
//!     if let Some(thinking) = response.thinking() {
//!         println!("reasoning: {}", thinking);
//!     }
//!     println!("{}", response);
//! #     }
//! #     Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Re-export core types
pub use thinkwire_core::*;

#[cfg(feature = "providers")]
#[cfg_attr(docsrs, doc(cfg(feature = "providers")))]
pub mod providers {
    //! Provider implementations
    pub use thinkwire_providers::*;
}

/// Commonly used imports
pub mod prelude {
    pub use thinkwire_core::{
        ChatModel, ChatResponse, ContentBlock, Error, FinishReason, GenerateOptions, Message,
        Result, Role,
    };

    #[cfg(feature = "providers")]
    pub use thinkwire_providers::{
        openai::OpenAIConfig, OpenAIChatModel, OpenAIResponseParser, RequestBodyBuilder,
        ResponseParser, ThinkingAdapter,
    };
}
