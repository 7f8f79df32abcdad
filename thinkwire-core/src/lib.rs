//! Core traits and types for the Thinkwire library
//!
//! This crate holds the provider-agnostic data model: ordered content blocks,
//! sparse generation options, the response envelope and the error taxonomy.
//! It performs no I/O.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod model;
pub mod types;

// Re-export commonly used items
pub use error::{Error, Result};
pub use model::ChatModel;
pub use types::{
    message::{ContentBlock, Message, Role},
    options::{GenerateOptions, GenerateOptionsBuilder},
    response::{ChatResponse, FinishReason, Usage},
};
