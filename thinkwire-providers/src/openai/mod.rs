//! OpenAI-compatible chat completions provider

mod body;
mod config;
mod formatter;
mod model;
mod parser;
mod thinking;

pub use body::ChatCompletionBody;
pub use config::OpenAIConfig;
pub use formatter::OpenAIFormatter;
pub use model::OpenAIChatModel;
pub use parser::OpenAIResponseParser;
pub use thinking::{ThinkingAdapter, ThinkingConfig};
