//! Extended reasoning ("thinking") request support
//!
//! Reasoning is requested through an additional body field:
//!
//! ```text
//! "thinking": { "type": "enabled", "budget_tokens": 5000 }   // budget resolved
//! "thinking": { "type": "enabled" }                          // no budget resolved
//! ```
//!
//! The budget comes from the per-call options when they set one, else from
//! the model's default options. A request carrying this field must not be
//! sent with incremental delivery; [`OpenAIChatModel`](super::OpenAIChatModel)
//! clears the stream flag before it applies the field.

use crate::constants::THINKING_FIELD;
use crate::traits::RequestBodyBuilder;
use serde_json::{json, Map, Value};
use thinkwire_core::GenerateOptions;
use tracing::debug;

/// The resolved reasoning configuration for one request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThinkingConfig {
    /// Token budget; `None` means enabled without an explicit budget
    pub budget_tokens: Option<u32>,
}

impl ThinkingConfig {
    /// Enabled with a token budget
    pub fn with_budget(budget_tokens: u32) -> Self {
        Self {
            budget_tokens: Some(budget_tokens),
        }
    }

    /// Enabled without a token budget
    pub fn without_budget() -> Self {
        Self {
            budget_tokens: None,
        }
    }

    /// The wire value; `budget_tokens` is present only when a budget is set
    pub fn to_value(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("type".to_string(), json!("enabled"));
        if let Some(budget) = self.budget_tokens {
            obj.insert("budget_tokens".to_string(), json!(budget));
        }
        Value::Object(obj)
    }
}

/// Writes the reasoning field into outgoing requests
#[derive(Debug, Clone, Copy, Default)]
pub struct ThinkingAdapter;

impl ThinkingAdapter {
    /// Resolve the reasoning budget and write the `thinking` field
    ///
    /// Performs exactly one write to `builder` and returns what was written.
    /// It does not touch the stream flag.
    pub fn apply_thinking<B>(
        &self,
        builder: &mut B,
        options: Option<&GenerateOptions>,
        default_options: &GenerateOptions,
    ) -> ThinkingConfig
    where
        B: RequestBodyBuilder + ?Sized,
    {
        let config = ThinkingConfig {
            budget_tokens: GenerateOptions::resolve_thinking_budget(options, default_options),
        };

        debug!(
            budget_tokens = ?config.budget_tokens,
            source = budget_source(options, default_options),
            "Applying thinking configuration"
        );

        builder.put_additional_body_property(THINKING_FIELD, config.to_value());
        config
    }
}

fn budget_source(
    options: Option<&GenerateOptions>,
    default_options: &GenerateOptions,
) -> &'static str {
    if options.and_then(GenerateOptions::thinking_budget).is_some() {
        "call"
    } else if default_options.thinking_budget().is_some() {
        "default"
    } else {
        "none"
    }
}
