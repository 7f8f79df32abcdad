//! Generation options and their override precedence

use std::num::NonZeroU32;

/// Sparse generation options
///
/// Every field is independently set or unset. A field is never defaulted at
/// construction. The reasoning budget is a positive token count, so it is
/// either unset or non-zero. Options are built once through
/// [`GenerateOptionsBuilder`] and read through accessors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerateOptions {
    thinking_budget: Option<NonZeroU32>,
    temperature: Option<f32>,
    top_p: Option<f32>,
    max_tokens: Option<u32>,
    frequency_penalty: Option<f32>,
    presence_penalty: Option<f32>,
    seed: Option<u64>,
    stream: Option<bool>,
}

impl GenerateOptions {
    /// Create a new options builder
    pub fn builder() -> GenerateOptionsBuilder {
        GenerateOptionsBuilder::default()
    }

    /// Token budget for reasoning content
    pub fn thinking_budget(&self) -> Option<u32> {
        self.thinking_budget.map(NonZeroU32::get)
    }

    /// Sampling temperature
    pub fn temperature(&self) -> Option<f32> {
        self.temperature
    }

    /// Top-p nucleus sampling
    pub fn top_p(&self) -> Option<f32> {
        self.top_p
    }

    /// Maximum tokens to generate
    pub fn max_tokens(&self) -> Option<u32> {
        self.max_tokens
    }

    /// Frequency penalty
    pub fn frequency_penalty(&self) -> Option<f32> {
        self.frequency_penalty
    }

    /// Presence penalty
    pub fn presence_penalty(&self) -> Option<f32> {
        self.presence_penalty
    }

    /// Random seed for deterministic generation
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Incremental delivery flag
    pub fn stream(&self) -> Option<bool> {
        self.stream
    }

    /// Resolve the effective options for a call
    ///
    /// Each field takes the per-call value when set, else the default value,
    /// else stays unset.
    pub fn merge(call: Option<&GenerateOptions>, default: &GenerateOptions) -> GenerateOptions {
        let Some(call) = call else {
            return default.clone();
        };

        GenerateOptions {
            thinking_budget: call.thinking_budget.or(default.thinking_budget),
            temperature: call.temperature.or(default.temperature),
            top_p: call.top_p.or(default.top_p),
            max_tokens: call.max_tokens.or(default.max_tokens),
            frequency_penalty: call.frequency_penalty.or(default.frequency_penalty),
            presence_penalty: call.presence_penalty.or(default.presence_penalty),
            seed: call.seed.or(default.seed),
            stream: call.stream.or(default.stream),
        }
    }

    /// Resolve the reasoning budget alone, with the same precedence as [`merge`](Self::merge)
    pub fn resolve_thinking_budget(
        call: Option<&GenerateOptions>,
        default: &GenerateOptions,
    ) -> Option<u32> {
        call.and_then(GenerateOptions::thinking_budget)
            .or(default.thinking_budget())
    }
}

/// Builder for GenerateOptions
#[derive(Debug, Default)]
pub struct GenerateOptionsBuilder {
    options: GenerateOptions,
}

impl GenerateOptionsBuilder {
    /// Set the reasoning token budget
    ///
    /// A budget of zero leaves the field unset.
    pub fn thinking_budget(mut self, budget: u32) -> Self {
        self.options.thinking_budget = NonZeroU32::new(budget);
        self
    }

    /// Set temperature
    pub fn temperature(mut self, temp: f32) -> Self {
        self.options.temperature = Some(temp);
        self
    }

    /// Set top-p
    pub fn top_p(mut self, p: f32) -> Self {
        self.options.top_p = Some(p);
        self
    }

    /// Set maximum tokens
    pub fn max_tokens(mut self, tokens: u32) -> Self {
        self.options.max_tokens = Some(tokens);
        self
    }

    /// Set frequency penalty
    pub fn frequency_penalty(mut self, penalty: f32) -> Self {
        self.options.frequency_penalty = Some(penalty);
        self
    }

    /// Set presence penalty
    pub fn presence_penalty(mut self, penalty: f32) -> Self {
        self.options.presence_penalty = Some(penalty);
        self
    }

    /// Set the random seed
    pub fn seed(mut self, seed: u64) -> Self {
        self.options.seed = Some(seed);
        self
    }

    /// Set the incremental delivery flag
    pub fn stream(mut self, stream: bool) -> Self {
        self.options.stream = Some(stream);
        self
    }

    /// Build the options
    pub fn build(self) -> GenerateOptions {
        self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builder_leaves_unset_fields_empty() {
        let options = GenerateOptions::builder().thinking_budget(5000).build();

        assert_eq!(options.thinking_budget(), Some(5000));
        assert_eq!(options.temperature(), None);
        assert_eq!(options.top_p(), None);
        assert_eq!(options.max_tokens(), None);
        assert_eq!(options.stream(), None);
        let empty = GenerateOptions::builder().build();
        assert_eq!(empty, GenerateOptions::default());
    }

    #[test]
    fn test_mixed_configuration() {
        let options = GenerateOptions::builder()
            .thinking_budget(3000)
            .temperature(0.7)
            .top_p(0.9)
            .max_tokens(2000)
            .stream(false)
            .build();

        assert_eq!(options.thinking_budget(), Some(3000));
        assert_eq!(options.temperature(), Some(0.7));
        assert_eq!(options.top_p(), Some(0.9));
        assert_eq!(options.max_tokens(), Some(2000));
        assert_eq!(options.stream(), Some(false));
    }

    #[test]
    fn test_zero_budget_leaves_field_unset() {
        let options = GenerateOptions::builder().thinking_budget(0).build();
        assert_eq!(options.thinking_budget(), None);
        assert_eq!(options, GenerateOptions::default());

        let default = GenerateOptions::builder().thinking_budget(1000).build();
        assert_eq!(
            GenerateOptions::resolve_thinking_budget(Some(&options), &default),
            Some(1000)
        );
    }

    #[test]
    fn test_resolve_thinking_budget_precedence() {
        let call = GenerateOptions::builder().thinking_budget(8000).build();
        let default = GenerateOptions::builder().thinking_budget(1000).build();
        let empty = GenerateOptions::default();

        assert_eq!(
            GenerateOptions::resolve_thinking_budget(Some(&call), &default),
            Some(8000)
        );
        assert_eq!(
            GenerateOptions::resolve_thinking_budget(Some(&empty), &default),
            Some(1000)
        );
        assert_eq!(
            GenerateOptions::resolve_thinking_budget(None, &default),
            Some(1000)
        );
        assert_eq!(
            GenerateOptions::resolve_thinking_budget(Some(&empty), &empty),
            None
        );
        assert_eq!(GenerateOptions::resolve_thinking_budget(None, &empty), None);
    }

    #[test]
    fn test_merge_is_field_wise() {
        let call = GenerateOptions::builder()
            .temperature(0.2)
            .stream(true)
            .build();
        let default = GenerateOptions::builder()
            .temperature(0.7)
            .max_tokens(1000)
            .thinking_budget(3000)
            .build();

        let merged = GenerateOptions::merge(Some(&call), &default);
        assert_eq!(merged.temperature(), Some(0.2));
        assert_eq!(merged.max_tokens(), Some(1000));
        assert_eq!(merged.thinking_budget(), Some(3000));
        assert_eq!(merged.stream(), Some(true));
        assert_eq!(merged.top_p(), None);

        assert_eq!(GenerateOptions::merge(None, &default), default);
    }

    #[test]
    fn test_merge_leaves_inputs_untouched() {
        let call = GenerateOptions::builder().thinking_budget(8000).build();
        let default = GenerateOptions::builder().thinking_budget(1000).build();

        let _ = GenerateOptions::merge(Some(&call), &default);

        assert_eq!(call.thinking_budget(), Some(8000));
        assert_eq!(default.thinking_budget(), Some(1000));
    }
}
