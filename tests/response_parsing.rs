//! Response-side reasoning tests: ordering, presence, passthrough and
//! malformed payloads

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::{json, Map, Value};
use thinkwire::prelude::*;

/// Build a payload whose message object lists `fields` in the given order
fn payload(fields: &[(&str, Value)]) -> Value {
    let message: Map<String, Value> = fields
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect();

    json!({
        "id": "chatcmpl-test-123",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": "deepseek-reasoner",
        "choices": [{
            "index": 0,
            "message": message,
            "finish_reason": "stop"
        }]
    })
}

fn parse(value: Value) -> ChatResponse {
    OpenAIResponseParser.parse(value).unwrap()
}

#[test]
fn test_thinking_precedes_text_regardless_of_field_order() {
    let reasoning = json!("Let me analyze this step by step...");
    let thinking = ("reasoning_content", reasoning);
    let text = ("content", json!("The answer is 42."));

    for fields in [vec![thinking.clone(), text.clone()], vec![text, thinking]] {
        let response = parse(payload(&fields));
        assert_eq!(
            response.content,
            vec![
                ContentBlock::thinking("Let me analyze this step by step..."),
                ContentBlock::text("The answer is 42."),
            ]
        );
    }

    let raw_orders = [
        r#"{"id":"c1","choices":[{"message":{"content":"A","reasoning_content":"R"},"finish_reason":"stop"}]}"#,
        r#"{"choices":[{"finish_reason":"stop","message":{"reasoning_content":"R","content":"A"}}],"id":"c1"}"#,
    ];
    for raw in raw_orders {
        let response = OpenAIResponseParser.parse_str(raw).unwrap();
        assert_eq!(
            response.content,
            vec![ContentBlock::thinking("R"), ContentBlock::text("A")]
        );
    }
}

#[test]
fn test_empty_thinking_is_distinct_from_absent_thinking() {
    let with_empty = parse(payload(&[
        ("reasoning_content", json!("")),
        ("content", json!("Answer")),
    ]));
    let without = parse(payload(&[("content", json!("Answer"))]));

    assert_eq!(with_empty.content.len(), without.content.len() + 1);
    assert_eq!(with_empty.content[0], ContentBlock::thinking(""));
    assert_eq!(with_empty.content[1], ContentBlock::text("Answer"));
    assert!(!without.has_thinking());
}

#[test]
fn test_unicode_and_symbols_pass_through() {
    let samples = [
        "分析一下：\n首先，我需要理解这个问题。\n然后，我可以得出结论。\n最后，答案是 42。",
        "Let's analyze: $100 + €50 = ?\nAlso: 50% of 200 = 100\nFormula: x² + y² = z²",
        "Café, naïve, façade: ¥, £, ₹ and 🙂",
        "  leading and trailing whitespace \t\n",
    ];

    for sample in samples {
        let response = parse(payload(&[("reasoning_content", json!(sample))]));
        let thinking = response.thinking().unwrap();
        assert_eq!(thinking.as_bytes(), sample.as_bytes());
    }
}

#[test]
fn test_long_thinking_is_not_truncated() {
    let mut long_thinking = String::new();
    for i in 0..400 {
        long_thinking.push_str(&format!(
            "Line {}: This is a long reasoning process. It contains many details and steps.\n",
            i
        ));
    }
    assert!(long_thinking.len() > 10_000);

    let raw = serde_json::to_string(&payload(&[
        ("reasoning_content", json!(long_thinking)),
        ("content", json!("done")),
    ]))
    .unwrap();
    let response = OpenAIResponseParser.parse_str(&raw).unwrap();

    assert_eq!(response.thinking(), Some(long_thinking.as_str()));
    assert_eq!(response.text(), Some("done"));
}

#[test]
fn test_multiple_paragraphs_are_preserved() {
    let thinking = "First paragraph of thinking.\n\nSecond paragraph with more analysis.\n\nThird paragraph with conclusion.";
    let response = parse(payload(&[("reasoning_content", json!(thinking))]));
    assert_eq!(response.thinking(), Some(thinking));
}

#[test]
fn test_single_field_and_empty_scenarios() {
    let text_only = parse(payload(&[("content", json!("Regular answer"))]));
    assert_eq!(text_only.content.len(), 1);
    assert_eq!(text_only.text(), Some("Regular answer"));

    let thinking_only = parse(payload(&[(
        "reasoning_content",
        json!("Extended internal reasoning without final answer"),
    )]));
    assert_eq!(
        thinking_only.content,
        vec![ContentBlock::thinking("Extended internal reasoning without final answer")]
    );

    let neither = parse(payload(&[("role", json!("assistant"))]));
    assert!(neither.content.is_empty());
    assert_eq!(neither.id, "chatcmpl-test-123");
}

#[test]
fn test_parsing_is_idempotent() {
    let value = payload(&[
        ("reasoning_content", json!("Thought process")),
        ("content", json!("Final answer")),
    ]);
    let observed_at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();

    let first = OpenAIResponseParser.parse_at(value.clone(), observed_at).unwrap();
    let second = OpenAIResponseParser.parse_at(value, observed_at).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.created_at, observed_at);
}

#[test]
fn test_unsolicited_reasoning_is_still_emitted() {
    let mut value = payload(&[
        ("reasoning_content", json!("unrequested")),
        ("content", json!("hi")),
    ]);
    value["model"] = json!("gpt-4o");

    let response = parse(value);
    assert_eq!(response.thinking(), Some("unrequested"));
}

#[test]
fn test_missing_id_is_malformed() {
    let mut value = payload(&[("content", json!("orphan"))]);
    value.as_object_mut().unwrap().remove("id");

    match OpenAIResponseParser.parse(value) {
        Err(Error::MalformedResponse { fields }) => assert_eq!(fields, vec!["id"]),
        other => panic!("Expected MalformedResponse error, got {:?}", other),
    }
}

#[test]
fn test_missing_finish_reason_is_malformed() {
    let mut value = payload(&[("content", json!("orphan"))]);
    value["choices"][0]
        .as_object_mut()
        .unwrap()
        .remove("finish_reason");

    let err = OpenAIResponseParser.parse(value).unwrap_err();
    assert!(err.is_malformed_response());
    assert!(err.to_string().contains("finish_reason"));
}

#[test]
fn test_unknown_finish_reason_is_kept() {
    let mut value = payload(&[("content", json!("partial"))]);
    value["choices"][0]["finish_reason"] = json!("insufficient_system_resource");

    let response = parse(value);
    assert_eq!(
        response.finish_reason,
        FinishReason::Other("insufficient_system_resource".to_string())
    );
}

#[test]
fn test_parse_str_with_result_alias() -> Result<()> {
    let raw = r#"{"id":"c2","choices":[{"message":{"content":"A"},"finish_reason":"stop"}]}"#;
    let response = OpenAIResponseParser.parse_str(raw)?;
    assert_eq!(response.text(), Some("A"));
    Ok(())
}
