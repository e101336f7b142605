use super::*;
use crate::llm::types::Role;

#[test]
fn build_messages_prepends_system() {
    let messages = vec![
        Message::user("What is a notice period?"),
        Message { role: Role::Assistant, content: "Usually 30 days.".into() },
    ];
    let out = build_messages("You are a legal assistant.", &messages);
    let roles: Vec<&str> = out.iter().map(|m| m.role).collect();
    assert_eq!(roles, vec!["system", "user", "assistant"]);
    assert_eq!(out[0].content, "You are a legal assistant.");
}

#[test]
fn build_messages_skips_empty_system() {
    let messages = vec![Message::user("hi")];
    assert_eq!(build_messages("", &messages).len(), 1);
}

#[test]
fn parse_text_response() {
    let json = serde_json::json!({
        "id": "chatcmpl-1",
        "model": "gpt-4o",
        "choices": [{ "index": 0, "message": { "role": "assistant", "content": "Keep your receipts." }, "finish_reason": "stop" }],
        "usage": { "prompt_tokens": 12, "completion_tokens": 4, "total_tokens": 16 }
    })
    .to_string();
    let resp = parse_response(&json).unwrap();
    assert_eq!(resp.text(), "Keep your receipts.");
    assert_eq!(resp.model, "gpt-4o");
    assert_eq!(resp.stop_reason, "stop");
    assert_eq!(resp.input_tokens, 12);
    assert_eq!(resp.output_tokens, 4);
}

#[test]
fn parse_null_content_and_missing_usage() {
    let json = serde_json::json!({
        "model": "gpt-4o",
        "choices": [{ "message": { "role": "assistant", "content": null } }]
    })
    .to_string();
    let resp = parse_response(&json).unwrap();
    assert!(resp.content.is_empty());
    assert_eq!(resp.stop_reason, "stop");
    assert_eq!(resp.input_tokens, 0);
}

#[test]
fn parse_no_choices_errors() {
    let json = serde_json::json!({ "model": "gpt-4o", "choices": [] }).to_string();
    assert!(matches!(parse_response(&json), Err(LlmError::ApiParse(_))));
}
