// crates/chat-text-gen/tests/catalog.rs
// ============================================================================
// Module: Message Catalog Tests
// Description: Integration tests for message document parsing.
// Purpose: Validate structural failures, lenient skipping and ordering.
// Dependencies: chat-text-gen, serde_json
// ============================================================================

//! ## Overview
//! Covers the catalog parser contract: required arrays, language entry
//! checks, silent dropping of malformed message entries, and preservation of
//! `content` key order.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use chat_text_gen::ChatGenError;
use chat_text_gen::MessageCatalog;
use serde_json::Value;
use serde_json::json;

// ============================================================================
// SECTION: Helpers
// ============================================================================

fn assert_schema_error(document: &Value) {
    match MessageCatalog::from_value(document) {
        Err(ChatGenError::Schema(_)) => {}
        other => panic!("expected schema error for {document}, got {other:?}"),
    }
}

fn languages() -> Value {
    json!([
        {"id": "en", "name": "English"},
        {"id": "pl", "name": "Polish"}
    ])
}

// ============================================================================
// SECTION: Structural Errors
// ============================================================================

#[test]
fn root_must_be_an_object() {
    assert_schema_error(&json!([]));
    assert_schema_error(&json!("catalog"));
}

#[test]
fn languages_array_is_required() {
    assert_schema_error(&json!({"chatMessages": []}));
    assert_schema_error(&json!({"languages": {}, "chatMessages": []}));
}

#[test]
fn chat_messages_array_is_required() {
    assert_schema_error(&json!({"languages": []}));
    assert_schema_error(&json!({"languages": [], "chatMessages": "none"}));
}

#[test]
fn language_entries_must_be_complete_objects() {
    assert_schema_error(&json!({"languages": ["en"], "chatMessages": []}));
    assert_schema_error(&json!({"languages": [{"id": "en"}], "chatMessages": []}));
    assert_schema_error(&json!({"languages": [{"name": "English"}], "chatMessages": []}));
    assert_schema_error(&json!({"languages": [{"id": 1, "name": "English"}], "chatMessages": []}));
}

#[test]
fn retained_message_with_bad_fields_is_fatal() {
    let bad_messages = [
        json!({"uniqueName": 7, "content": {}}),
        json!({"uniqueName": "A", "content": []}),
        json!({"uniqueName": "A", "content": {"en": "Hello"}}),
        json!({"uniqueName": "A", "content": {"en": {"comment": "c"}}}),
        json!({"uniqueName": "A", "content": {"en": {"processed": "p"}}}),
        json!({"uniqueName": "A", "content": {"en": {"comment": "c", "processed": 1}}}),
    ];
    for message in bad_messages {
        assert_schema_error(&json!({"languages": languages(), "chatMessages": [message]}));
    }
}

// ============================================================================
// SECTION: Lenient Entries
// ============================================================================

#[test]
fn malformed_message_entries_are_skipped() -> Result<(), ChatGenError> {
    let catalog = MessageCatalog::from_value(&json!({
        "languages": languages(),
        "chatMessages": [
            "not an object",
            42,
            {"uniqueName": "NoContent"},
            {"content": {"en": {"comment": "c", "processed": "p"}}},
            {},
            {"uniqueName": "Kept", "content": {"en": {"comment": "c", "processed": "p"}}}
        ]
    }))?;
    assert_eq!(catalog.messages.len(), 1);
    assert_eq!(catalog.messages[0].unique_name, "Kept");
    Ok(())
}

#[test]
fn empty_content_gives_empty_message() -> Result<(), ChatGenError> {
    let catalog = MessageCatalog::from_value(&json!({
        "languages": languages(),
        "chatMessages": [{"uniqueName": "Empty", "content": {}}]
    }))?;
    assert!(catalog.messages[0].translations.is_empty());
    assert_eq!(catalog.messages[0].doc_comment(), "");
    Ok(())
}

// ============================================================================
// SECTION: Ordering and Lookup
// ============================================================================

#[test]
fn content_order_is_preserved() -> Result<(), ChatGenError> {
    let catalog = MessageCatalog::from_json_slice(
        br#"{"languages": [],
             "chatMessages": [{"uniqueName": "M", "content": {
                 "zz": {"comment": "z", "processed": "1"},
                 "aa": {"comment": "a", "processed": "2"},
                 "mm": {"comment": "m", "processed": "3"}}}]}"#,
    )?;
    let ids: Vec<&str> =
        catalog.messages[0].translations.iter().map(|entry| entry.language_id.as_str()).collect();
    assert_eq!(ids, ["zz", "aa", "mm"]);
    Ok(())
}

#[test]
fn first_comment_is_the_doc_comment() -> Result<(), ChatGenError> {
    let catalog = MessageCatalog::from_value(&json!({
        "languages": languages(),
        "chatMessages": [{"uniqueName": "M", "content": {
            "pl": {"comment": "pierwszy", "processed": "a"},
            "en": {"comment": "second", "processed": "b"}
        }}]
    }))?;
    let message = &catalog.messages[0];
    assert_eq!(message.doc_comment(), "pierwszy");
    assert_eq!(message.translations[1].comment, None);
    Ok(())
}

#[test]
fn empty_first_comment_is_kept_over_later_comments() -> Result<(), ChatGenError> {
    let catalog = MessageCatalog::from_value(&json!({
        "languages": languages(),
        "chatMessages": [{"uniqueName": "M", "content": {
            "pl": {"comment": "", "processed": "a"},
            "en": {"comment": "fallback", "processed": "b"}
        }}]
    }))?;
    assert_eq!(catalog.messages[0].doc_comment(), "");
    Ok(())
}

#[test]
fn later_comments_are_not_inspected() -> Result<(), ChatGenError> {
    let catalog = MessageCatalog::from_value(&json!({
        "languages": languages(),
        "chatMessages": [{"uniqueName": "M", "content": {
            "en": {"comment": "first", "processed": "a"},
            "pl": {"comment": 5, "processed": "b"}
        }}]
    }))?;
    assert_eq!(catalog.messages[0].translations.len(), 2);
    Ok(())
}

#[test]
fn duplicate_language_ids_keep_last_name() -> Result<(), ChatGenError> {
    let catalog = MessageCatalog::from_value(&json!({
        "languages": [{"id": "en", "name": "English"}, {"id": "en", "name": "British"}],
        "chatMessages": []
    }))?;
    assert_eq!(catalog.languages.name("en"), Some("British"));
    assert_eq!(catalog.languages.len(), 1);
    Ok(())
}
