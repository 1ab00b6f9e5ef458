// crates/chat-text-gen-cli/tests/i18n.rs
// ============================================================================
// Module: CLI Message Catalog Tests
// Description: Exercises the message catalog and placeholder substitution.
// Purpose: Ensure CLI user-facing strings route through stable helpers.
// Dependencies: chat-text-gen-cli i18n module and the `t!` macro.
// ============================================================================

//! ## Overview
//! Validates the CLI catalog behavior:
//! - Message arguments capture key/value substitutions.
//! - Translation falls back to keys on misses.
//! - The [`t!`](chat_text_gen_cli::t) macro formats placeholders correctly.
//! - Catalog keys are unique.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use chat_text_gen_cli::i18n::MessageArg;
use chat_text_gen_cli::i18n::catalog_entries;
use chat_text_gen_cli::i18n::translate;
use chat_text_gen_cli::t;

// ============================================================================
// SECTION: Tests
// ============================================================================

/// Confirms message arguments capture key/value pairs.
#[test]
fn message_arg_new_captures_key_and_value() {
    let arg = MessageArg::new("path", "/tmp/options.json");
    assert_eq!(arg.key, "path");
    assert_eq!(arg.value, "/tmp/options.json");
}

/// Confirms catalog entries resolve and replace placeholders.
#[test]
fn translate_substitutes_placeholders() {
    let args = vec![MessageArg::new("path", "/tmp/options.json")];
    let result = translate("open.options_failed", args);
    assert_eq!(result, "Error: could not open \"/tmp/options.json\" options file for reading.");
}

/// Confirms missing keys fall back to the key string.
#[test]
fn translate_falls_back_to_key() {
    assert_eq!(translate("missing.key", Vec::new()), "missing.key");
}

/// Confirms the t! macro formats named arguments.
#[test]
fn t_macro_formats_usage_line() {
    let rendered = t!("main.usage", program = "chat-text-gen");
    assert_eq!(
        rendered,
        "Usage: chat-text-gen [options file name] [input file name] [output file name]"
    );
}

/// Confirms every catalog key appears once.
#[test]
fn catalog_keys_are_unique() {
    let mut seen = BTreeSet::new();
    for (key, _) in catalog_entries() {
        assert!(seen.insert(*key), "duplicate catalog key {key}");
    }
}
