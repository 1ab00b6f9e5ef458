// crates/chat-text-gen/src/emit.rs
// ============================================================================
// Module: Header Emitter
// Description: Renders the C++ header text for a parsed message catalog.
// Purpose: Deterministic, single-pass text assembly of translation tables.
// Dependencies: tracing
// ============================================================================

//! ## Overview
//! Each message becomes an unnamed class deriving from
//! `internal::ChatMessageBase` with a `constexpr` lambda that fills a
//! `std::array<std::string_view, N>`, followed by an `inline constexpr`
//! instance named after the message. The file is wrapped in an optional
//! `#pragma once`, include lines and an optional namespace.
//!
//! ### Design Notes
//! - Literal bodies are emitted verbatim. Callers supply text that is already
//!   valid inside a C++ string literal.
//! - The table size is the number of translations present for the message,
//!   not the number of declared languages.
//! - With an enum configured, an index names the language's display name. An
//!   undeclared language id renders as an empty member name (`Enum::`), left
//!   for the C++ compiler to reject.

use std::fmt::Write;

use tracing::trace;

use crate::catalog::LanguageTable;
use crate::catalog::Message;
use crate::catalog::MessageCatalog;
use crate::options::GeneratorOptions;

// ============================================================================
// CONSTANTS: Fixed C++ fragments
// ============================================================================

/// Declaration of the tag type every generated message class derives from.
pub const MESSAGE_BASE_DECLARATION: &str =
    "namespace internal {\nstruct ChatMessageBase {};\n}\n\n";

/// Opening token of the compile-time format wrapper.
pub const COMPILE_MACRO_OPEN: &str = "FMT_COMPILE(";

/// Line emitted when `usePragmaOnce` is enabled.
pub const PRAGMA_ONCE_LINE: &str = "#pragma once\n\n";

// ============================================================================
// SECTION: File Rendering
// ============================================================================

/// Renders the complete header for `catalog` under `options`.
///
/// # Examples
/// ```
/// use chat_text_gen::GeneratorOptions;
/// use chat_text_gen::MessageCatalog;
/// use chat_text_gen::emit::render_header;
///
/// let text = render_header(&GeneratorOptions::default(), &MessageCatalog::default());
/// assert!(text.starts_with("#pragma once"));
/// assert!(text.contains("struct ChatMessageBase {};"));
/// ```
#[must_use]
pub fn render_header(options: &GeneratorOptions, catalog: &MessageCatalog) -> String {
    let mut body = String::new();
    for message in &catalog.messages {
        render_message(&mut body, options, &catalog.languages, message);
    }

    let mut out = String::with_capacity(body.len() + 256);
    if options.use_pragma_once {
        out.push_str(PRAGMA_ONCE_LINE);
    }
    if let Some(pch) = options.precompiled_header() {
        push_include(&mut out, pch);
    }
    for header in &options.header_files {
        push_include(&mut out, header);
    }
    out.push_str("\n\n");

    let namespace = options.namespace();
    if let Some(namespace) = namespace {
        out.push_str("namespace ");
        out.push_str(namespace);
        out.push_str("\n{\n\n");
    }
    out.push_str(MESSAGE_BASE_DECLARATION);
    out.push_str(&body);
    if namespace.is_some() {
        out.push_str("\n}\n");
    }
    out
}

/// Appends an `#include` line; the argument carries its own quotes or brackets.
fn push_include(out: &mut String, argument: &str) {
    out.push_str("#include ");
    out.push_str(argument);
    out.push('\n');
}

// ============================================================================
// SECTION: Message Rendering
// ============================================================================

/// Appends the class block for a single message.
fn render_message(
    out: &mut String,
    options: &GeneratorOptions,
    languages: &LanguageTable,
    message: &Message,
) {
    let _ = writeln!(out, "// \"{}\"", message.doc_comment());
    out.push_str("class \n\t: public internal::ChatMessageBase\n{\n");
    out.push_str("\tstatic constexpr auto generateContent = []\n\t{\n");
    let _ = writeln!(out, "\t\tstd::array<std::string_view, {}> result;", message.translations.len());
    for (position, entry) in message.translations.iter().enumerate() {
        out.push_str("\t\tresult[");
        push_index(out, options, languages, position, &entry.language_id);
        out.push_str("] = ");
        push_literal(out, options, &entry.processed);
        out.push_str(";\n");
    }
    out.push_str("\t\treturn result;\n\t};\n");
    out.push_str("public:\n\tstatic constexpr auto text = generateContent();\n");
    let _ = write!(out, "}} inline constexpr {};\n\n", message.unique_name);
    trace!(
        unique_name = message.unique_name.as_str(),
        translations = message.translations.len(),
        "rendered chat message"
    );
}

/// Appends the table index for a translation.
fn push_index(
    out: &mut String,
    options: &GeneratorOptions,
    languages: &LanguageTable,
    position: usize,
    language_id: &str,
) {
    match options.language_enum() {
        None => {
            let _ = write!(out, "{position}");
        }
        Some(language_enum) => {
            let name = languages.name(language_id).unwrap_or("");
            let _ = write!(out, "static_cast<int>({language_enum}::{name})");
        }
    }
}

/// Appends a string literal, optionally wrapped in the compile-time format macro.
fn push_literal(out: &mut String, options: &GeneratorOptions, processed: &str) {
    if options.use_compile_macro {
        out.push_str(COMPILE_MACRO_OPEN);
    }
    out.push('"');
    out.push_str(processed);
    out.push('"');
    if options.use_compile_macro {
        out.push(')');
    }
}
