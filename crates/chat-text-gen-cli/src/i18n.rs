// crates/chat-text-gen-cli/src/i18n.rs
// ============================================================================
// Module: CLI Message Catalog
// Description: Message catalog and placeholder substitution for CLI output.
// Purpose: Keep every user-facing string in one table.
// Dependencies: Standard library collections.
// ============================================================================

//! ## Overview
//! User-facing strings live in a static catalog keyed by dotted names. Lookups
//! go through [`translate`] or the [`t!`](crate::t) macro.
//!
//! ## Invariants
//! - The catalog is built once and read-only thereafter.
//! - Missing keys fall back to the key itself.
//! - Placeholders are substituted in argument order.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// SECTION: Types
// ============================================================================

/// A formatted message argument captured by the [`macro@crate::t`] macro.
///
/// # Invariants
/// - `key` matches a placeholder name without braces (for example, `path`).
#[derive(Clone)]
pub struct MessageArg {
    /// The placeholder name used in message templates (e.g., `"path"`).
    pub key: &'static str,
    /// The formatted string value to substitute for this placeholder.
    pub value: String,
}

impl MessageArg {
    /// Constructs a new [`MessageArg`] from a key and displayable value.
    pub fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// Static catalog entries.
const CATALOG: &[(&str, &str)] = &[
    ("main.usage", "Usage: {program} [options file name] [input file name] [output file name]"),
    ("open.options_failed", "Error: could not open \"{path}\" options file for reading."),
    ("open.input_failed", "Error: could not open \"{path}\" input file for reading."),
    ("open.output_failed", "Error: could not open \"{path}\" file for writing."),
    ("generate.failed", "Error: generation failed: {error}"),
    ("output.write_failed", "Error: could not write \"{path}\": {error}"),
    ("output.stream.stdout", "stdout"),
    ("output.stream_failed", "Failed to write to {stream}: {error}"),
];

/// Returns the catalog as a lookup map.
pub(crate) fn catalog() -> &'static HashMap<&'static str, &'static str> {
    static CATALOG_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    CATALOG_MAP.get_or_init(|| CATALOG.iter().copied().collect())
}

/// Returns every catalog entry in declaration order.
#[must_use]
pub const fn catalog_entries() -> &'static [(&'static str, &'static str)] {
    CATALOG
}

// ============================================================================
// SECTION: Translation
// ============================================================================

/// Looks up `key` and substitutes `args` into its placeholders.
#[must_use]
pub fn translate(key: &str, args: Vec<MessageArg>) -> String {
    let template = catalog().get(key).copied().unwrap_or(key);
    if args.is_empty() {
        return template.to_string();
    }

    let mut result = template.to_string();
    for arg in args {
        let placeholder = format!("{{{}}}", arg.key);
        result = result.replace(&placeholder, &arg.value);
    }
    result
}

// ============================================================================
// SECTION: Macro
// ============================================================================

/// Formats a catalog message from a key and named arguments.
///
/// # Arguments
///
/// - `$key` must match a catalog entry.
/// - Named arguments are substituted into `{placeholder}` positions.
///
/// # Returns
///
/// A [`String`] with placeholders substituted.
#[macro_export]
macro_rules! t {
    ($key:literal $(, $name:ident = $value:expr )* $(,)?) => {{
        let args = ::std::vec![
            $(
                $crate::i18n::MessageArg::new(stringify!($name), $value.to_string()),
            )*
        ];
        $crate::i18n::translate($key, args)
    }};
}
