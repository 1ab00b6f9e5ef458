// crates/chat-text-gen/src/options.rs
// ============================================================================
// Module: Generator Options
// Description: Options document model and declarative field loader.
// Purpose: Resolve generation settings from a JSON options document.
// Dependencies: serde, serde_json, tracing
// ============================================================================

//! ## Overview
//! The options document is a flat JSON object. Every recognised key is listed
//! once in [`OPTION_FIELDS`] together with its expected JSON kind and a setter;
//! loading walks that table instead of repeating per-field code.
//!
//! - Absent keys keep their defaults.
//! - Present keys with the wrong JSON kind are a schema error.
//! - Unknown keys are ignored.
//! - Non-string elements inside `headerFiles` are skipped.

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::ChatGenError;

// ============================================================================
// SECTION: Options Model
// ============================================================================

/// Default declarator recorded for `chatMessageType`.
pub const DEFAULT_MESSAGE_VALUE_TYPE: &str = "constexpr auto";

/// Resolved generation options.
///
/// Serializes back to the options document shape, so
/// `GeneratorOptions::from_value(&options.to_value()?)` reproduces `options`.
///
/// # Invariants
/// - Immutable once loaded; the emitter only reads it.
/// - Empty `precompiled_header`, `namespace` and `language_enum` mean "unset".
///
/// # Examples
/// ```
/// use chat_text_gen::GeneratorOptions;
///
/// # fn main() -> Result<(), chat_text_gen::ChatGenError> {
/// let options = GeneratorOptions::from_json_slice(br#"{"namespace": "chat_txt"}"#)?;
/// assert_eq!(options.namespace(), Some("chat_txt"));
/// assert!(options.use_compile_macro);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratorOptions {
    /// Precompiled header include argument (`pch`).
    #[serde(rename = "pch")]
    pub precompiled_header: String,
    /// Namespace wrapping all generated declarations (`namespace`).
    pub namespace: String,
    /// Enumeration used for table indices (`languageEnum`).
    #[serde(rename = "languageEnum")]
    pub language_enum: String,
    /// Extra include arguments, emitted in order (`headerFiles`).
    #[serde(rename = "headerFiles")]
    pub header_files: Vec<String>,
    /// Declarator hint for message values (`chatMessageType`).
    ///
    /// Accepted and round-tripped but not used by the emitter.
    #[serde(rename = "chatMessageType")]
    pub message_value_type: String,
    /// Wrap every literal in `FMT_COMPILE(...)` (`useCompileMacro`).
    #[serde(rename = "useCompileMacro")]
    pub use_compile_macro: bool,
    /// Emit `#pragma once` (`usePragmaOnce`).
    #[serde(rename = "usePragmaOnce")]
    pub use_pragma_once: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            precompiled_header: String::new(),
            namespace: String::new(),
            language_enum: String::new(),
            header_files: Vec::new(),
            message_value_type: DEFAULT_MESSAGE_VALUE_TYPE.to_string(),
            use_compile_macro: true,
            use_pragma_once: true,
        }
    }
}

impl GeneratorOptions {
    /// Parses an options document from raw JSON bytes.
    ///
    /// # Errors
    /// Returns [`ChatGenError::Json`] for malformed JSON and
    /// [`ChatGenError::Schema`] for shape violations.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, ChatGenError> {
        let document: Value = serde_json::from_slice(bytes)?;
        Self::from_value(&document)
    }

    /// Resolves options from an already parsed document.
    ///
    /// # Errors
    /// Returns [`ChatGenError::Schema`] when the root is not an object or a
    /// recognised key holds the wrong JSON kind.
    pub fn from_value(document: &Value) -> Result<Self, ChatGenError> {
        let Value::Object(fields) = document else {
            return Err(ChatGenError::Schema(
                "could not parse options file - value is not an object".to_string(),
            ));
        };
        let mut options = Self::default();
        for field in OPTION_FIELDS {
            if let Some(value) = fields.get(field.key) {
                field.apply(&mut options, value)?;
            }
        }
        debug!(
            namespace = options.namespace.as_str(),
            language_enum = options.language_enum.as_str(),
            header_files = options.header_files.len(),
            use_compile_macro = options.use_compile_macro,
            use_pragma_once = options.use_pragma_once,
            "loaded generator options"
        );
        Ok(options)
    }

    /// Re-derives the options document for these settings.
    ///
    /// # Errors
    /// Returns [`ChatGenError::Json`] if serialization fails.
    pub fn to_value(&self) -> Result<Value, ChatGenError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Returns the precompiled header argument, if set.
    #[must_use]
    pub fn precompiled_header(&self) -> Option<&str> {
        non_empty(&self.precompiled_header)
    }

    /// Returns the wrapping namespace, if set.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        non_empty(&self.namespace)
    }

    /// Returns the language enumeration name, if set.
    #[must_use]
    pub fn language_enum(&self) -> Option<&str> {
        non_empty(&self.language_enum)
    }
}

/// Maps empty strings to `None`.
fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}

// ============================================================================
// SECTION: Field Table
// ============================================================================

/// Typed setter for one options field; the variant fixes the expected JSON kind.
#[derive(Clone, Copy)]
enum FieldSetter {
    /// JSON boolean.
    Bool(fn(&mut GeneratorOptions, bool)),
    /// JSON string.
    Text(fn(&mut GeneratorOptions, String)),
    /// JSON array; non-string elements are dropped.
    TextList(fn(&mut GeneratorOptions, Vec<String>)),
}

impl FieldSetter {
    /// Kind name used in schema error messages.
    const fn kind_name(self) -> &'static str {
        match self {
            Self::Bool(_) => "boolean",
            Self::Text(_) => "string",
            Self::TextList(_) => "array",
        }
    }
}

/// One recognised options key.
struct OptionField {
    /// JSON key in the options document.
    key: &'static str,
    /// Kind check and assignment for the key.
    setter: FieldSetter,
}

impl OptionField {
    /// Checks `value` against the field kind and stores it.
    fn apply(&self, options: &mut GeneratorOptions, value: &Value) -> Result<(), ChatGenError> {
        match (self.setter, value) {
            (FieldSetter::Bool(set), Value::Bool(flag)) => set(options, *flag),
            (FieldSetter::Text(set), Value::String(text)) => set(options, text.clone()),
            (FieldSetter::TextList(set), Value::Array(items)) => {
                let texts = items.iter().filter_map(Value::as_str).map(str::to_string).collect();
                set(options, texts);
            }
            (setter, _) => {
                return Err(ChatGenError::Schema(format!(
                    "could not parse options file - \"{}\" value is not a {}",
                    self.key,
                    setter.kind_name()
                )));
            }
        }
        Ok(())
    }
}

/// Every options key the loader recognises.
const OPTION_FIELDS: &[OptionField] = &[
    OptionField {
        key: "useCompileMacro",
        setter: FieldSetter::Bool(|options, flag| options.use_compile_macro = flag),
    },
    OptionField {
        key: "usePragmaOnce",
        setter: FieldSetter::Bool(|options, flag| options.use_pragma_once = flag),
    },
    OptionField {
        key: "languageEnum",
        setter: FieldSetter::Text(|options, text| options.language_enum = text),
    },
    OptionField {
        key: "pch",
        setter: FieldSetter::Text(|options, text| options.precompiled_header = text),
    },
    OptionField {
        key: "namespace",
        setter: FieldSetter::Text(|options, text| options.namespace = text),
    },
    OptionField {
        key: "chatMessageType",
        setter: FieldSetter::Text(|options, text| options.message_value_type = text),
    },
    OptionField {
        key: "headerFiles",
        setter: FieldSetter::TextList(|options, texts| options.header_files = texts),
    },
];
