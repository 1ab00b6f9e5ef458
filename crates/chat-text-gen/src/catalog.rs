// crates/chat-text-gen/src/catalog.rs
// ============================================================================
// Module: Message Catalog
// Description: Language table and chat message model plus document parser.
// Purpose: Turn the message document into ordered messages ready for emission.
// Dependencies: serde_json, tracing
// ============================================================================

//! ## Overview
//! The catalog document holds a `languages` array (id + display name) and a
//! `chatMessages` array. Structural problems with the document itself fail
//! the whole parse; individual message entries that are not objects or lack
//! `uniqueName`/`content` are dropped without error.
//!
//! ### Ordering
//! Translation order is the key order of each `content` object in the source
//! document. Numeric table indices are derived from it, so the JSON map must
//! keep insertion order (`serde_json` is built with `preserve_order`).

use std::collections::BTreeMap;

use serde_json::Map;
use serde_json::Value;
use tracing::debug;

use crate::ChatGenError;

// ============================================================================
// SECTION: Model
// ============================================================================

/// Language id to display name lookup.
///
/// # Invariants
/// - Ids are unique; a repeated id keeps the last declared name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageTable {
    /// Display names keyed by language id.
    names: BTreeMap<String, String>,
}

impl LanguageTable {
    /// Records `name` for `id`, replacing any earlier entry.
    pub fn insert(&mut self, id: impl Into<String>, name: impl Into<String>) {
        self.names.insert(id.into(), name.into());
    }

    /// Returns the display name declared for `id`.
    #[must_use]
    pub fn name(&self, id: &str) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// Number of declared languages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true when no language is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// One language's text for a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationEntry {
    /// Language id this entry belongs to.
    pub language_id: String,
    /// Raw text for the doc comment. Only read for the first entry of a message.
    pub comment: Option<String>,
    /// Literal body embedded verbatim in the output.
    pub processed: String,
}

/// A catalog entry with its translations in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Name of the generated constant.
    pub unique_name: String,
    /// Translations in `content` key order.
    pub translations: Vec<TranslationEntry>,
}

impl Message {
    /// Comment of the first translation, or an empty string when there is none.
    #[must_use]
    pub fn doc_comment(&self) -> &str {
        self.translations.first().and_then(|entry| entry.comment.as_deref()).unwrap_or("")
    }
}

/// Parsed message document.
///
/// # Invariants
/// - `messages` preserves `chatMessages` order, minus skipped entries.
///
/// # Examples
/// ```
/// use chat_text_gen::MessageCatalog;
///
/// # fn main() -> Result<(), chat_text_gen::ChatGenError> {
/// let catalog = MessageCatalog::from_json_slice(
///     br#"{"languages":[{"id":"en","name":"English"}],
///          "chatMessages":[{"uniqueName":"Greeting",
///                           "content":{"en":{"comment":"hi","processed":"Hello"}}}]}"#,
/// )?;
/// assert_eq!(catalog.languages.name("en"), Some("English"));
/// assert_eq!(catalog.messages[0].doc_comment(), "hi");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageCatalog {
    /// Declared languages.
    pub languages: LanguageTable,
    /// Retained messages.
    pub messages: Vec<Message>,
}

// ============================================================================
// SECTION: Parsing
// ============================================================================

impl MessageCatalog {
    /// Parses a message document from raw JSON bytes.
    ///
    /// # Errors
    /// Returns [`ChatGenError::Json`] for malformed JSON and
    /// [`ChatGenError::Schema`] for shape violations.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, ChatGenError> {
        let document: Value = serde_json::from_slice(bytes)?;
        Self::from_value(&document)
    }

    /// Parses an already decoded message document.
    ///
    /// # Errors
    /// Returns [`ChatGenError::Schema`] when the root is not an object, when
    /// `languages` or `chatMessages` is missing or not an array, when a
    /// language entry is malformed, or when a retained message is malformed.
    pub fn from_value(document: &Value) -> Result<Self, ChatGenError> {
        let Value::Object(root) = document else {
            return Err(schema("could not parse JSON file - value is not an object"));
        };
        let languages = parse_languages(root)?;
        let Some(Value::Array(entries)) = root.get("chatMessages") else {
            return Err(schema(
                "could not parse JSON file - \"chatMessages\" field not exists or is not an array",
            ));
        };
        let mut messages = Vec::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            match parse_message(entry)? {
                Some(message) => messages.push(message),
                None => debug!(position, "skipping malformed chat message entry"),
            }
        }
        debug!(
            languages = languages.len(),
            messages = messages.len(),
            skipped = entries.len() - messages.len(),
            "parsed message catalog"
        );
        Ok(Self {
            languages,
            messages,
        })
    }
}

/// Builds the language table from the `languages` array.
fn parse_languages(root: &Map<String, Value>) -> Result<LanguageTable, ChatGenError> {
    let Some(Value::Array(entries)) = root.get("languages") else {
        return Err(schema("could not parse JSON file - \"languages\" value is not an array"));
    };
    let mut table = LanguageTable::default();
    for entry in entries {
        let Value::Object(language) = entry else {
            return Err(schema("could not parse JSON file - language content is not an object"));
        };
        let id = required_str(language, "id", "language")?;
        let name = required_str(language, "name", "language")?;
        table.insert(id, name);
    }
    Ok(table)
}

/// Parses one `chatMessages` element; `None` means the entry is skipped.
fn parse_message(entry: &Value) -> Result<Option<Message>, ChatGenError> {
    let Value::Object(fields) = entry else {
        return Ok(None);
    };
    let (Some(unique_name), Some(content)) = (fields.get("uniqueName"), fields.get("content"))
    else {
        return Ok(None);
    };
    let Value::String(unique_name) = unique_name else {
        return Err(schema("chat message \"uniqueName\" is not a string"));
    };
    let Value::Object(content) = content else {
        return Err(schema(&format!("chat message \"{unique_name}\" content is not an object")));
    };
    let mut translations = Vec::with_capacity(content.len());
    for (language_id, value) in content {
        let Value::Object(text) = value else {
            return Err(schema(&format!(
                "chat message \"{unique_name}\" translation \"{language_id}\" is not an object"
            )));
        };
        let context = format!("chat message \"{unique_name}\" translation \"{language_id}\"");
        let comment = if translations.is_empty() {
            Some(required_str(text, "comment", &context)?.to_string())
        } else {
            None
        };
        let processed = required_str(text, "processed", &context)?.to_string();
        translations.push(TranslationEntry {
            language_id: language_id.clone(),
            comment,
            processed,
        });
    }
    Ok(Some(Message {
        unique_name: unique_name.clone(),
        translations,
    }))
}

/// Reads a required string field from `object`.
fn required_str<'a>(
    object: &'a Map<String, Value>,
    key: &str,
    context: &str,
) -> Result<&'a str, ChatGenError> {
    match object.get(key) {
        Some(Value::String(text)) => Ok(text.as_str()),
        Some(_) => Err(schema(&format!("{context} \"{key}\" is not a string"))),
        None => Err(schema(&format!("{context} is missing \"{key}\""))),
    }
}

/// Builds a schema error from a message.
fn schema(message: &str) -> ChatGenError {
    ChatGenError::Schema(message.to_string())
}
