// crates/chat-text-gen/src/lib.rs
// ============================================================================
// Module: Chat Text Generator Library
// Description: Deterministic generator for compile-time chat message tables.
// Purpose: Render a C++ header from a JSON options document and message catalog.
// Dependencies: serde, serde_json, thiserror, tracing
// ============================================================================

//! ## Overview
//! This crate turns a localized chat message catalog into a C++ header that
//! embeds every translation in a `constexpr` string table. Generation is one
//! linear pass: load options, parse the catalog, render text.
//!
//! ### Design Notes
//! - Output is deterministic: message order follows `chatMessages` and
//!   translation order follows each `content` object as written.
//! - Message text is embedded verbatim; no escaping is performed.
//! - Malformed message entries are dropped, structural document errors fail
//!   the whole run before any output is produced.
//!
//! ## Index
//! - Public API: [`ChatTextGenerator`], [`ChatGenError`]
//! - Inputs: [`GeneratorOptions`], [`MessageCatalog`], [`input`]
//! - Rendering: [`emit`]

pub mod catalog;
pub mod emit;
pub mod error;
pub mod input;
pub mod options;

use std::io::Read;

pub use catalog::LanguageTable;
pub use catalog::Message;
pub use catalog::MessageCatalog;
pub use catalog::TranslationEntry;
pub use error::ChatGenError;
pub use input::MAX_CATALOG_BYTES;
pub use input::MAX_OPTIONS_BYTES;
pub use options::GeneratorOptions;

// ============================================================================
// SECTION: Public API
// ============================================================================

/// Generator loaded with options and a parsed message catalog.
///
/// # Invariants
/// - Rendering is deterministic for fixed inputs.
///
/// # Examples
/// ```
/// use chat_text_gen::ChatTextGenerator;
///
/// # fn main() -> Result<(), chat_text_gen::ChatGenError> {
/// let catalog = br#"{"languages":[{"id":"en","name":"English"}],
///     "chatMessages":[{"uniqueName":"Greeting",
///                      "content":{"en":{"comment":"hi","processed":"Hello"}}}]}"#;
/// let generator = ChatTextGenerator::load(&b"{}"[..], &catalog[..])?;
/// let header = generator.generate();
/// assert!(header.contains("result[0] = FMT_COMPILE(\"Hello\");"));
/// assert!(header.contains("} inline constexpr Greeting;"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ChatTextGenerator {
    /// Resolved generation options.
    options: GeneratorOptions,
    /// Parsed message catalog.
    catalog: MessageCatalog,
}

impl ChatTextGenerator {
    /// Reads and parses both documents from open streams.
    ///
    /// The options stream is read and parsed first; the catalog stream is
    /// only read once the options are known to be valid.
    ///
    /// # Errors
    /// Returns [`ChatGenError`] when a stream cannot be read, exceeds its size
    /// limit, is not JSON, or does not match the expected schema.
    pub fn load(options: impl Read, catalog: impl Read) -> Result<Self, ChatGenError> {
        let options_bytes = input::read_to_end_limited(options, MAX_OPTIONS_BYTES)?;
        let options = GeneratorOptions::from_json_slice(&options_bytes)?;
        let catalog_bytes = input::read_to_end_limited(catalog, MAX_CATALOG_BYTES)?;
        let catalog = MessageCatalog::from_json_slice(&catalog_bytes)?;
        Ok(Self::from_parts(options, catalog))
    }

    /// Builds a generator from already resolved inputs.
    #[must_use]
    pub const fn from_parts(options: GeneratorOptions, catalog: MessageCatalog) -> Self {
        Self {
            options,
            catalog,
        }
    }

    /// Returns the resolved options.
    #[must_use]
    pub const fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Returns the parsed catalog.
    #[must_use]
    pub const fn catalog(&self) -> &MessageCatalog {
        &self.catalog
    }

    /// Renders the complete header text.
    #[must_use]
    pub fn generate(&self) -> String {
        emit::render_header(&self.options, &self.catalog)
    }
}
