// crates/chat-text-gen/src/error.rs
// ============================================================================
// Module: Generator Errors
// Description: Error taxonomy shared by every pipeline stage.
// Purpose: Give callers stable, matchable failure categories.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! A single error enum covers reading, JSON parsing and schema checks. The CLI
//! maps every variant to a fatal exit; usage and open failures never reach the
//! library and are handled by the binary directly.

use thiserror::Error;

/// Errors raised while loading inputs or generating output.
///
/// # Invariants
/// - Variant meanings are stable for automation and tests.
///
/// # Examples
/// ```
/// use chat_text_gen::ChatGenError;
///
/// let err = ChatGenError::Schema("\"languages\" value is not an array".to_string());
/// assert!(matches!(err, ChatGenError::Schema(message) if message.contains("languages")));
/// ```
#[derive(Debug, Error)]
pub enum ChatGenError {
    /// IO error while reading an input stream.
    #[error("io error: {0}")]
    Io(String),
    /// Input is not well-formed JSON.
    #[error("json error: {0}")]
    Json(String),
    /// Input is JSON but does not match the expected document shape.
    #[error("schema error: {0}")]
    Schema(String),
    /// Input stream is larger than the accepted limit.
    #[error("input exceeds {limit} bytes")]
    InputTooLarge {
        /// Byte limit that was exceeded.
        limit: u64,
    },
}

impl From<serde_json::Error> for ChatGenError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}
