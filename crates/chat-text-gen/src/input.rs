// crates/chat-text-gen/src/input.rs
// ============================================================================
// Module: Input Reader
// Description: Bounded read-to-end for options and catalog streams.
// Purpose: Load whole documents into memory before parsing begins.
// Dependencies: std::io
// ============================================================================

//! ## Overview
//! Both documents are read to end-of-stream before any parsing happens; the
//! parser never works on a partial buffer. Reads are capped so an oversized or
//! endless stream fails instead of exhausting memory. No encoding validation
//! happens here.

use std::io::Read;

use crate::ChatGenError;

// ============================================================================
// CONSTANTS: Input limits
// ============================================================================

/// Maximum options document size accepted by the generator.
pub const MAX_OPTIONS_BYTES: u64 = 1024 * 1024;

/// Maximum message catalog size accepted by the generator.
pub const MAX_CATALOG_BYTES: u64 = 64 * 1024 * 1024;

/// Reads `reader` to end-of-stream, failing when more than `limit` bytes arrive.
///
/// # Errors
/// Returns [`ChatGenError::Io`] on read failure and
/// [`ChatGenError::InputTooLarge`] when the stream is longer than `limit`.
pub fn read_to_end_limited(reader: impl Read, limit: u64) -> Result<Vec<u8>, ChatGenError> {
    let mut bytes = Vec::new();
    let mut limited = reader.take(limit.saturating_add(1));
    limited.read_to_end(&mut bytes).map_err(|err| ChatGenError::Io(err.to_string()))?;
    let size = u64::try_from(bytes.len()).map_err(|_| ChatGenError::InputTooLarge {
        limit,
    })?;
    if size > limit {
        return Err(ChatGenError::InputTooLarge {
            limit,
        });
    }
    Ok(bytes)
}
