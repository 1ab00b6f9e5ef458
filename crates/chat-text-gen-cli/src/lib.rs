// crates/chat-text-gen-cli/src/lib.rs
// ============================================================================
// Module: Chat Text Generator CLI Library
// Description: Shared helpers for the chat-text-gen binary.
// Purpose: Expose the user-facing message catalog to the binary and tests.
// Dependencies: Standard library only.
// ============================================================================

//! ## Overview
//! Every line the `chat-text-gen` binary prints comes from the [`i18n`]
//! catalog through the [`t!`] macro.

pub mod i18n;
