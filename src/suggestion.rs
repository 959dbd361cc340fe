//! Suggestion module for the marketing suggestion feed
//!
//! This module provides the record schema, payload decoding and reply-text
//! parsing for AI marketing suggestions.

pub mod parser;
pub mod payload;
pub mod record;

// Re-export main types
pub use parser::parse_suggestion_text;
pub use payload::{ChatTurn, decode_chat_turn, decode_records};
pub use record::{SuggestionId, SuggestionRecord};
