//! Decoding of suggestion API responses
//!
//! Accepted record payloads:
//! - a bare array of records
//! - `{ "initial": record }` from the initial-load endpoint
//! - `{ "suggestions": [record, ...] }`
//! - `{ "reply": "...", "newSuggestion": record | null }` from the chat endpoint
//! - a single record object

use serde_json::Value;

use super::record::SuggestionRecord;
use crate::error::FeedError;

/// One resolved chat exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    pub reply: String,
    pub new_suggestion: Option<SuggestionRecord>,
}

/// Decode zero or more records from an API response body
pub fn decode_records(json: &str) -> Result<Vec<SuggestionRecord>, FeedError> {
    let value: Value = serde_json::from_str(json)?;
    records_from_value(&value)
}

/// Decode a chat endpoint response
///
/// The reply text is required; a missing or `null` suggestion is not an error.
pub fn decode_chat_turn(json: &str) -> Result<ChatTurn, FeedError> {
    let value: Value = serde_json::from_str(json)?;

    let reply = value
        .get("reply")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            FeedError::InvalidPayload("chat response must be { reply: string }".to_string())
        })?
        .trim()
        .to_string();

    let new_suggestion = value
        .get("newSuggestion")
        .or_else(|| value.get("new_suggestion"))
        .and_then(SuggestionRecord::from_value);

    Ok(ChatTurn {
        reply,
        new_suggestion,
    })
}

fn records_from_value(value: &Value) -> Result<Vec<SuggestionRecord>, FeedError> {
    match value {
        Value::Array(items) => Ok(records_from_array(items)),
        Value::Object(map) => {
            if let Some(initial) = map.get("initial") {
                return Ok(single(initial));
            }
            if let Some(list) = map.get("suggestions") {
                return match list {
                    Value::Array(items) => Ok(records_from_array(items)),
                    Value::Null => Ok(Vec::new()),
                    _ => Err(FeedError::InvalidPayload(
                        "suggestions must be an array".to_string(),
                    )),
                };
            }
            if map.contains_key("reply") {
                let suggestion = map.get("newSuggestion").or_else(|| map.get("new_suggestion"));
                return Ok(suggestion.map(single).unwrap_or_default());
            }
            Ok(single(value))
        }
        _ => Err(FeedError::InvalidPayload(
            "expected an array or object of suggestions".to_string(),
        )),
    }
}

fn records_from_array(items: &[Value]) -> Vec<SuggestionRecord> {
    items
        .iter()
        .filter_map(|item| {
            let record = SuggestionRecord::from_value(item);
            if record.is_none() {
                log::debug!("Skipping non-object suggestion entry: {}", item);
            }
            record
        })
        .collect()
}

/// `null` means "no suggestion"
fn single(value: &Value) -> Vec<SuggestionRecord> {
    SuggestionRecord::from_value(value).into_iter().collect()
}

#[cfg(test)]
#[path = "payload_tests.rs"]
mod payload_tests;
