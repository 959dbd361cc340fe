//! Suggestion record schema
//!
//! Server payloads are loosely shaped: ids arrive as strings or numbers,
//! point lists may be missing or `null`, and keys come in snake_case or
//! camelCase. Records are decoded permissively through `serde_json::Value`
//! so that a malformed field degrades to its default instead of rejecting
//! the whole record.
//!
//! Defaults:
//! - `id`: empty string when missing or `null`; numbers take their
//!   JavaScript string form (`7.0` → `"7"`, `1e21` → `"1e+21"`)
//! - `tag`: `None` when missing, `null` or blank
//! - `executed`: `false` unless `true`, a non-zero number or `"true"`
//! - `strategy_points` / `outcome_points`: empty when missing or not an array

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::parser::parse_suggestion_text;

/// Canonical string form of a suggestion id
///
/// Ids are compared by their string coercion, so the numeric id `7` and the
/// string id `"7"` identify the same record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SuggestionId(String);

impl SuggestionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Coerce any JSON scalar into an id
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => Self::default(),
            Value::String(s) => Self(s.clone()),
            Value::Bool(b) => Self(b.to_string()),
            Value::Number(n) => Self(number_to_string(n)),
            other => Self(other.to_string()),
        }
    }
}

impl fmt::Display for SuggestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SuggestionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for SuggestionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl<'de> Deserialize<'de> for SuggestionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

/// One AI-generated marketing action item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SuggestionRecord {
    pub id: SuggestionId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    pub executed: bool,
    pub strategy_points: Vec<String>,
    pub outcome_points: Vec<String>,
}

impl SuggestionRecord {
    /// Create an unexecuted record with no tag
    pub fn new(
        id: impl Into<SuggestionId>,
        strategy_points: Vec<String>,
        outcome_points: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            tag: None,
            executed: false,
            strategy_points,
            outcome_points,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Build a record from a chat reply that follows the
    /// "AI 建議方針： ... 預期成果： ..." layout
    ///
    /// Returns `None` when the reply has no strategy or no outcome points.
    pub fn from_reply(id: impl Into<SuggestionId>, tag: Option<&str>, reply: &str) -> Option<Self> {
        let (strategy_points, outcome_points) = parse_suggestion_text(reply)?;
        if strategy_points.is_empty() || outcome_points.is_empty() {
            return None;
        }

        Some(Self {
            id: id.into(),
            tag: tag.map(str::to_string),
            executed: false,
            strategy_points,
            outcome_points,
        })
    }

    /// Decode a record from an arbitrary JSON value
    ///
    /// Returns `None` only when the value is not an object.
    pub fn from_value(value: &Value) -> Option<Self> {
        let map = value.as_object()?;

        Some(Self {
            id: field(map, &["id"])
                .map(SuggestionId::from_value)
                .unwrap_or_default(),
            tag: field(map, &["tag"]).and_then(tag_from_value),
            executed: field(map, &["executed"]).is_some_and(is_truthy),
            strategy_points: points_from_value(field(
                map,
                &["strategy_points", "strategyPoints"],
            )),
            outcome_points: points_from_value(field(map, &["outcome_points", "outcomePoints"])),
        })
    }
}

impl<'de> Deserialize<'de> for SuggestionRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value)
            .ok_or_else(|| serde::de::Error::custom("expected a suggestion object"))
    }
}

/// First present key wins
fn field<'a>(map: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| map.get(*key))
}

fn number_to_string(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        n.as_f64().map(float_to_string).unwrap_or_default()
    }
}

/// Same text as JavaScript's `String(number)`: plain digits with a zero
/// fraction dropped ("7" for 7.0), exponent form ("1e+21", "1.5e-7")
/// outside `1e-6..1e21`
fn float_to_string(f: f64) -> String {
    let magnitude = f.abs();
    if f == 0.0 || (1e-6..1e21).contains(&magnitude) {
        return f.to_string();
    }

    let exp = format!("{:e}", f);
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
        _ => exp,
    }
}

fn tag_from_value(value: &Value) -> Option<String> {
    let tag = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => number_to_string(n),
        _ => return None,
    };
    (!tag.is_empty()).then_some(tag)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => s.eq_ignore_ascii_case("true"),
        _ => false,
    }
}

fn points_from_value(value: Option<&Value>) -> Vec<String> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(number_to_string(n)),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod record_tests;
