//! Page navigation targets
//!
//! Targets come from page-control buttons as either a named direction or an
//! explicit page number. Explicit numbers out of range are clamped when
//! resolved, never rejected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::FeedError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTarget {
    First,
    Prev,
    Next,
    Last,
    /// Explicit 1-based page number
    Page(usize),
}

impl PageTarget {
    /// Resolve against the current position, clamped to `1..=total_pages`
    pub fn resolve(self, current_page: usize, total_pages: usize) -> usize {
        let total_pages = total_pages.max(1);
        let page = match self {
            PageTarget::First => 1,
            PageTarget::Prev => current_page.saturating_sub(1),
            PageTarget::Next => current_page.saturating_add(1),
            PageTarget::Last => total_pages,
            PageTarget::Page(page) => page,
        };
        page.clamp(1, total_pages)
    }

    /// Button label used by the text projection
    pub fn label(&self) -> String {
        match self {
            PageTarget::First => "«".to_string(),
            PageTarget::Prev => "‹".to_string(),
            PageTarget::Next => "›".to_string(),
            PageTarget::Last => "»".to_string(),
            PageTarget::Page(page) => page.to_string(),
        }
    }
}

impl fmt::Display for PageTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageTarget::First => f.write_str("first"),
            PageTarget::Prev => f.write_str("prev"),
            PageTarget::Next => f.write_str("next"),
            PageTarget::Last => f.write_str("last"),
            PageTarget::Page(page) => write!(f, "{}", page),
        }
    }
}

impl FromStr for PageTarget {
    type Err = FeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "first" => return Ok(PageTarget::First),
            "prev" | "previous" => return Ok(PageTarget::Prev),
            "next" => return Ok(PageTarget::Next),
            "last" => return Ok(PageTarget::Last),
            _ => {}
        }

        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(FeedError::InvalidPageTarget(s.to_string()));
        }

        if negative {
            return Ok(PageTarget::Page(0));
        }

        // Saturate oversized numbers; they clamp to the last page anyway
        Ok(PageTarget::Page(digits.parse().unwrap_or(usize::MAX)))
    }
}

impl Serialize for PageTarget {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageTarget::Page(page) => serializer.serialize_u64(*page as u64),
            other => serializer.serialize_str(&other.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for PageTarget {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(s) => s.parse().map_err(serde::de::Error::custom),
            Value::Number(n) => {
                if let Some(page) = n.as_u64() {
                    Ok(PageTarget::Page(usize::try_from(page).unwrap_or(usize::MAX)))
                } else {
                    // Negative or fractional
                    let page = n.as_f64().unwrap_or(0.0);
                    Ok(PageTarget::Page(if page < 1.0 { 0 } else { page as usize }))
                }
            }
            other => Err(serde::de::Error::custom(format!(
                "invalid page target: {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
#[path = "page_target_tests.rs"]
mod page_target_tests;
