//! Event hooks for the presentation layer
//!
//! Page-control clicks move the feed; "execute" clicks mark a suggestion as
//! acted upon and hand back the submission body for the execution endpoint.

use serde::{Deserialize, Serialize};

use super::feed_state::SuggestionFeed;
use super::page_target::PageTarget;
use crate::config::ExecuteConfig;
use crate::suggestion::{SuggestionId, SuggestionRecord};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeedEvent {
    Page { target: PageTarget },
    Execute { id: SuggestionId },
}

/// Who is executing, and for which customer segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecuteContext {
    pub category_id: u32,
    pub user_id: u32,
}

impl From<&ExecuteConfig> for ExecuteContext {
    fn from(config: &ExecuteConfig) -> Self {
        Self {
            category_id: config.category_id,
            user_id: config.user_id,
        }
    }
}

/// Body for the execution endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecuteRequest {
    #[serde(rename = "categoryID")]
    pub category_id: u32,
    #[serde(rename = "userID")]
    pub user_id: u32,
    pub guideline: String,
    pub outcome: String,
}

impl ExecuteRequest {
    pub fn from_record(record: &SuggestionRecord, ctx: ExecuteContext) -> Self {
        Self {
            category_id: ctx.category_id,
            user_id: ctx.user_id,
            guideline: record.strategy_points.join("\n"),
            outcome: record.outcome_points.join("\n"),
        }
    }
}

impl SuggestionFeed {
    /// Apply a user event
    ///
    /// Returns the submission to forward when an execute event newly marks
    /// a record as executed. Unknown ids and repeat executions return None.
    pub fn handle_event(&mut self, event: FeedEvent, ctx: ExecuteContext) -> Option<ExecuteRequest> {
        match event {
            FeedEvent::Page { target } => {
                self.go_to_page(target);
                None
            }
            FeedEvent::Execute { id } => {
                let record = self.find(id.as_str())?;
                if record.executed {
                    log::debug!("Suggestion {} already executed", id);
                    return None;
                }

                let request = ExecuteRequest::from_record(record, ctx);
                self.mark_executed(id.as_str());
                Some(request)
            }
        }
    }
}

#[cfg(test)]
#[path = "feed_events_tests.rs"]
mod feed_events_tests;
