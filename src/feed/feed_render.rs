//! Display model for the suggestion feed
//!
//! `SuggestionFeed::render` is a pure projection: it never mutates the feed
//! and every call yields a complete replacement of the previous view.

use serde::Serialize;

use super::feed_state::SuggestionFeed;
use super::page_target::PageTarget;
use crate::suggestion::{SuggestionId, SuggestionRecord};

pub const EMPTY_FEED_MESSAGE: &str = "No suggestions yet";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedView {
    pub list: FeedList,
    pub controls: PageControls,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeedList {
    /// Shown instead of list items when the feed holds no records
    Empty { message: String },
    Items { items: Vec<ListItem> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    /// 1-based position across all pages
    pub display_index: usize,
    pub id: SuggestionId,
    pub tag: Option<String>,
    pub executed: bool,
    pub strategy_points: Vec<String>,
    pub outcome_points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageControls {
    pub current_page: usize,
    pub total_pages: usize,
    /// Empty when everything fits on one page
    pub buttons: Vec<PageButton>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageButton {
    pub target: PageTarget,
    pub label: String,
    pub disabled: bool,
    pub active: bool,
}

impl ListItem {
    fn from_record(display_index: usize, record: &SuggestionRecord) -> Self {
        Self {
            display_index,
            id: record.id.clone(),
            tag: record.tag.clone(),
            executed: record.executed,
            strategy_points: record.strategy_points.clone(),
            outcome_points: record.outcome_points.clone(),
        }
    }
}

impl PageButton {
    fn new(target: PageTarget, disabled: bool, active: bool) -> Self {
        Self {
            target,
            label: target.label(),
            disabled,
            active,
        }
    }
}

impl FeedList {
    pub fn is_empty(&self) -> bool {
        matches!(self, FeedList::Empty { .. })
    }

    pub fn items(&self) -> &[ListItem] {
        match self {
            FeedList::Empty { .. } => &[],
            FeedList::Items { items } => items,
        }
    }
}

impl SuggestionFeed {
    /// Project the current state into a display model
    pub fn render(&self) -> FeedView {
        let list = if self.is_empty() {
            FeedList::Empty {
                message: EMPTY_FEED_MESSAGE.to_string(),
            }
        } else {
            let start = self.page_start();
            let items = self
                .current_page_items()
                .iter()
                .enumerate()
                .map(|(i, record)| ListItem::from_record(start + i + 1, record))
                .collect();
            FeedList::Items { items }
        };

        FeedView {
            list,
            controls: page_controls(self.current_page(), self.total_pages()),
        }
    }
}

/// first / prev / 1..=total / next / last; nothing for a single page
fn page_controls(current_page: usize, total_pages: usize) -> PageControls {
    let mut buttons = Vec::new();

    if total_pages > 1 {
        let at_first = current_page <= 1;
        let at_last = current_page >= total_pages;

        buttons.push(PageButton::new(PageTarget::First, at_first, false));
        buttons.push(PageButton::new(PageTarget::Prev, at_first, false));
        for page in 1..=total_pages {
            buttons.push(PageButton::new(
                PageTarget::Page(page),
                false,
                page == current_page,
            ));
        }
        buttons.push(PageButton::new(PageTarget::Next, at_last, false));
        buttons.push(PageButton::new(PageTarget::Last, at_last, false));
    }

    PageControls {
        current_page,
        total_pages,
        buttons,
    }
}

#[cfg(test)]
#[path = "feed_render_tests.rs"]
mod feed_render_tests;
