//! Paginated suggestion feed
//!
//! Owns the ordered suggestion collection (newest first) together with its
//! page position, and projects both into a display model for the
//! presentation layer.

mod feed_events;
mod feed_render;
mod feed_state;
mod page_target;
mod pagination;
pub mod text_render;

pub use feed_events::{ExecuteContext, ExecuteRequest, FeedEvent};
pub use feed_render::{EMPTY_FEED_MESSAGE, FeedList, FeedView, ListItem, PageButton, PageControls};
pub use feed_state::SuggestionFeed;
pub use page_target::PageTarget;
pub use pagination::{DEFAULT_PAGE_SIZE, PaginationState};
