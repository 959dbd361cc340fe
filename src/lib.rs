//! Paginated AI marketing suggestion feed
//!
//! Decodes suggestion payloads from the CRM backend, keeps them newest
//! first in a [`feed::SuggestionFeed`], and projects the current page into a
//! display model for whatever presents it.

pub mod config;
pub mod error;
pub mod feed;
pub mod suggestion;


pub use error::FeedError;
pub use feed::{FeedEvent, FeedView, PageTarget, SuggestionFeed};
pub use suggestion::{SuggestionId, SuggestionRecord};
