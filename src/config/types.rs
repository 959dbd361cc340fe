// Configuration type definitions

use serde::Deserialize;

use crate::feed::DEFAULT_PAGE_SIZE;

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_id() -> u32 {
    1
}

/// Feed configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeedConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        FeedConfig {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Identity sent along with executed suggestions
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExecuteConfig {
    #[serde(default = "default_id")]
    pub category_id: u32,
    #[serde(default = "default_id")]
    pub user_id: u32,
}

impl Default for ExecuteConfig {
    fn default() -> Self {
        ExecuteConfig {
            category_id: 1,
            user_id: 1,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub execute: ExecuteConfig,
}
