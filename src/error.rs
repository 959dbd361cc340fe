use thiserror::Error;

/// Custom error types for suggestfeed
///
/// The feed itself never fails; these cover the edges where raw input
/// enters the crate (payloads, page targets, config files, I/O).
#[derive(Debug, Clone, Error)]
pub enum FeedError {
    #[error("Invalid suggestion payload: {0}")]
    InvalidPayload(String),

    #[error("Invalid page target '{0}': expected first, prev, next, last or a page number")]
    InvalidPageTarget(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for FeedError {
    fn from(err: std::io::Error) -> Self {
        FeedError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FeedError {
    fn from(err: serde_json::Error) -> Self {
        FeedError::InvalidPayload(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
