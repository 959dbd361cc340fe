//! User configuration loaded from `~/.config/suggestfeed/config.toml`

mod loader;
mod types;

pub use loader::{config_path, load_config, load_config_from_path, parse_config_toml};
pub use types::{Config, ExecuteConfig, FeedConfig};
