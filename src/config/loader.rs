use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use super::types::Config;
use crate::error::FeedError;

const CONFIG_DIR: &str = "suggestfeed";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the user config, falling back to defaults
pub fn load_config() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };

    load_config_from_path(&path)
}

/// Missing, unreadable or invalid files yield the default config
pub fn load_config_from_path(path: &Path) -> Config {
    let mut file = match File::open(path) {
        Ok(f) => f,
        Err(_) => return Config::default(),
    };

    let mut contents = String::new();
    if let Err(e) = file.read_to_string(&mut contents) {
        log::warn!("Failed to read config {}: {}", path.display(), e);
        return Config::default();
    }

    match parse_config_toml(&contents) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{} in {}, using defaults", e, path.display());
            Config::default()
        }
    }
}

pub fn parse_config_toml(content: &str) -> Result<Config, FeedError> {
    toml::from_str(content).map_err(|e| FeedError::Config(e.to_string()))
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
