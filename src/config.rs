//! Configuration loading
//!
//! Reads `~/.config/kwsuggest/config.toml`. A missing file is not an error;
//! a malformed one falls back to defaults and reports a warning for display.

mod types;

pub use types::{ClipboardBackend, ClipboardConfig, Config, ExportConfig, ServerConfig};

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::KwError;

const CONFIG_DIR: &str = "kwsuggest";
const CONFIG_FILE: &str = "config.toml";

/// Outcome of loading the config file
#[derive(Debug, Default)]
pub struct ConfigResult {
    pub config: Config,
    /// Set when the file existed but could not be used
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load config from an explicit path, or the default location
pub fn load_config(path: Option<&Path>) -> ConfigResult {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) => p,
            None => return ConfigResult::default(),
        },
    };

    load_config_from_path(&path)
}

pub fn load_config_from_path(path: &Path) -> ConfigResult {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return ConfigResult::default(),
        Err(e) => {
            return ConfigResult {
                config: Config::default(),
                warning: Some(KwError::Io(e).to_string()),
            };
        }
    };

    match parse_config(&contents, path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::warn!("{}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(e.to_string()),
            }
        }
    }
}

fn parse_config(contents: &str, path: &Path) -> Result<Config, KwError> {
    toml::from_str::<Config>(contents).map_err(|e| KwError::InvalidConfig {
        path: path.display().to_string(),
        message: e.message().to_string(),
    })
}
