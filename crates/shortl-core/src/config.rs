//! Shortener configuration

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Configuration for a [`crate::Shortener`].
///
/// Loaded from TOML, e.g.:
///
/// ```toml
/// timeout_secs = 5
/// user_agent = "my-app/1.0"
/// extended_builtins = true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortenerConfig {
    /// Total request timeout for built-in provider calls, in seconds.
    pub timeout_secs: u64,
    /// User-Agent header sent to provider endpoints.
    pub user_agent: String,
    /// Register the extended built-in set (`ulvis`, `zws`) in addition to
    /// the default `isgd`/`tinyurl` pair.
    pub extended_builtins: bool,
}

impl Default for ShortenerConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            user_agent: concat!("shortl/", env!("CARGO_PKG_VERSION")).to_string(),
            extended_builtins: false,
        }
    }
}

impl ShortenerConfig {
    /// Resolve configuration: an explicit path, else the user config file
    /// if one exists, else defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Parse a TOML configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// The user-level configuration file location
    /// (`<config dir>/shortl/config.toml`).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("shortl").join("config.toml"))
    }

    /// The upstream timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
