//! Configuration loading and management
//!
//! Handles parsing of the optional `config.toml` in the platform config
//! directory. Every field has a default; a missing file is not an error.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Store location overrides
    #[serde(default)]
    pub store: StoreConfig,

    /// Text renderer tweaks
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Store-related configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path to the store file, overriding the platform data directory
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Display-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Marker shown on completed rows
    #[serde(default = "default_done_marker")]
    pub done_marker: String,

    /// Marker shown on still-open rows
    #[serde(default = "default_todo_marker")]
    pub todo_marker: String,
}

fn default_done_marker() -> String {
    "x".to_string()
}

fn default_todo_marker() -> String {
    " ".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            done_marker: default_done_marker(),
            todo_marker: default_todo_marker(),
        }
    }
}

impl Config {
    /// Load configuration from the platform config directory.
    ///
    /// A missing file yields defaults; a file that exists but does not
    /// parse is a user error.
    pub fn load() -> Result<Self> {
        match default_config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|err| {
            Error::InvalidConfig(format!("{}: {}", path.display(), err))
        })
    }
}

/// Path to `config.toml` in the platform config directory
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "tl").map(|dirs| dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_config_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert!(config.store.path.is_none());
        assert_eq!(config.display.done_marker, "x");
        assert_eq!(config.display.todo_marker, " ");
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[store]\npath = \"/tmp/my-tasks.json\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(
            config.store.path,
            Some(PathBuf::from("/tmp/my-tasks.json"))
        );
        assert_eq!(config.display.done_marker, "x");
    }

    #[test]
    fn display_markers_are_configurable() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[display]\ndone_marker = \"✔\"\ntodo_marker = \"·\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.display.done_marker, "✔");
        assert_eq!(config.display.todo_marker, "·");
    }

    #[test]
    fn malformed_config_is_a_user_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "store = [not toml").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }
}
