//! Persistent client configuration.
//!
//! Remembers where the shortcut store lives so a relocation survives restarts.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::storage::default_store_path;
use crate::util::normalize_text_option;

const CONFIG_DIR_NAME: &str = "chordlist";
const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable overriding the store location.
pub const STORE_PATH_ENV: &str = "CHORDLIST_STORE_PATH";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default = "default_config_version")]
    pub version: u32,
    /// Store location chosen by the last relocation
    #[serde(default)]
    pub store_path: Option<PathBuf>,
}

const fn default_config_version() -> u32 {
    1
}

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME)
}

impl AppConfig {
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self {
                version: default_config_version(),
                ..Self::default()
            });
        }

        let raw = std::fs::read_to_string(path).map_err(|error| {
            Error::Config(format!(
                "Failed to read config at {}: {}",
                path.display(),
                error
            ))
        })?;
        serde_json::from_str::<Self>(&raw).map_err(|error| {
            Error::Config(format!(
                "Failed to parse config at {}: {}",
                path.display(),
                error
            ))
        })
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|error| {
                Error::Config(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    error
                ))
            })?;
        }

        let serialized = serde_json::to_string_pretty(self)?;
        std::fs::write(path, serialized).map_err(|error| {
            Error::Config(format!(
                "Failed to write config at {}: {}",
                path.display(),
                error
            ))
        })
    }

    /// Resolve the store location.
    ///
    /// Precedence: explicit path, environment value, configured path, then
    /// the platform default.
    pub fn resolve_store_path(&self, explicit: Option<PathBuf>, env_value: Option<String>) -> PathBuf {
        explicit
            .or_else(|| normalize_text_option(env_value).map(PathBuf::from))
            .or_else(|| self.store_path.clone())
            .unwrap_or_else(default_store_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_config_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from_path(&dir.path().join("config.json")).unwrap();
        assert_eq!(config.version, 1);
        assert_eq!(config.store_path, None);
    }

    #[test]
    fn config_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = AppConfig {
            version: 1,
            store_path: Some(PathBuf::from("/data/shortcuts.json")),
        };

        config.save_to_path(&path).unwrap();
        assert_eq!(AppConfig::load_from_path(&path).unwrap(), config);
    }

    #[test]
    fn malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "[1, 2").unwrap();

        let error = AppConfig::load_from_path(&path).unwrap_err();
        assert!(matches!(error, Error::Config(_)));
    }

    #[test]
    fn store_path_precedence() {
        let config = AppConfig {
            version: 1,
            store_path: Some(PathBuf::from("/configured.json")),
        };

        assert_eq!(
            config.resolve_store_path(
                Some(PathBuf::from("/explicit.json")),
                Some("/env.json".to_string())
            ),
            PathBuf::from("/explicit.json")
        );
        assert_eq!(
            config.resolve_store_path(None, Some(" /env.json ".to_string())),
            PathBuf::from("/env.json")
        );
        assert_eq!(
            config.resolve_store_path(None, Some("   ".to_string())),
            PathBuf::from("/configured.json")
        );
        assert_eq!(
            AppConfig::default().resolve_store_path(None, None),
            default_store_path()
        );
    }
}
