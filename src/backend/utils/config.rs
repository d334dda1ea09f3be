use crate::utils::logging::DEFAULT_FILTER;
use serde::{Deserialize, Serialize};

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub session: SessionConfig,
    pub ui: UiConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub storage_key: String,
    /// Overrides the platform data directory.
    pub directory: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub theme: String,
    pub toast_timeout_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub filter: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: "user".to_string(),
            directory: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: "SwapSeva".to_string(),
            width: 1280.0,
            height: 832.0,
            theme: "light".to_string(),
            toast_timeout_ms: 5000,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Reads the config file. A missing file is not an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(ConfigError::IoError)?;
        serde_json::from_str(&content).map_err(ConfigError::SerdeError)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::IoError)?;
        }
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::SerdeError)?;
        std::fs::write(path, content).map_err(ConfigError::IoError)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    SerdeError(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(err) => write!(f, "IO error: {err}"),
            ConfigError::SerdeError(err) => write!(f, "Serialization error: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "swapseva-config-{name}-{}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert_eq!(config.session.storage_key, "user");
        assert_eq!(config.session.directory, None);
        assert_eq!(config.ui.toast_timeout_ms, 5000);
    }

    #[test]
    fn route_overrides_are_ignored() {
        let dir = scratch_dir("routes");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        std::fs::write(&path, r#"{ "routes": { "login": "/signin" }, "ui": { "width": 900 } }"#)
            .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.ui.width, 900.0);
        assert_eq!(config.session, SessionConfig::default());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = scratch_dir("missing");
        let config = AppConfig::load(&dir.join("config.json")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = scratch_dir("partial");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        std::fs::write(&path, r#"{ "ui": { "theme": "dark" } }"#).unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.ui.theme, "dark");
        assert_eq!(config.ui.title, "SwapSeva");
        assert_eq!(config.session.storage_key, "user");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn malformed_file_falls_back() {
        let dir = scratch_dir("malformed");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(AppConfig::load(&path), Err(ConfigError::SerdeError(_))));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn save_then_load_preserves_overrides() {
        let dir = scratch_dir("save");
        let path = dir.join("config.json");
        let mut config = AppConfig::default();
        config.session.storage_key = "guest".to_string();
        config.ui.theme = "dark".to_string();
        config.save(&path).unwrap();

        assert_eq!(AppConfig::load(&path).unwrap(), config);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
