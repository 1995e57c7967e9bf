//! Global configuration for graphwalk (stored in ~/.config/graphwalk/config.toml)

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{GraphwalkError, Result};
use crate::format::{OutputFormat, DEFAULT_SEPARATOR};

const CONFIG_DIR: &str = "graphwalk";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "GRAPHWALK_CONFIG_DIR";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GlobalConfig {
    /// Preset used when neither `--graph` nor `--preset` is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_preset: Option<String>,

    /// Separator for node sequences in human output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,

    /// Output format when `--format` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
}

impl GlobalConfig {
    fn config_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    GraphwalkError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load the config file, falling back to defaults when it does not exist
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| GraphwalkError::io_operation("read config", path.display(), e))?;

        Self::parse(&content).map_err(|e| {
            GraphwalkError::Other(format!(
                "failed to parse config from {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Parse config from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn separator(&self) -> &str {
        self.separator.as_deref().unwrap_or(DEFAULT_SEPARATOR)
    }

    /// Returns the source description for display purposes
    pub fn source_display() -> String {
        if std::env::var(CONFIG_DIR_ENV_VAR).is_ok() {
            "custom config directory".to_string()
        } else {
            "~/.config/graphwalk/config.toml".to_string()
        }
    }
}
