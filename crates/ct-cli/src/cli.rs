//! CLI configuration and settings management

use crate::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use ct_core::LABEL_WIDTH;

/// CLI configuration loaded from config files, falling back to defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Display settings
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Width of the label field on every output line
    pub label_width: usize,

    /// Emit a trailing summary line after the showcase
    pub summary: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            display: DisplayConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            label_width: LABEL_WIDTH,
            summary: false,
        }
    }
}

impl CliConfig {
    /// Load configuration from file, falling back to defaults
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let config = if let Some(path) = config_path {
            Self::load_from_file(path)?
        } else {
            let mut config = Self::default();

            // Try current directory
            if let Ok(local_config) = Self::load_from_file(Path::new("comptour.toml")) {
                config = config.merge(local_config);
            }

            // Try system config directory
            if let Some(config_dir) = dirs::config_dir() {
                let system_config = config_dir.join("comptour").join("config.toml");
                if let Ok(system_config) = Self::load_from_file(&system_config) {
                    config = config.merge(system_config);
                }
            }

            config
        };

        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            CliError::Config(format!("Failed to parse config file {}: {}", path.display(), e))
        })?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| CliError::Config(format!("Failed to create config directory: {}", e)))?;
        }

        std::fs::write(path, content)
            .map_err(|e| CliError::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Merge this configuration with another, with the other taking precedence
    pub fn merge(self, other: Self) -> Self {
        other
    }

    /// Get the default config file path for the current user
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("comptour").join("config.toml"))
    }
}
