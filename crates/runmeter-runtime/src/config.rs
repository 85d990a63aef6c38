use crate::{Error, Result};
use runmeter_types::NotifyOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// On-disk configuration for runmeter.
///
/// A missing file is not an error; it loads as the defaults so the
/// notifier works out of the box.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub notify: NotifyOptions,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::default_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Resolve the config file path based on priority:
    /// 1. RUNMETER_CONFIG environment variable
    /// 2. XDG config directory
    /// 3. ~/.runmeter (fallback for systems without XDG)
    pub fn default_path() -> Result<PathBuf> {
        if let Ok(env_path) = std::env::var("RUNMETER_CONFIG") {
            return Ok(PathBuf::from(env_path));
        }

        if let Some(config_dir) = dirs::config_dir() {
            return Ok(config_dir.join("runmeter").join("config.toml"));
        }

        if let Some(home) = std::env::var_os("HOME") {
            return Ok(PathBuf::from(home).join(".runmeter").join("config.toml"));
        }

        Err(Error::Config(
            "Could not determine config path: no HOME directory or XDG config directory found"
                .to_string(),
        ))
    }
}
