use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, VaultError};
use crate::generator::GeneratorConfig;

const DEFAULT_GRACE_PERIOD: &str = "5m";

/// Configuration file format (~/.pinvault/pinvault.toml).
///
/// Example:
/// ```toml
/// [storage]
/// dir = "~/vaults/personal"
///
/// [generator]
/// length = 20
/// symbols = true
///
/// [pin]
/// grace_period = "2m 30s"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub pin: PinConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    /// Directory holding the data slots (supports ~ expansion).
    /// Defaults to ~/.pinvault.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PinConfig {
    /// How long a verified PIN stays valid, e.g. "5m" or "90s".
    #[serde(default = "default_grace_period")]
    pub grace_period: String,
}

impl Default for PinConfig {
    fn default() -> Self {
        Self {
            grace_period: default_grace_period(),
        }
    }
}

fn default_grace_period() -> String {
    DEFAULT_GRACE_PERIOD.to_string()
}

impl PinConfig {
    /// Parse `grace_period` as a humantime duration.
    pub fn grace_period(&self) -> Result<chrono::Duration> {
        let duration: std::time::Duration = humantime::parse_duration(&self.grace_period)
            .map_err(|e| VaultError::Config(format!("invalid pin.grace_period '{}': {}", self.grace_period, e)))?;
        if duration.is_zero() {
            return Err(VaultError::Config("pin.grace_period must be greater than zero".into()));
        }
        chrono::Duration::from_std(duration)
            .map_err(|e| VaultError::Config(format!("pin.grace_period out of range: {}", e)))
    }
}

impl Config {
    /// Load config from a path. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| VaultError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to a path.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VaultError::Config(format!("serialize error: {}", e)))?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.generator
            .validate()
            .map_err(|e| VaultError::Config(format!("generator: {}", e)))?;
        self.pin.grace_period()?;
        Ok(())
    }

    /// Directory holding the data slots.
    pub fn data_dir(&self) -> Result<PathBuf> {
        match self.storage.dir {
            Some(ref dir) => Ok(PathBuf::from(expand_tilde(dir))),
            None => pinvault_dir(),
        }
    }
}

/// Get the default pinvault directory path (~/.pinvault).
pub fn pinvault_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(".pinvault"))
        .ok_or_else(|| VaultError::Config("could not determine home directory".into()))
}

/// Get the config file path.
pub fn config_path() -> Result<PathBuf> {
    Ok(pinvault_dir()?.join("pinvault.toml"))
}

/// Expand leading `~` to the user's home directory.
fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") || path == "~" {
        if let Some(home) = dirs::home_dir() {
            return path.replacen('~', &home.to_string_lossy(), 1);
        }
    }
    path.to_string()
}
