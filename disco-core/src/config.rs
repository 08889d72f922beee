use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// YAML config file structure (`~/.disco/config.yaml`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigYaml {
    /// Catalog file to serve albums from. None = built-in demo catalog.
    pub catalog_path: Option<PathBuf>,
    /// Simulated latency for every album fetch, in milliseconds
    #[serde(default)]
    pub fetch_delay_ms: u64,
}

/// Application configuration
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Config {
    pub catalog_path: Option<PathBuf>,
    pub fetch_delay: Duration,
}

impl Config {
    pub fn is_dev_mode() -> bool {
        std::env::var("DISCO_DEV_MODE").is_ok() || dotenvy::dotenv().is_ok()
    }

    pub fn load() -> Result<Self, ConfigError> {
        if Self::is_dev_mode() {
            info!("Dev mode activated - loading from environment");
            Self::from_env()
        } else {
            match Self::config_dir() {
                Some(dir) => {
                    info!("Production mode - loading from config.yaml");
                    Self::from_config_file(&dir.join("config.yaml"))
                }
                None => Ok(Self::default()),
            }
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let catalog_path = std::env::var("DISCO_CATALOG_PATH")
            .ok()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);
        let fetch_delay = match std::env::var("DISCO_FETCH_DELAY_MS").ok() {
            Some(raw) => parse_delay_ms(&raw)?,
            None => Duration::ZERO,
        };
        Ok(Self {
            catalog_path,
            fetch_delay,
        })
    }

    /// Read a config file. A missing file yields the defaults.
    pub fn from_config_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let yaml: ConfigYaml = serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::Serialization(e.to_string()))?;
        Ok(Self::from(yaml))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let yaml = ConfigYaml {
            catalog_path: self.catalog_path.clone(),
            fetch_delay_ms: u64::try_from(self.fetch_delay.as_millis()).unwrap_or(u64::MAX),
        };
        let content =
            serde_yaml::to_string(&yaml).map_err(|e| ConfigError::Serialization(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".disco"))
    }
}

impl From<ConfigYaml> for Config {
    fn from(yaml: ConfigYaml) -> Self {
        Self {
            catalog_path: yaml.catalog_path,
            fetch_delay: Duration::from_millis(yaml.fetch_delay_ms),
        }
    }
}

fn parse_delay_ms(raw: &str) -> Result<Duration, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ConfigError::Config(format!("Invalid DISCO_FETCH_DELAY_MS: {raw}")))
}
