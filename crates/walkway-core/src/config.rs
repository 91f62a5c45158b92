//! Configuration for walkway (stored in ~/.config/walkway/config.toml)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, WalkwayError};

const CONFIG_DIR: &str = "walkway";
const CONFIG_FILE: &str = "config.toml";
pub const CONFIG_DIR_ENV_VAR: &str = "WALKWAY_CONFIG_DIR";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Dataset used when `--data` is not given
    #[serde(default)]
    pub dataset: Option<PathBuf>,

    /// Bucket count the location index starts with
    #[serde(default)]
    pub initial_capacity: Option<usize>,
}

impl Config {
    /// Default config file location, honouring `WALKWAY_CONFIG_DIR`.
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    WalkwayError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one the default location is
    /// used, and a missing default file yields `Config::default()`.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(WalkwayError::invalid_value(
                        "config path",
                        format!("{} does not exist", path.display()),
                    ));
                }
                Self::load_from(path)
            }
            None => {
                let path = Self::default_path()?;
                if !path.exists() {
                    tracing::debug!(path = %path.display(), "no config file, using defaults");
                    return Ok(Self::default());
                }
                Self::load_from(&path)
            }
        }
    }

    /// Read and parse a config file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            WalkwayError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "config_loaded");
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.initial_capacity == Some(0) {
            return Err(WalkwayError::InvalidCapacity);
        }
        Ok(())
    }

    /// Resolve the dataset to load: a CLI override wins over the config file.
    /// A relative `dataset` in the config file is taken relative to the
    /// file's own directory when `config_dir` is given.
    pub fn dataset_path(&self, cli_override: Option<&Path>, config_dir: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = cli_override {
            return Ok(path.to_path_buf());
        }
        match (&self.dataset, config_dir) {
            (Some(path), Some(dir)) if path.is_relative() => Ok(dir.join(path)),
            (Some(path), _) => Ok(path.clone()),
            (None, _) => crate::bail_usage!(
                "no dataset given: pass --data <FILE> or set `dataset` in config.toml"
            ),
        }
    }
}
