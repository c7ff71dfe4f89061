//! Configuration for graphkit (stored in ~/.config/graphkit/config.toml)

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{GraphError, Result};

pub use types::{Config, LoaderConfig, OutputConfig, Weighting};

const CONFIG_DIR: &str = "graphkit";
const CONFIG_FILE: &str = "config.toml";
pub const CONFIG_DIR_ENV_VAR: &str = "GRAPHKIT_CONFIG_DIR";

impl Config {
    /// Default config file location, honouring `GRAPHKIT_CONFIG_DIR`
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    GraphError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| GraphError::io_operation("read config", path.display(), e))?;
        let config: Config = toml::from_str(&content)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save configuration to a file, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|e| {
                GraphError::io_operation("create config directory", dir.display(), e)
            })?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| GraphError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)
            .map_err(|e| GraphError::io_operation("write config", path.display(), e))?;
        Ok(())
    }

    /// Config from the default location, or defaults when no file exists
    pub fn discover() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// An explicit path must exist; otherwise fall back to [`Config::discover`]
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => Self::discover(),
        }
    }
}
