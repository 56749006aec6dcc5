//! CLI configuration

use crate::error::{CliError, CliResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// State file used when neither the command line nor the config names one.
pub const DEFAULT_STATE_FILE: &str = "hallmark-state.json";

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CliConfig {
    /// Snapshot file the registries live in
    pub state_path: Option<PathBuf>,

    /// Principal used when `--caller` is not given
    pub default_caller: Option<String>,

    /// Deployer used by `hallmark init`
    pub deployer: Option<String>,
}

impl CliConfig {
    /// Load configuration from file
    pub fn load(path: Option<&str>) -> CliResult<Self> {
        let config_path = match path {
            Some(p) => PathBuf::from(p),
            None => Self::default_config_path()?,
        };

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let config: CliConfig =
                toml::from_str(&contents).map_err(|e| CliError::Config(e.to_string()))?;
            Ok(config)
        } else {
            Ok(CliConfig::default())
        }
    }

    /// Get the default configuration file path
    fn default_config_path() -> CliResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CliError::Config("Cannot find config directory".into()))?;
        Ok(config_dir.join("hallmark").join("config.toml"))
    }

    /// Resolve the state file: explicit flag, then config, then the default.
    pub fn state_path(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.state_path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_FILE))
    }
}
