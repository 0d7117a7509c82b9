use serde::Deserialize;
use std::{fs, path::{Path, PathBuf}, str::FromStr};
use log::LevelFilter;
use toml;

use crate::utils::normalizations::WordClass;

pub const DEFAULT_CONFIG_PATH: &str = "normalizer.toml";

#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigLoadingError {
    #[error("Failed to read the config ({path}): {reason}")]
    FailedToReadConfig { path: String, reason: String },

    #[error("Failed to parse the config: {0}")]
    FailedToParseConfig(#[from] toml::de::Error),

    #[error("Invalid log level in the config: '{0}'. Expected error, warn, info, debug, trace or off.")]
    InvalidLogLevel(String)
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub normalizer: NormalizerConfig,
    pub logging: LoggingConfig
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NormalizerConfig {
    pub word_class: WordClass
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: String
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "warn".to_string() }
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigLoadingError> {
        LevelFilter::from_str(&self.level).map_err(|_| ConfigLoadingError::InvalidLogLevel(self.level.clone()))
    }
}

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigLoadingError> {
        let config: Config = toml::from_str(content)?;
        config.logging.level_filter()?;

        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigLoadingError> {
        let config_str = fs::read_to_string(path).map_err(|err| ConfigLoadingError::FailedToReadConfig {
            path: path.display().to_string(),
            reason: err.to_string()
        })?;

        Self::from_toml_str(&config_str)
    }

    /// An explicit path must exist. Without one, `normalizer.toml` in the
    /// working directory is used when present, defaults otherwise.
    pub fn resolve(explicit: Option<&Path>) -> Result<(Self, ConfigSource), ConfigLoadingError> {
        Self::resolve_in(explicit, Path::new("."))
    }

    fn resolve_in(explicit: Option<&Path>, dir: &Path) -> Result<(Self, ConfigSource), ConfigLoadingError> {
        if let Some(path) = explicit {
            return Ok((Self::load(path)?, ConfigSource::File(path.to_path_buf())));
        }

        let fallback = dir.join(DEFAULT_CONFIG_PATH);
        if fallback.is_file() {
            Ok((Self::load(&fallback)?, ConfigSource::File(fallback)))
        } else {
            Ok((Self::default(), ConfigSource::Defaults))
        }
    }
}
