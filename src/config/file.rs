//! Configuration file loading
//!
//! Handles loading configuration from JSON files.

use crate::config::CommandConfig;
use crate::error::ConfigError;
use serde::de::DeserializeOwned;

use std::path::{Path, PathBuf};

/// Configuration file handler
pub struct ConfigFile;

impl ConfigFile {
    /// Load configuration from a file
    ///
    /// A leading `~` is expanded before reading; errors name the path as
    /// given. The file is read synchronously on every call; nothing is cached.
    pub fn load<C: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<C, ConfigError> {
        let given = path.as_ref();
        let path = Self::resolve(given);

        if !path.exists() {
            log::error!("Config file at path '{}' does not exist", given.display());
            return Err(ConfigError::FileNotFound(given.display().to_string()));
        }

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::ReadFailed {
            path: given.display().to_string(),
            source,
        })?;

        let config: C = serde_json::from_str(&content)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load configuration and run its validation hook
    pub fn load_validated<C: CommandConfig, P: AsRef<Path>>(path: P) -> Result<C, ConfigError> {
        let config: C = Self::load(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Expand a leading `~` in a config path
    pub fn resolve<P: AsRef<Path>>(path: P) -> PathBuf {
        crate::domain::expand_tilde(path)
    }
}

/// Read and JSON-parse the file at `path`
pub fn load_config<C: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<C, ConfigError> {
    ConfigFile::load(path)
}

/// Read, JSON-parse and validate the file at `path`
pub fn load_validated_config<C: CommandConfig, P: AsRef<Path>>(path: P) -> Result<C, ConfigError> {
    ConfigFile::load_validated(path)
}
