//! Configuration file loading.
//!
//! The user configuration lives at `~/.flota/config.yaml`. A missing file
//! is not an error; a present but malformed file is.

use std::path::{Path, PathBuf};

use crate::database::default_data_dir;
use crate::error::Result;

use super::schema::Config;

/// Loads configuration from YAML files.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Returns the default user config path, `~/.flota/config.yaml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn default_path() -> Result<PathBuf> {
        Ok(default_data_dir()?.join("config.yaml"))
    }

    /// Loads a configuration file if it exists.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file exists but cannot be read, or a
    /// configuration error if it cannot be parsed.
    pub fn load_file(path: &Path) -> Result<Option<Config>> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(Some(config))
    }
}
