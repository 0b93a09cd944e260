//! Builder assembling the final configuration from all sources.

use std::path::PathBuf;

use crate::error::Result;

use super::environment::EnvironmentConfig;
use super::loader::ConfigLoader;
use super::schema::Config;

/// Builds a validated [`Config`] from files, environment, and programmatic
/// overrides.
///
/// # Examples
///
/// ```
/// use flota::config::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .build()
///     .unwrap();
/// assert_eq!(config.effective_currency(), "CLP");
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    skip_files: bool,
    skip_env: bool,
    config_path: Option<PathBuf>,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Creates a new builder with all sources enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Skips loading configuration files. Useful in tests.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Skips reading `FLOTA_*` environment variables. Useful in tests.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Uses an explicit config file path instead of `~/.flota/config.yaml`.
    #[must_use]
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Applies programmatic overrides with the highest precedence.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Builds and validates the merged configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file is malformed, an environment
    /// variable is malformed, or the merged result fails validation.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if !self.skip_files {
            let path = match self.config_path {
                Some(path) => path,
                None => ConfigLoader::default_path()?,
            };
            if let Some(file_config) = ConfigLoader::load_file(&path)? {
                config = config.merge(file_config);
            }
        }

        if !self.skip_env {
            config = config.merge(EnvironmentConfig::load()?);
        }

        if let Some(overrides) = self.overrides {
            config = config.merge(overrides);
        }

        config.validate()?;
        Ok(config)
    }
}
