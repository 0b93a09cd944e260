//! Environment variable configuration source.
//!
//! Every config field can be supplied as a `FLOTA_*` variable:
//!
//! - `FLOTA_DATA_DIR` - directory holding the database file
//! - `FLOTA_LOCK_WAIT_SECONDS` - database lock wait in seconds
//! - `FLOTA_CURRENCY` - display currency code
//! - `FLOTA_OUTPUT` - default output format (human, json, yaml)

use std::env;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::output::OutputFormat;

use super::schema::Config;

/// Reads configuration from `FLOTA_*` environment variables.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Loads the configuration fields present in the environment.
    ///
    /// Unset variables leave their field as `None`; set but malformed
    /// variables are an error rather than being silently ignored.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `FLOTA_LOCK_WAIT_SECONDS` is not an
    /// unsigned integer or `FLOTA_OUTPUT` is not a known format.
    pub fn load() -> Result<Config> {
        let mut config = Config::default();

        if let Ok(dir) = env::var("FLOTA_DATA_DIR") {
            config.data_dir = Some(PathBuf::from(dir));
        }

        if let Ok(value) = env::var("FLOTA_LOCK_WAIT_SECONDS") {
            let seconds = value.parse::<u64>().map_err(|_| Error::Validation {
                field: "FLOTA_LOCK_WAIT_SECONDS".into(),
                message: format!("expected an unsigned integer, got '{value}'"),
            })?;
            config.lock_wait_seconds = Some(seconds);
        }

        if let Ok(currency) = env::var("FLOTA_CURRENCY") {
            config.currency = Some(currency);
        }

        if let Ok(value) = env::var("FLOTA_OUTPUT") {
            let format = OutputFormat::parse(&value).map_err(|message| Error::Validation {
                field: "FLOTA_OUTPUT".into(),
                message,
            })?;
            config.output = Some(format);
        }

        Ok(config)
    }
}
