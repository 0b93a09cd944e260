//! Configuration schema: the fields, their defaults, merging, and
//! validation.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::output::OutputFormat;

/// Default lock wait in seconds when none is configured.
pub const DEFAULT_LOCK_WAIT_SECONDS: u64 = 5;

/// Default display currency.
pub const DEFAULT_CURRENCY: &str = "CLP";

/// The flota configuration.
///
/// Every field is optional; unset fields fall back to built-in defaults via
/// the `effective_*` accessors. Unknown keys in a config file are rejected
/// so that typos surface instead of being silently ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory holding the database file. Defaults to `~/.flota`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// How long to wait for the database lock, in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lock_wait_seconds: Option<u64>,

    /// Display currency code (ISO 4217). Amounts are stored as whole units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Default output format for the CLI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputFormat>,
}

impl Config {
    /// Returns the configured lock wait, or the default.
    #[must_use]
    pub fn effective_lock_wait_seconds(&self) -> u64 {
        self.lock_wait_seconds.unwrap_or(DEFAULT_LOCK_WAIT_SECONDS)
    }

    /// Returns the configured currency code, or the default.
    #[must_use]
    pub fn effective_currency(&self) -> &str {
        self.currency.as_deref().unwrap_or(DEFAULT_CURRENCY)
    }

    /// Returns the configured output format, or human.
    #[must_use]
    pub fn effective_output(&self) -> OutputFormat {
        self.output.unwrap_or(OutputFormat::Human)
    }

    /// Merges another configuration over this one.
    ///
    /// Set fields in `overlay` win; unset fields keep the current value.
    #[must_use]
    pub fn merge(self, overlay: Self) -> Self {
        Self {
            data_dir: overlay.data_dir.or(self.data_dir),
            lock_wait_seconds: overlay.lock_wait_seconds.or(self.lock_wait_seconds),
            currency: overlay.currency.or(self.currency),
            output: overlay.output.or(self.output),
        }
    }

    /// Validates the merged configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `lock_wait_seconds` is zero
    /// - `currency` is not a three-letter uppercase code
    pub fn validate(&self) -> Result<()> {
        if self.lock_wait_seconds == Some(0) {
            return Err(Error::Validation {
                field: "lock_wait_seconds".into(),
                message: "lock wait must be at least one second".into(),
            });
        }

        if let Some(ref currency) = self.currency {
            if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_uppercase()) {
                return Err(Error::Validation {
                    field: "currency".into(),
                    message: format!(
                        "currency must be a three-letter uppercase code, got '{currency}'"
                    ),
                });
            }
        }

        Ok(())
    }
}
