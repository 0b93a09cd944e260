//! Utility functions for CLI operations.
//!
//! This module provides common helpers used across CLI commands:
//! configuration loading, database opening, caller resolution, date
//! parsing, and output rendering.

use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::Serialize;

use flota::database::resolve_database_path;
use flota::output::{render, HumanRender, OutputFormat};
use flota::{Caller, Category, Config, ConfigBuilder, Database, DatabaseConfig};

use crate::error::CliError;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Verbosity is consumed by the logger in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds).
    pub busy_timeout: Option<u32>,

    /// Username to act as.
    pub user: Option<String>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if global.data_dir.is_some() || global.busy_timeout.is_some() {
        builder = builder.with_config(Config {
            data_dir: global.data_dir.clone(),
            lock_wait_seconds: global.busy_timeout.map(u64::from),
            ..Config::default()
        });
    }

    builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Open the database using global options and configuration.
///
/// The database path is resolved as: `--data-dir` > configured data
/// directory > `FLOTA_DATA_DIR` > `~/.flota`.
pub fn open_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    let db_path = match global.data_dir.as_ref().or(config.data_dir.as_ref()) {
        Some(dir) => dir.join("flota.db"),
        None => resolve_database_path().map_err(|e| CliError::Config(e.to_string()))?,
    };

    let timeout_seconds = global
        .busy_timeout
        .map_or_else(|| config.effective_lock_wait_seconds(), u64::from);
    let db_config = DatabaseConfig::new(db_path)
        .with_busy_timeout(std::time::Duration::from_secs(timeout_seconds));

    Database::open(db_config).map_err(CliError::from)
}

/// Resolve the acting caller from the `--user` option.
///
/// # Errors
///
/// Returns `InvalidArguments` if no username was given and
/// `SemanticFailure` if the username does not exist.
pub fn resolve_caller(db: &Database, global: &GlobalOptions) -> Result<Caller, CliError> {
    let username = global.user.as_deref().ok_or_else(|| {
        CliError::InvalidArguments("--user <USERNAME> is required for this command".to_string())
    })?;

    let user = db
        .get_user_by_username(username)
        .map_err(CliError::from)?
        .ok_or_else(|| CliError::SemanticFailure(format!("unknown user: {username}")))?;

    Ok(user.caller())
}

/// Parse a calendar date (`YYYY-MM-DD`) into a UTC timestamp at midnight.
pub fn parse_date(s: &str) -> Result<DateTime<Utc>, CliError> {
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| {
        CliError::InvalidArguments(format!("invalid date '{s}': {e} (expected YYYY-MM-DD)"))
    })?;
    Ok(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)))
}

/// Render a value in the requested format and print it to stdout.
pub fn print_rendered<T: Serialize + HumanRender>(
    format: OutputFormat,
    value: &T,
) -> Result<(), CliError> {
    let text = render(format, value).map_err(CliError::from)?;
    println!("{text}");
    Ok(())
}

/// Clap value parser for [`OutputFormat`].
pub fn parse_output_format(s: &str) -> Result<OutputFormat, String> {
    OutputFormat::parse(s)
}

/// Clap value parser for [`Category`].
pub fn parse_category(s: &str) -> Result<Category, String> {
    Category::parse(&s.to_lowercase())
}
