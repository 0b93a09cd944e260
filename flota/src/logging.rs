//! Stderr logging for the CLI surface.
//!
//! Diagnostics go to stderr so the rendered output on stdout stays
//! machine-readable. Verbosity comes from the CLI flags first and the
//! `FLOTA_LOG_MODE` environment variable second.

use std::env;
use std::fmt;

/// How much diagnostic output to emit.
///
/// Levels are totally ordered; a logger at a given level emits everything
/// at or below it.
///
/// # Examples
///
/// ```
/// use flota::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Nothing beyond the command's own output.
    Quiet,
    /// Errors and warnings.
    Normal,
    /// Everything, including info and debug messages.
    Verbose,
}

impl LogLevel {
    /// Parses a level name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns an error message for anything other than "quiet", "normal",
    /// or "verbose".
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Quiet => "quiet",
            Self::Normal => "normal",
            Self::Verbose => "verbose",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A level-gated stderr logger.
///
/// # Examples
///
/// ```
/// use flota::{LogLevel, Logger};
///
/// let logger = Logger::new(LogLevel::Normal);
/// logger.warn("reservation 12 has no project location");
/// logger.debug("this is dropped below Verbose");
/// ```
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a logger emitting at the given level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the level this logger emits at.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    const fn emits(&self, at: LogLevel) -> bool {
        self.level as u8 >= at as u8
    }

    /// Logs an error. Suppressed only at Quiet.
    pub fn error(&self, message: &str) {
        if self.emits(LogLevel::Normal) {
            eprintln!("ERROR: {message}");
        }
    }

    /// Logs a warning. Suppressed only at Quiet.
    pub fn warn(&self, message: &str) {
        if self.emits(LogLevel::Normal) {
            eprintln!("WARN: {message}");
        }
    }

    /// Logs an informational message. Verbose only.
    pub fn info(&self, message: &str) {
        if self.emits(LogLevel::Verbose) {
            eprintln!("INFO: {message}");
        }
    }

    /// Logs a debug message. Verbose only.
    pub fn debug(&self, message: &str) {
        if self.emits(LogLevel::Verbose) {
            eprintln!("DEBUG: {message}");
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

/// Builds the logger from the CLI flags and the environment.
///
/// `--verbose` wins over `--quiet`, both win over `FLOTA_LOG_MODE`, and an
/// unset or unparseable variable falls back to Normal.
///
/// # Examples
///
/// ```
/// use flota::{init_logger, LogLevel};
///
/// let logger = init_logger(true, false);
/// assert_eq!(logger.level(), LogLevel::Verbose);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    if verbose {
        return Logger::new(LogLevel::Verbose);
    }
    if quiet {
        return Logger::new(LogLevel::Quiet);
    }

    let level = env::var("FLOTA_LOG_MODE")
        .ok()
        .and_then(|value| LogLevel::parse(&value).ok())
        .unwrap_or(LogLevel::Normal);
    Logger::new(level)
}
