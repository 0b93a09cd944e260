//! Configuration system for flota.
//!
//! This module provides hierarchical configuration with support for:
//! - A YAML user configuration file
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of the merged result
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`FLOTA_*`)
//! 3. User config (`~/.flota/config.yaml`)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! Basic usage with defaults:
//!
//! ```no_run
//! use flota::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! println!("lock wait: {}s", config.effective_lock_wait_seconds());
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use flota::config::{Config, ConfigBuilder};
//!
//! let custom = Config {
//!     currency: Some("CLP".to_string()),
//!     lock_wait_seconds: Some(10),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.effective_lock_wait_seconds(), 10);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod schema;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::ConfigLoader;
pub use schema::Config;
