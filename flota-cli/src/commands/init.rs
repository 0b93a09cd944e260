//! Init command implementation.
//!
//! This module implements the `init` command for explicitly initializing
//! the flota data directory and database.

use clap::Parser;
use std::path::PathBuf;

use flota::database::default_data_dir;
use flota::{Database, DatabaseConfig};

use crate::error::CliError;
use crate::utils::GlobalOptions;

/// Initialize flota data directory and database.
#[derive(Parser)]
#[command(about = "Initialize flota data directory and database")]
pub struct InitCommand {
    /// Data directory to initialize
    #[arg(long, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    /// Create a default configuration file
    #[arg(long)]
    with_config: bool,
}

impl InitCommand {
    /// Execute the init command.
    ///
    /// The --data-dir flag has a different meaning here: where to create,
    /// not where to find.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // Priority: command flag > global flag > default
        let data_dir = match self.data_dir.or_else(|| global.data_dir.clone()) {
            Some(dir) => dir,
            None => default_data_dir().map_err(|e| CliError::Config(e.to_string()))?,
        };

        let dir_created = !data_dir.exists();
        if dir_created {
            std::fs::create_dir_all(&data_dir)?;
        }

        let db_path = data_dir.join("flota.db");
        let db_created = !db_path.exists();
        Database::open(DatabaseConfig::new(&db_path)).map_err(CliError::from)?;

        println!("Initialized flota in: {}", data_dir.display());
        if dir_created {
            println!("  - Created data directory");
        }
        if db_created {
            println!("  - Created database");
        } else {
            println!("  - Database already exists");
        }

        if self.with_config {
            let config_path = data_dir.join("config.yaml");
            if config_path.exists() {
                println!("  - Configuration file already exists (not overwritten)");
            } else {
                let defaults = serde_yaml::to_string(&flota::Config::default())
                    .map_err(|e| CliError::Config(e.to_string()))?;
                std::fs::write(&config_path, defaults)?;
                println!("  - Created default configuration file");
            }
        }

        Ok(())
    }
}
