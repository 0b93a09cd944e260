//! List command implementation.
//!
//! Lists the published catalog. `--all` also shows delisted items, which
//! is mainly useful to administrators reviewing the fleet.

use clap::Args;

use flota::output::OutputFormat;
use flota::{list_available, Category};

use crate::error::CliError;
use crate::utils::{
    load_configuration, open_database, parse_category, parse_output_format, print_rendered,
    GlobalOptions,
};

/// List the published catalog.
#[derive(Args)]
pub struct ListItemsCommand {
    /// Filter by category (vehicle or machinery)
    #[arg(long, value_parser = parse_category)]
    pub category: Option<Category>,

    /// Include delisted items
    #[arg(long)]
    pub all: bool,

    /// Output format
    #[arg(long, value_parser = parse_output_format, default_value = "human")]
    pub format: OutputFormat,
}

impl ListItemsCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let items = if self.all {
            db.list_items(self.category, false).map_err(CliError::from)?
        } else {
            list_available(&db, self.category).map_err(CliError::from)?
        };

        print_rendered(self.format, &items)
    }
}
