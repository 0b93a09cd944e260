//! Delete-item command implementation.

use clap::Args;

use flota::{delete_item, ItemId};

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, resolve_caller, GlobalOptions};

/// Remove a catalog item and its reservations. Administrators only.
#[derive(Args)]
pub struct DeleteItemCommand {
    /// Item id to remove
    #[arg(value_name = "ID")]
    pub id: i64,
}

impl DeleteItemCommand {
    /// Execute the delete-item command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;
        let caller = resolve_caller(&db, global)?;

        delete_item(&db, &caller, ItemId(self.id)).map_err(CliError::from)?;

        if !global.quiet {
            println!("Item {} removed", self.id);
        }
        Ok(())
    }
}
