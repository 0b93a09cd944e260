//! List-users command implementation.

use clap::Args;

use flota::output::OutputFormat;

use crate::error::CliError;
use crate::utils::{
    load_configuration, open_database, parse_output_format, print_rendered, resolve_caller,
    GlobalOptions,
};

/// List registered users. Administrators only.
#[derive(Args)]
pub struct ListUsersCommand {
    /// Output format
    #[arg(long, value_parser = parse_output_format, default_value = "human")]
    pub format: OutputFormat,
}

impl ListUsersCommand {
    /// Execute the list-users command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;
        let caller = resolve_caller(&db, global)?;
        caller.require_admin("list users").map_err(CliError::from)?;

        let users = db.list_users().map_err(CliError::from)?;
        print_rendered(self.format, &users)
    }
}
