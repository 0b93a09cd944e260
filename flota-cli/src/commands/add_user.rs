//! Add-user command implementation.
//!
//! Registers a user in the local database. Authentication itself lives
//! outside this tool; this only creates the identity record that `--user`
//! resolves against.

use clap::Args;

use flota::output::OutputFormat;
use flota::{Error, User};

use crate::error::CliError;
use crate::utils::{
    load_configuration, open_database, parse_output_format, print_rendered, GlobalOptions,
};

/// Register a user.
#[derive(Args)]
pub struct AddUserCommand {
    /// Unique username
    #[arg(long, value_name = "USERNAME")]
    pub username: String,

    /// Unique email address
    #[arg(long, value_name = "EMAIL")]
    pub email: String,

    /// Grant the administrator role
    #[arg(long)]
    pub admin: bool,

    /// Output format
    #[arg(long, value_parser = parse_output_format, default_value = "human")]
    pub format: OutputFormat,
}

impl AddUserCommand {
    /// Execute the add-user command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let user = User::new(self.username, self.email, self.admin)
            .map_err(|e| CliError::Library(Error::from(e)))?;
        let user = db.create_user(&user).map_err(CliError::from)?;

        print_rendered(self.format, &user)
    }
}
