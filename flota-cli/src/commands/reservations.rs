//! Reservations command implementation.

use clap::Args;

use flota::output::OutputFormat;

use crate::error::CliError;
use crate::utils::{
    load_configuration, open_database, parse_output_format, print_rendered, resolve_caller,
    GlobalOptions,
};

/// List reservations. Callers see their own; administrators can see all.
#[derive(Args)]
pub struct ReservationsCommand {
    /// List every user's reservations (administrators only)
    #[arg(long)]
    pub all: bool,

    /// Output format
    #[arg(long, value_parser = parse_output_format, default_value = "human")]
    pub format: OutputFormat,
}

impl ReservationsCommand {
    /// Execute the reservations command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;
        let caller = resolve_caller(&db, global)?;

        let reservations = if self.all {
            caller
                .require_admin("list all reservations")
                .map_err(CliError::from)?;
            db.list_all_reservations().map_err(CliError::from)?
        } else {
            db.list_reservations_for_user(caller.user_id)
                .map_err(CliError::from)?
        };

        print_rendered(self.format, &reservations)
    }
}
