//! Lifecycle command implementations.
//!
//! The four reservation transitions share a shape: resolve the caller,
//! apply one library operation, print the updated reservation together
//! with the notification it produced.

use clap::Args;

use flota::output::OutputFormat;
use flota::{begin, cancel, complete, confirm, ReservationId};

use crate::error::CliError;
use crate::utils::{
    load_configuration, open_database, parse_output_format, print_rendered, resolve_caller,
    GlobalOptions,
};

/// Confirm a pending reservation. Administrators only.
#[derive(Args)]
pub struct ConfirmCommand {
    /// Reservation id
    #[arg(value_name = "ID")]
    pub id: i64,

    /// Output format
    #[arg(long, value_parser = parse_output_format, default_value = "human")]
    pub format: OutputFormat,
}

impl ConfirmCommand {
    /// Execute the confirm command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;
        let caller = resolve_caller(&db, global)?;

        let outcome =
            confirm(&mut db, &caller, ReservationId(self.id)).map_err(CliError::from)?;
        print_rendered(self.format, &outcome)
    }
}

/// Start a rental. Administrators only.
#[derive(Args)]
pub struct BeginCommand {
    /// Reservation id
    #[arg(value_name = "ID")]
    pub id: i64,

    /// Output format
    #[arg(long, value_parser = parse_output_format, default_value = "human")]
    pub format: OutputFormat,
}

impl BeginCommand {
    /// Execute the begin command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;
        let caller = resolve_caller(&db, global)?;

        let outcome = begin(&mut db, &caller, ReservationId(self.id)).map_err(CliError::from)?;
        print_rendered(self.format, &outcome)
    }
}

/// Complete an in-progress rental. Administrators only.
#[derive(Args)]
pub struct CompleteCommand {
    /// Reservation id
    #[arg(value_name = "ID")]
    pub id: i64,

    /// Output format
    #[arg(long, value_parser = parse_output_format, default_value = "human")]
    pub format: OutputFormat,
}

impl CompleteCommand {
    /// Execute the complete command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;
        let caller = resolve_caller(&db, global)?;

        let outcome =
            complete(&mut db, &caller, ReservationId(self.id)).map_err(CliError::from)?;
        print_rendered(self.format, &outcome)
    }
}

/// Cancel a pending or confirmed reservation. Administrators only.
#[derive(Args)]
pub struct CancelCommand {
    /// Reservation id
    #[arg(value_name = "ID")]
    pub id: i64,

    /// Reason shown to the reservation's owner
    #[arg(long, value_name = "TEXT")]
    pub reason: String,

    /// Output format
    #[arg(long, value_parser = parse_output_format, default_value = "human")]
    pub format: OutputFormat,
}

impl CancelCommand {
    /// Execute the cancel command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;
        let caller = resolve_caller(&db, global)?;

        let outcome = cancel(&mut db, &caller, ReservationId(self.id), self.reason)
            .map_err(CliError::from)?;
        print_rendered(self.format, &outcome)
    }
}
