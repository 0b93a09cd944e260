//! Request command implementation.
//!
//! Requests a reservation for an item over a date range. The engine
//! rejects unavailable items, past start dates, sub-day ranges, and date
//! conflicts, each with its own message; a successful request prints the
//! pending reservation with its fixed total price.

use clap::Args;

use flota::output::OutputFormat;
use flota::{request_reservation, ItemId, RequestOptions};

use crate::error::CliError;
use crate::utils::{
    load_configuration, open_database, parse_date, parse_output_format, print_rendered,
    resolve_caller, GlobalOptions,
};

/// Request a reservation for an item.
#[derive(Args)]
pub struct RequestCommand {
    /// Item id to reserve
    #[arg(long, value_name = "ID")]
    pub item: i64,

    /// First rental day (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub start: String,

    /// Last rental day (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub end: String,

    /// Project location for machinery bookings
    #[arg(long, value_name = "LOCATION")]
    pub location: Option<String>,

    /// Output format
    #[arg(long, value_parser = parse_output_format, default_value = "human")]
    pub format: OutputFormat,
}

impl RequestCommand {
    /// Execute the request command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;
        let caller = resolve_caller(&db, global)?;

        let start = parse_date(&self.start)?;
        let end = parse_date(&self.end)?;

        let options = RequestOptions::default().with_project_location(self.location);
        let reservation =
            request_reservation(&mut db, &caller, ItemId(self.item), start, end, &options)
                .map_err(CliError::from)?;

        print_rendered(self.format, &reservation)
    }
}
