//! Mark-read command implementation.

use clap::Args;

use flota::output::OutputFormat;
use flota::{mark_all_read, mark_read, NotificationId};

use crate::error::CliError;
use crate::utils::{
    load_configuration, open_database, parse_output_format, print_rendered, resolve_caller,
    GlobalOptions,
};

/// Mark notifications as read.
#[derive(Args)]
pub struct MarkReadCommand {
    /// Notification id
    #[arg(value_name = "ID", required_unless_present = "all", conflicts_with = "all")]
    pub id: Option<i64>,

    /// Mark every unread notification of the caller as read
    #[arg(long)]
    pub all: bool,

    /// Output format
    #[arg(long, value_parser = parse_output_format, default_value = "human")]
    pub format: OutputFormat,
}

impl MarkReadCommand {
    /// Execute the mark-read command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;
        let caller = resolve_caller(&db, global)?;

        if self.all {
            let count = mark_all_read(&db, &caller).map_err(CliError::from)?;
            if !global.quiet {
                println!("{count} notifications marked read");
            }
            return Ok(());
        }

        let id = self.id.ok_or_else(|| {
            CliError::InvalidArguments("provide a notification id or --all".to_string())
        })?;
        let notification =
            mark_read(&db, &caller, NotificationId(id)).map_err(CliError::from)?;
        print_rendered(self.format, &notification)
    }
}
