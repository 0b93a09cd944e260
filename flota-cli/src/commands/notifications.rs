//! Notifications command implementation.

use clap::Args;

use flota::output::OutputFormat;

use crate::error::CliError;
use crate::utils::{
    load_configuration, open_database, parse_output_format, print_rendered, resolve_caller,
    GlobalOptions,
};

/// List the caller's notifications, newest first.
#[derive(Args)]
pub struct NotificationsCommand {
    /// Show only unread notifications
    #[arg(long)]
    pub unread: bool,

    /// Output format
    #[arg(long, value_parser = parse_output_format, default_value = "human")]
    pub format: OutputFormat,
}

impl NotificationsCommand {
    /// Execute the notifications command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;
        let caller = resolve_caller(&db, global)?;

        let mut notifications = db
            .list_notifications_for_user(caller.user_id)
            .map_err(CliError::from)?;
        if self.unread {
            notifications.retain(|n| !n.read());
        }

        print_rendered(self.format, &notifications)
    }
}
