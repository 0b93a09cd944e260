//! Main entry point for the flota CLI.
//!
//! This is the command-line interface for the flota rental management
//! system. It provides commands for managing the catalog, reservations,
//! and notifications:
//! - `add-item` / `update-item` / `delete-item` / `list`: Catalog management
//! - `request`: Request a reservation for an item and date range
//! - `confirm` / `begin` / `complete` / `cancel`: Reservation lifecycle
//! - `notifications` / `mark-read`: Notification inbox

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _logger = flota::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        busy_timeout: cli.busy_timeout,
        user: cli.user,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Init(cmd) => cmd.execute(&global),
        cli::Command::AddUser(cmd) => cmd.execute(&global),
        cli::Command::ListUsers(cmd) => cmd.execute(&global),
        cli::Command::AddItem(cmd) => cmd.execute(&global),
        cli::Command::UpdateItem(cmd) => cmd.execute(&global),
        cli::Command::DeleteItem(cmd) => cmd.execute(&global),
        cli::Command::List(cmd) => cmd.execute(&global),
        cli::Command::Request(cmd) => cmd.execute(&global),
        cli::Command::Confirm(cmd) => cmd.execute(&global),
        cli::Command::Begin(cmd) => cmd.execute(&global),
        cli::Command::Complete(cmd) => cmd.execute(&global),
        cli::Command::Cancel(cmd) => cmd.execute(&global),
        cli::Command::Reservations(cmd) => cmd.execute(&global),
        cli::Command::Notifications(cmd) => cmd.execute(&global),
        cli::Command::MarkRead(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
