//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{
    AddItemCommand, AddUserCommand, BeginCommand, CancelCommand, CompleteCommand, ConfirmCommand,
    DeleteItemCommand, InitCommand, ListItemsCommand, ListUsersCommand, MarkReadCommand,
    NotificationsCommand, RequestCommand, ReservationsCommand, UpdateItemCommand,
};

/// Command-line tool for managing vehicle and machinery rentals.
#[derive(Parser)]
#[command(name = "flota")]
#[command(version, about = "Manage vehicle and machinery rentals", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "FLOTA_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds)
    #[arg(long, value_name = "SECONDS", global = true, env = "FLOTA_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u32>,

    /// Username to act as
    #[arg(long, value_name = "USERNAME", global = true, env = "FLOTA_USER")]
    pub user: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Initialize the flota data directory and database
    Init(InitCommand),

    /// Register a user
    AddUser(AddUserCommand),

    /// List registered users
    ListUsers(ListUsersCommand),

    /// Add an item to the rental catalog
    AddItem(AddItemCommand),

    /// Edit a catalog item
    UpdateItem(UpdateItemCommand),

    /// Remove a catalog item and its reservations
    DeleteItem(DeleteItemCommand),

    /// List the published catalog
    List(ListItemsCommand),

    /// Request a reservation for an item
    Request(RequestCommand),

    /// Confirm a pending reservation
    Confirm(ConfirmCommand),

    /// Start a rental
    Begin(BeginCommand),

    /// Complete an in-progress rental
    Complete(CompleteCommand),

    /// Cancel a reservation with a reason
    Cancel(CancelCommand),

    /// List reservations
    Reservations(ReservationsCommand),

    /// List the caller's notifications
    Notifications(NotificationsCommand),

    /// Mark notifications as read
    MarkRead(MarkReadCommand),
}
