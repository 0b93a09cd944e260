//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `init`: Initialize the data directory and database
//! - `add_user` / `list_users`: User registry
//! - `add_item` / `update_item` / `delete_item` / `list_items`: Catalog
//! - `request`: Request a reservation
//! - `lifecycle`: Confirm, begin, complete, and cancel reservations
//! - `reservations`: List reservations
//! - `notifications` / `mark_read`: Notification inbox

pub mod add_item;
pub mod add_user;
pub mod delete_item;
pub mod init;
pub mod lifecycle;
pub mod list_items;
pub mod list_users;
pub mod mark_read;
pub mod notifications;
pub mod request;
pub mod reservations;
pub mod update_item;

pub use add_item::AddItemCommand;
pub use add_user::AddUserCommand;
pub use delete_item::DeleteItemCommand;
pub use init::InitCommand;
pub use lifecycle::{BeginCommand, CancelCommand, CompleteCommand, ConfirmCommand};
pub use list_items::ListItemsCommand;
pub use list_users::ListUsersCommand;
pub use mark_read::MarkReadCommand;
pub use notifications::NotificationsCommand;
pub use request::RequestCommand;
pub use reservations::ReservationsCommand;
pub use update_item::UpdateItemCommand;
