//! Database layer for persistent storage of the rental catalog,
//! reservations, and notifications.
//!
//! This module provides a `SQLite`-based storage layer, including connection
//! management, schema versioning, and CRUD operations. The conflict check
//! and the reservation/notification writes are also available as free
//! functions over a raw connection so the operations layer can compose them
//! inside a single transaction.
//!
//! # Examples
//!
//! ```no_run
//! use flota::database::{Database, DatabaseConfig};
//! use flota::{Category, Item};
//!
//! // Open a database
//! let config = DatabaseConfig::new("/tmp/flota.db");
//! let db = Database::open(config).unwrap();
//!
//! // Add an item to the catalog
//! let item = Item::builder("Toyota Hilux", "Hilux SR 4x4", 2022, Category::Vehicle, 50_000)
//!     .fuel_efficiency(11.5)
//!     .build()
//!     .unwrap();
//! let item = db.create_item(&item).unwrap();
//!
//! // List the published catalog
//! for item in db.list_items(None, true).unwrap() {
//!     println!("{} ({})", item.name(), item.model());
//! }
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod schema;
#[cfg(test)]
pub(crate) mod test_util;

// Re-export public API
pub use config::{default_data_dir, resolve_database_path, DatabaseConfig};
pub use connection::Database;
pub use operations::{
    conflict_exists, get_item, get_reservation, insert_notification, insert_reservation,
    update_reservation,
};

// Re-export migration functions for advanced use cases
pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
