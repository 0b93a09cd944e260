//! Shared test utilities for database unit tests.
//!
//! This module provides helper functions used across multiple database test modules.

use chrono::{Duration, Utc};
use tempfile::tempdir;

use crate::database::operations::{datetime_to_unix_secs, unix_secs_to_datetime};
use crate::database::{Database, DatabaseConfig};
use crate::item::{Category, Item};
use crate::reservation::DateRange;
use crate::user::User;

/// Creates a temporary test database that will be cleaned up automatically.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
/// This is acceptable in test code where we want to fail fast.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let config = DatabaseConfig::new(path);
    let db = Database::open(config).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// Creates an unsaved test user with a fixed email derived from the username.
///
/// # Panics
///
/// Panics if the user cannot be created.
#[must_use]
pub fn test_user(username: &str, is_admin: bool) -> User {
    User::new(username, format!("{username}@example.com"), is_admin).unwrap()
}

/// Creates an unsaved test vehicle priced at 50 000 pesos per day.
///
/// # Panics
///
/// Panics if the item cannot be created.
#[must_use]
pub fn test_item(available: bool) -> Item {
    Item::builder("Toyota Hilux", "Hilux SR 4x4", 2022, Category::Vehicle, 50_000)
        .fuel_efficiency(11.5)
        .available(available)
        .build()
        .unwrap()
}

/// Creates a date range starting `offset_days` from now and spanning
/// `length_days` full days.
///
/// Timestamps are truncated to whole seconds to match the database's
/// Unix-epoch-seconds storage precision.
///
/// # Panics
///
/// Panics if the range is invalid (`length_days` must be at least 1).
#[must_use]
pub fn test_range(offset_days: i64, length_days: i64) -> DateRange {
    let start =
        unix_secs_to_datetime(datetime_to_unix_secs(Utc::now() + Duration::days(offset_days)))
            .unwrap();
    DateRange::new(start, start + Duration::days(length_days)).unwrap()
}
