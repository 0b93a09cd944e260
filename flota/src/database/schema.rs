//! Database schema definitions and SQL constants.
//!
//! This module contains all SQL table definitions, indices, and constants
//! related to the database schema for the flota rental system.

/// Current schema version for the database.
///
/// This version is stored in the metadata table and is used to ensure
/// compatibility between the database and the application.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// SQL statement to create the metadata table.
///
/// The metadata table stores key-value pairs for database configuration
/// and versioning information.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the users table.
///
/// The `password_hash` column is an opaque string owned by the external
/// authentication layer; this crate never inspects it.
pub const CREATE_USERS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT NOT NULL UNIQUE,
        email TEXT NOT NULL UNIQUE,
        password_hash TEXT,
        is_admin INTEGER NOT NULL DEFAULT 0,
        created_at INTEGER NOT NULL
    )";

/// SQL statement to create the items table.
///
/// `available` is the manual publish flag; it is independent of
/// reservation state.
pub const CREATE_ITEMS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS items (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        model TEXT NOT NULL,
        year INTEGER NOT NULL,
        fuel_efficiency REAL NOT NULL,
        price_per_day INTEGER NOT NULL,
        category TEXT NOT NULL,
        description TEXT,
        image_url TEXT,
        available INTEGER NOT NULL DEFAULT 1,
        created_at INTEGER NOT NULL
    )";

/// SQL statement to create the reservations table.
///
/// Reservations are owned by their item: deleting an item cascades to its
/// reservations. Timestamps are Unix epoch seconds.
pub const CREATE_RESERVATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS reservations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL REFERENCES users(id),
        item_id INTEGER NOT NULL REFERENCES items(id) ON DELETE CASCADE,
        start_date INTEGER NOT NULL,
        end_date INTEGER NOT NULL,
        total_price INTEGER NOT NULL,
        status TEXT NOT NULL DEFAULT 'pending',
        project_location TEXT,
        cancellation_reason TEXT,
        cancelled_by_admin INTEGER NOT NULL DEFAULT 0,
        cancelled_at INTEGER,
        started_at INTEGER,
        completed_at INTEGER,
        created_at INTEGER NOT NULL
    )";

/// SQL statement to create the notifications table.
pub const CREATE_NOTIFICATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS notifications (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL REFERENCES users(id),
        title TEXT NOT NULL,
        message TEXT NOT NULL,
        kind TEXT NOT NULL DEFAULT 'info',
        read INTEGER NOT NULL DEFAULT 0,
        created_at INTEGER NOT NULL
    )";

/// SQL statement to create an index on `reservations.item_id`.
///
/// This index speeds up the overlap query at the heart of the conflict
/// check.
pub const CREATE_RESERVATION_ITEM_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_item ON reservations(item_id)";

/// SQL statement to create an index on `reservations.status`.
pub const CREATE_RESERVATION_STATUS_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_status ON reservations(status)";

/// SQL statement to create an index on `reservations.user_id`.
///
/// This index speeds up per-user reservation listings.
pub const CREATE_RESERVATION_USER_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_user ON reservations(user_id)";

/// SQL statement to create an index on `notifications.user_id`.
pub const CREATE_NOTIFICATION_USER_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_notifications_user ON notifications(user_id)";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";
