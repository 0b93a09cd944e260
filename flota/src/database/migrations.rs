//! Database schema management and migrations.
//!
//! This module handles database schema initialization, version checking,
//! and migrations.

use rusqlite::Connection;

use crate::error::{Error, Result};

use super::schema::{
    CREATE_ITEMS_TABLE, CREATE_METADATA_TABLE, CREATE_NOTIFICATIONS_TABLE,
    CREATE_NOTIFICATION_USER_INDEX, CREATE_RESERVATIONS_TABLE, CREATE_RESERVATION_ITEM_INDEX,
    CREATE_RESERVATION_STATUS_INDEX, CREATE_RESERVATION_USER_INDEX, CREATE_USERS_TABLE,
    CURRENT_SCHEMA_VERSION, INSERT_SCHEMA_VERSION, SELECT_SCHEMA_VERSION,
};

/// Initializes the database schema.
///
/// This function creates all tables, indices, and metadata for a fresh
/// database. It should only be called on a database that has not been
/// initialized yet.
///
/// # Errors
///
/// Returns an error if any SQL statement fails to execute.
///
/// # Examples
///
/// ```no_run
/// use rusqlite::Connection;
/// use flota::database::migrations::initialize_schema;
///
/// let conn = Connection::open_in_memory().unwrap();
/// initialize_schema(&conn).unwrap();
/// ```
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    conn.execute(CREATE_METADATA_TABLE, [])?;

    conn.execute(CREATE_USERS_TABLE, [])?;
    conn.execute(CREATE_ITEMS_TABLE, [])?;
    conn.execute(CREATE_RESERVATIONS_TABLE, [])?;
    conn.execute(CREATE_NOTIFICATIONS_TABLE, [])?;

    conn.execute(CREATE_RESERVATION_ITEM_INDEX, [])?;
    conn.execute(CREATE_RESERVATION_STATUS_INDEX, [])?;
    conn.execute(CREATE_RESERVATION_USER_INDEX, [])?;
    conn.execute(CREATE_NOTIFICATION_USER_INDEX, [])?;

    conn.execute(INSERT_SCHEMA_VERSION, [CURRENT_SCHEMA_VERSION])?;

    Ok(())
}

/// Gets the current schema version from the database.
///
/// # Errors
///
/// Returns an error if the query fails for reasons other than
/// "no rows returned" (which indicates version 0).
///
/// # Returns
///
/// - `Ok(0)` if the metadata table doesn't exist or has no version
/// - `Ok(version)` if a version is found
/// - `Err(_)` if a database error occurs
pub fn get_schema_version(conn: &Connection) -> Result<i32> {
    match conn.query_row(SELECT_SCHEMA_VERSION, [], |row| {
        let value: String = row.get(0)?;
        value
            .parse::<i32>()
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
    }) {
        Ok(version) => Ok(version),
        Err(rusqlite::Error::QueryReturnedNoRows) => {
            // Database exists but no schema - needs initialization
            Ok(0)
        }
        Err(e) => {
            // Check if it's a "no such table" error
            if let rusqlite::Error::SqliteFailure(ref sqlite_err, _) = e {
                if sqlite_err.code == rusqlite::ErrorCode::Unknown {
                    // Table doesn't exist yet
                    return Ok(0);
                }
            }
            Err(e.into())
        }
    }
}

/// Checks schema compatibility and initializes if needed.
///
/// This function:
/// 1. Checks the current schema version
/// 2. If version is 0, initializes the schema
/// 3. If version is older than current, returns an error (migrations needed)
/// 4. If version is newer than current, returns an error (client too old)
/// 5. If version matches, returns success
///
/// # Errors
///
/// Returns an error if:
/// - Schema version is incompatible (too old or too new)
/// - Schema initialization fails
/// - Database queries fail
pub fn check_schema_compatibility(conn: &Connection) -> Result<()> {
    let version = get_schema_version(conn)?;

    if version == 0 {
        // Fresh database, initialize it
        initialize_schema(conn)?;
    } else if version != CURRENT_SCHEMA_VERSION {
        return Err(Error::UnsupportedSchemaVersion {
            expected: CURRENT_SCHEMA_VERSION,
            found: version,
        });
    }

    Ok(())
}
