//! Database CRUD operations for users, items, reservations, and notifications.
//!
//! Single-row reads and writes are exposed as methods on [`Database`].
//! The pieces that must compose inside a transaction (the overlap check,
//! reservation insert/update, and notification insert) are also exposed as
//! free functions taking a `&Connection`, so the operations layer can run
//! them under one IMMEDIATE transaction.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::Result;
use crate::item::{Category, Item, ItemId};
use crate::notification::{Notification, NotificationId, NotificationKind};
use crate::reservation::{
    Cancellation, DateRange, Reservation, ReservationId, ReservationStatus,
};
use crate::user::{User, UserId};

use super::connection::Database;

/// Converts a `DateTime<Utc>` to Unix epoch seconds for database storage.
pub(super) fn datetime_to_unix_secs(dt: DateTime<Utc>) -> i64 {
    dt.timestamp()
}

/// Converts Unix epoch seconds from the database to a `DateTime<Utc>`.
pub(super) fn unix_secs_to_datetime(secs: i64) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| rusqlite::Error::IntegralValueOutOfRange(0, secs))
}

fn conversion_err(e: impl std::error::Error + Send + Sync + 'static) -> rusqlite::Error {
    rusqlite::Error::ToSqlConversionFailure(Box::new(e))
}

/// Deserializes a user from a database row.
///
/// Expects row fields in this order: id, username, email, `password_hash`,
/// `is_admin`, `created_at`.
fn row_to_user(row: &rusqlite::Row<'_>) -> rusqlite::Result<User> {
    let id: i64 = row.get(0)?;
    let username: String = row.get(1)?;
    let email: String = row.get(2)?;
    let password_hash: Option<String> = row.get(3)?;
    let is_admin: bool = row.get(4)?;
    let created_at = unix_secs_to_datetime(row.get(5)?)?;

    Ok(User::from_parts(
        UserId(id),
        username,
        email,
        password_hash,
        is_admin,
        created_at,
    ))
}

/// Deserializes an item from a database row.
///
/// Expects row fields in this order: id, name, model, year,
/// `fuel_efficiency`, `price_per_day`, category, description, `image_url`,
/// available, `created_at`.
fn row_to_item(row: &rusqlite::Row<'_>) -> rusqlite::Result<Item> {
    let id: i64 = row.get(0)?;
    let name: String = row.get(1)?;
    let model: String = row.get(2)?;
    let year: i32 = row.get(3)?;
    let fuel_efficiency: f64 = row.get(4)?;
    let price_per_day: i64 = row.get(5)?;
    let category: String = row.get(6)?;
    let description: Option<String> = row.get(7)?;
    let image_url: Option<String> = row.get(8)?;
    let available: bool = row.get(9)?;
    let created_at = unix_secs_to_datetime(row.get(10)?)?;

    let category =
        Category::parse(&category).map_err(|e| rusqlite::Error::ToSqlConversionFailure(e.into()))?;

    Item::builder(name, model, year, category, price_per_day)
        .id(ItemId(id))
        .fuel_efficiency(fuel_efficiency)
        .description(description)
        .image_url(image_url)
        .available(available)
        .created_at(created_at)
        .build()
        .map_err(conversion_err)
}

/// Deserializes a reservation from a database row.
///
/// Expects row fields in this order: id, `user_id`, `item_id`, `start_date`,
/// `end_date`, `total_price`, status, `project_location`,
/// `cancellation_reason`, `cancelled_by_admin`, `cancelled_at`, `started_at`,
/// `completed_at`, `created_at`.
fn row_to_reservation(row: &rusqlite::Row<'_>) -> rusqlite::Result<Reservation> {
    let id: i64 = row.get(0)?;
    let user_id: i64 = row.get(1)?;
    let item_id: i64 = row.get(2)?;
    let start = unix_secs_to_datetime(row.get(3)?)?;
    let end = unix_secs_to_datetime(row.get(4)?)?;
    let total_price: i64 = row.get(5)?;
    let status: String = row.get(6)?;
    let project_location: Option<String> = row.get(7)?;
    let cancellation_reason: Option<String> = row.get(8)?;
    let cancelled_by_admin: bool = row.get(9)?;
    let cancelled_at: Option<i64> = row.get(10)?;
    let started_at: Option<i64> = row.get(11)?;
    let completed_at: Option<i64> = row.get(12)?;
    let created_at = unix_secs_to_datetime(row.get(13)?)?;

    let range = DateRange::new(start, end).map_err(conversion_err)?;
    let status = ReservationStatus::parse(&status)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(e.into()))?;

    let cancellation = match (cancellation_reason, cancelled_at) {
        (Some(reason), Some(at)) => Some(Cancellation {
            reason,
            by_admin: cancelled_by_admin,
            cancelled_at: unix_secs_to_datetime(at)?,
        }),
        _ => None,
    };

    let started_at = started_at.map(unix_secs_to_datetime).transpose()?;
    let completed_at = completed_at.map(unix_secs_to_datetime).transpose()?;

    Reservation::builder(UserId(user_id), ItemId(item_id), range, total_price)
        .id(ReservationId(id))
        .status(status)
        .project_location(project_location)
        .cancellation(cancellation)
        .started_at(started_at)
        .completed_at(completed_at)
        .created_at(created_at)
        .build()
        .map_err(conversion_err)
}

/// Deserializes a notification from a database row.
fn row_to_notification(row: &rusqlite::Row<'_>) -> rusqlite::Result<Notification> {
    let id: i64 = row.get(0)?;
    let user_id: i64 = row.get(1)?;
    let title: String = row.get(2)?;
    let message: String = row.get(3)?;
    let kind: String = row.get(4)?;
    let read: bool = row.get(5)?;
    let created_at = unix_secs_to_datetime(row.get(6)?)?;

    let kind = NotificationKind::parse(&kind)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(e.into()))?;

    Ok(Notification::from_parts(
        NotificationId(id),
        UserId(user_id),
        title,
        message,
        kind,
        read,
        created_at,
    ))
}

// SQL statements for CRUD operations

const INSERT_USER: &str = r"
    INSERT INTO users (username, email, password_hash, is_admin, created_at)
    VALUES (?, ?, ?, ?, ?)
";

const SELECT_USER_COLUMNS: &str = r"
    SELECT id, username, email, password_hash, is_admin, created_at FROM users
";

const INSERT_ITEM: &str = r"
    INSERT INTO items
    (name, model, year, fuel_efficiency, price_per_day, category,
     description, image_url, available, created_at)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
";

const UPDATE_ITEM: &str = r"
    UPDATE items
    SET name = ?, model = ?, year = ?, fuel_efficiency = ?, price_per_day = ?,
        category = ?, description = ?, image_url = ?, available = ?
    WHERE id = ?
";

const SELECT_ITEM_COLUMNS: &str = r"
    SELECT id, name, model, year, fuel_efficiency, price_per_day, category,
           description, image_url, available, created_at
    FROM items
";

const INSERT_RESERVATION: &str = r"
    INSERT INTO reservations
    (user_id, item_id, start_date, end_date, total_price, status,
     project_location, cancellation_reason, cancelled_by_admin, cancelled_at,
     started_at, completed_at, created_at)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
";

const UPDATE_RESERVATION: &str = r"
    UPDATE reservations
    SET status = ?, cancellation_reason = ?, cancelled_by_admin = ?,
        cancelled_at = ?, started_at = ?, completed_at = ?
    WHERE id = ?
";

const SELECT_RESERVATION_COLUMNS: &str = r"
    SELECT id, user_id, item_id, start_date, end_date, total_price, status,
           project_location, cancellation_reason, cancelled_by_admin,
           cancelled_at, started_at, completed_at, created_at
    FROM reservations
";

/// Inclusive-interval overlap test against date-blocking reservations.
///
/// A reservation blocks the item's dates while its status is pending or
/// confirmed; the closed-interval comparison means back-to-back bookings
/// conflict.
const COUNT_CONFLICTS: &str = r"
    SELECT COUNT(*) FROM reservations
    WHERE item_id = ?
      AND status IN ('pending', 'confirmed')
      AND start_date <= ?
      AND end_date >= ?
";

const INSERT_NOTIFICATION: &str = r"
    INSERT INTO notifications (user_id, title, message, kind, read, created_at)
    VALUES (?, ?, ?, ?, ?, ?)
";

const SELECT_NOTIFICATION_COLUMNS: &str = r"
    SELECT id, user_id, title, message, kind, read, created_at FROM notifications
";

const MARK_NOTIFICATION_READ: &str = "UPDATE notifications SET read = 1 WHERE id = ?";

const MARK_ALL_READ: &str = "UPDATE notifications SET read = 1 WHERE user_id = ? AND read = 0";

// Connection-level functions, composable inside a transaction.

/// Looks up a reservation by id on the given connection.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_reservation(
    conn: &Connection,
    id: ReservationId,
) -> Result<Option<Reservation>> {
    let sql = format!("{SELECT_RESERVATION_COLUMNS} WHERE id = ?");
    conn.query_row(&sql, [id.0], row_to_reservation)
        .optional()
        .map_err(Into::into)
}

/// Looks up an item by id on the given connection.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_item(conn: &Connection, id: ItemId) -> Result<Option<Item>> {
    let sql = format!("{SELECT_ITEM_COLUMNS} WHERE id = ?");
    conn.query_row(&sql, [id.0], row_to_item)
        .optional()
        .map_err(Into::into)
}

/// Checks whether any pending or confirmed reservation for the item
/// overlaps the given range (inclusive intervals).
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn conflict_exists(conn: &Connection, item_id: ItemId, range: &DateRange) -> Result<bool> {
    let count: i64 = conn.query_row(
        COUNT_CONFLICTS,
        params![
            item_id.0,
            datetime_to_unix_secs(range.end()),
            datetime_to_unix_secs(range.start()),
        ],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

/// Inserts a reservation and returns its new row id.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_reservation(conn: &Connection, reservation: &Reservation) -> Result<ReservationId> {
    conn.execute(
        INSERT_RESERVATION,
        params![
            reservation.user_id().0,
            reservation.item_id().0,
            datetime_to_unix_secs(reservation.range().start()),
            datetime_to_unix_secs(reservation.range().end()),
            reservation.total_price(),
            reservation.status().as_str(),
            reservation.project_location(),
            reservation.cancellation().map(|c| c.reason.as_str()),
            reservation.cancellation().is_some_and(|c| c.by_admin),
            reservation
                .cancellation()
                .map(|c| datetime_to_unix_secs(c.cancelled_at)),
            reservation.started_at().map(datetime_to_unix_secs),
            reservation.completed_at().map(datetime_to_unix_secs),
            datetime_to_unix_secs(reservation.created_at()),
        ],
    )?;
    Ok(ReservationId(conn.last_insert_rowid()))
}

/// Writes back a reservation's mutable lifecycle fields by id.
///
/// The date range, price, owner, and item reference are immutable once
/// persisted and are deliberately not part of this statement.
///
/// # Errors
///
/// Returns `NotFound` if no row has the reservation's id, or a database
/// error if the update fails.
pub fn update_reservation(conn: &Connection, reservation: &Reservation) -> Result<()> {
    let id = reservation.id().ok_or_else(|| crate::Error::NotFound {
        resource: "unsaved reservation".to_string(),
    })?;
    let rows = conn.execute(
        UPDATE_RESERVATION,
        params![
            reservation.status().as_str(),
            reservation.cancellation().map(|c| c.reason.as_str()),
            reservation.cancellation().is_some_and(|c| c.by_admin),
            reservation
                .cancellation()
                .map(|c| datetime_to_unix_secs(c.cancelled_at)),
            reservation.started_at().map(datetime_to_unix_secs),
            reservation.completed_at().map(datetime_to_unix_secs),
            id.0,
        ],
    )?;
    if rows == 0 {
        return Err(crate::Error::NotFound {
            resource: format!("reservation {id}"),
        });
    }
    Ok(())
}

/// Inserts a notification and returns its new row id.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_notification(
    conn: &Connection,
    notification: &Notification,
) -> Result<NotificationId> {
    conn.execute(
        INSERT_NOTIFICATION,
        params![
            notification.user_id().0,
            notification.title(),
            notification.message(),
            notification.kind().as_str(),
            notification.read(),
            datetime_to_unix_secs(notification.created_at()),
        ],
    )?;
    Ok(NotificationId(conn.last_insert_rowid()))
}

impl Database {
    /// Creates a user and returns the persisted record with its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails, including uniqueness
    /// violations on username or email.
    pub fn create_user(&self, user: &User) -> Result<User> {
        self.conn.execute(
            INSERT_USER,
            params![
                user.username(),
                user.email(),
                user.password_hash(),
                user.is_admin(),
                datetime_to_unix_secs(user.created_at()),
            ],
        )?;
        let id = UserId(self.conn.last_insert_rowid());
        Ok(User::from_parts(
            id,
            user.username().to_string(),
            user.email().to_string(),
            user.password_hash().map(ToString::to_string),
            user.is_admin(),
            user.created_at(),
        ))
    }

    /// Looks up a user by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_user(&self, id: UserId) -> Result<Option<User>> {
        let sql = format!("{SELECT_USER_COLUMNS} WHERE id = ?");
        self.conn
            .query_row(&sql, [id.0], row_to_user)
            .optional()
            .map_err(Into::into)
    }

    /// Looks up a user by unique username.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let sql = format!("{SELECT_USER_COLUMNS} WHERE username = ?");
        self.conn
            .query_row(&sql, [username], row_to_user)
            .optional()
            .map_err(Into::into)
    }

    /// Lists all users ordered by username.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_users(&self) -> Result<Vec<User>> {
        let sql = format!("{SELECT_USER_COLUMNS} ORDER BY username");
        let mut stmt = self.conn.prepare(&sql)?;
        let users = stmt
            .query_map([], row_to_user)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(users)
    }

    /// Creates an item and returns the persisted record with its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_item(&self, item: &Item) -> Result<Item> {
        self.conn.execute(
            INSERT_ITEM,
            params![
                item.name(),
                item.model(),
                item.year(),
                item.fuel_efficiency(),
                item.price_per_day(),
                item.category().as_str(),
                item.description(),
                item.image_url(),
                item.available(),
                datetime_to_unix_secs(item.created_at()),
            ],
        )?;
        let id = ItemId(self.conn.last_insert_rowid());
        self.get_item(id)?.ok_or_else(|| crate::Error::NotFound {
            resource: format!("item {id}"),
        })
    }

    /// Looks up an item by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_item(&self, id: ItemId) -> Result<Option<Item>> {
        get_item(&self.conn, id)
    }

    /// Writes back all editable item fields by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no row has the item's id, or a database error
    /// if the update fails.
    pub fn update_item(&self, item: &Item) -> Result<()> {
        let id = item.id().ok_or_else(|| crate::Error::NotFound {
            resource: "unsaved item".to_string(),
        })?;
        let rows = self.conn.execute(
            UPDATE_ITEM,
            params![
                item.name(),
                item.model(),
                item.year(),
                item.fuel_efficiency(),
                item.price_per_day(),
                item.category().as_str(),
                item.description(),
                item.image_url(),
                item.available(),
                id.0,
            ],
        )?;
        if rows == 0 {
            return Err(crate::Error::NotFound {
                resource: format!("item {id}"),
            });
        }
        Ok(())
    }

    /// Deletes an item. Its reservations are removed by the cascade.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no row has the given id, or a database error
    /// if the delete fails.
    pub fn delete_item(&self, id: ItemId) -> Result<()> {
        let rows = self.conn.execute("DELETE FROM items WHERE id = ?", [id.0])?;
        if rows == 0 {
            return Err(crate::Error::NotFound {
                resource: format!("item {id}"),
            });
        }
        Ok(())
    }

    /// Lists catalog items, newest first.
    ///
    /// `only_available` restricts to published items; `category` filters by
    /// catalog category.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_items(
        &self,
        category: Option<Category>,
        only_available: bool,
    ) -> Result<Vec<Item>> {
        let mut sql = format!("{SELECT_ITEM_COLUMNS} WHERE 1=1");
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();
        if only_available {
            sql.push_str(" AND available = 1");
        }
        if let Some(category) = category {
            sql.push_str(" AND category = ?");
            params.push(Box::new(category.as_str().to_string()));
        }
        sql.push_str(" ORDER BY created_at DESC, id DESC");

        let mut stmt = self.conn.prepare(&sql)?;
        let items = stmt
            .query_map(rusqlite::params_from_iter(params.iter()), row_to_item)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(items)
    }

    /// Looks up a reservation by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_reservation(&self, id: ReservationId) -> Result<Option<Reservation>> {
        get_reservation(&self.conn, id)
    }

    /// Lists a user's reservations, most recently created first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_reservations_for_user(&self, user_id: UserId) -> Result<Vec<Reservation>> {
        let sql = format!(
            "{SELECT_RESERVATION_COLUMNS} WHERE user_id = ? ORDER BY created_at DESC, id DESC"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let reservations = stmt
            .query_map([user_id.0], row_to_reservation)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(reservations)
    }

    /// Lists all reservations, most recently created first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_all_reservations(&self) -> Result<Vec<Reservation>> {
        let sql = format!("{SELECT_RESERVATION_COLUMNS} ORDER BY created_at DESC, id DESC");
        let mut stmt = self.conn.prepare(&sql)?;
        let reservations = stmt
            .query_map([], row_to_reservation)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(reservations)
    }

    /// Looks up a notification by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_notification(&self, id: NotificationId) -> Result<Option<Notification>> {
        let sql = format!("{SELECT_NOTIFICATION_COLUMNS} WHERE id = ?");
        self.conn
            .query_row(&sql, [id.0], row_to_notification)
            .optional()
            .map_err(Into::into)
    }

    /// Lists a user's notifications, most recently created first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_notifications_for_user(&self, user_id: UserId) -> Result<Vec<Notification>> {
        let sql = format!(
            "{SELECT_NOTIFICATION_COLUMNS} WHERE user_id = ? ORDER BY created_at DESC, id DESC"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let notifications = stmt
            .query_map([user_id.0], row_to_notification)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(notifications)
    }

    /// Sets the read flag on a single notification.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn mark_notification_read(&self, id: NotificationId) -> Result<()> {
        self.conn.execute(MARK_NOTIFICATION_READ, [id.0])?;
        Ok(())
    }

    /// Marks all of a user's unread notifications as read.
    ///
    /// Returns the number of notifications that changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn mark_all_notifications_read(&self, user_id: UserId) -> Result<usize> {
        let rows = self.conn.execute(MARK_ALL_READ, [user_id.0])?;
        Ok(rows)
    }
}
