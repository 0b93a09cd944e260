//! Read-flag operations on notifications.
//!
//! Notification content is immutable once emitted; these are the only
//! mutations the crate allows.

use crate::database::Database;
use crate::error::{Error, Result};
use crate::notification::{Notification, NotificationId};
use crate::user::Caller;

/// Marks a single notification as read.
///
/// Only the notification's owner may mark it; there is no administrative
/// override for someone else's inbox. Marking an already-read notification
/// is a no-op, not an error.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if the notification does not exist,
/// [`Error::Forbidden`] if the caller is not the owner, or a database
/// error if the update fails.
pub fn mark_read(db: &Database, caller: &Caller, id: NotificationId) -> Result<Notification> {
    let notification = db.get_notification(id)?.ok_or_else(|| Error::NotFound {
        resource: format!("notification {id}"),
    })?;

    if notification.user_id() != caller.user_id {
        return Err(Error::Forbidden {
            details: "only the owner may mark a notification as read".into(),
        });
    }

    db.mark_notification_read(id)?;
    db.get_notification(id)?.ok_or_else(|| Error::NotFound {
        resource: format!("notification {id}"),
    })
}

/// Marks all of the caller's unread notifications as read.
///
/// Returns the number of notifications that changed.
///
/// # Errors
///
/// Returns a database error if the update fails.
pub fn mark_all_read(db: &Database, caller: &Caller) -> Result<usize> {
    db.mark_all_notifications_read(caller.user_id)
}
