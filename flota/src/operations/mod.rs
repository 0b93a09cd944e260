//! High-level rental operations.
//!
//! This module is the public surface of the crate: requesting a reservation
//! (conflict detection and pricing), driving the lifecycle state machine
//! (confirm, begin, complete, cancel), managing the catalog, and the
//! read-flag operations on notifications.
//!
//! Every operation that writes more than one row runs inside a single
//! IMMEDIATE transaction, so the conflict check and the insert it guards
//! cannot interleave with a competing writer, and a lifecycle transition
//! and the notification it emits land together or not at all.
//!
//! # Examples
//!
//! ```no_run
//! use chrono::{Duration, Utc};
//! use flota::operations::{request_reservation, RequestOptions};
//! use flota::{Caller, Database, DatabaseConfig, ItemId, UserId};
//!
//! let mut db = Database::open(DatabaseConfig::new("/tmp/flota.db")).unwrap();
//! let caller = Caller::user(UserId(1));
//! let start = Utc::now() + Duration::days(1);
//!
//! let reservation = request_reservation(
//!     &mut db,
//!     &caller,
//!     ItemId(1),
//!     start,
//!     start + Duration::days(3),
//!     &RequestOptions::default(),
//! )
//! .unwrap();
//! println!("total: {} pesos", reservation.total_price());
//! ```

pub mod catalog;
pub mod lifecycle;
pub mod notify;
pub mod request;

pub use catalog::{add_item, delete_item, list_available, update_item, ItemPatch, NewItem};
pub use lifecycle::{begin, cancel, complete, confirm, TransitionOutcome};
pub use notify::{mark_all_read, mark_read};
pub use request::{request_reservation, RequestOptions};

use crate::error::{Error, Result};

/// Runs an operation, retrying once if it fails with a transient store
/// error (the database lock was held by another writer).
///
/// A second transient failure is reported as [`Error::LockTimeout`] carrying
/// the configured wait, since by then the connection has already sat out its
/// busy timeout twice.
pub(crate) fn with_retry<T>(lock_wait_secs: u64, mut op: impl FnMut() -> Result<T>) -> Result<T> {
    match op() {
        Err(e) if e.is_transient() => {
            log::debug!("transient database error, retrying once: {e}");
            op().map_err(|e| {
                if e.is_transient() {
                    Error::LockTimeout {
                        seconds: lock_wait_secs,
                    }
                } else {
                    e
                }
            })
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RejectionReason;

    fn busy_error() -> Error {
        Error::Database(rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_BUSY),
            None,
        ))
    }

    #[test]
    fn test_with_retry_passes_through_success() {
        let result: Result<i32> = with_retry(5, || Ok(42));
        assert_eq!(result.unwrap(), 42);
    }

    #[test]
    fn test_with_retry_retries_transient_once() {
        let mut calls = 0;
        let result: Result<i32> = with_retry(5, || {
            calls += 1;
            if calls == 1 {
                Err(busy_error())
            } else {
                Ok(7)
            }
        });
        assert_eq!(result.unwrap(), 7);
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_with_retry_gives_up_after_second_failure() {
        let mut calls = 0;
        let result: Result<i32> = with_retry(5, || {
            calls += 1;
            Err(busy_error())
        });
        assert!(matches!(result, Err(Error::LockTimeout { seconds: 5 })));
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_with_retry_does_not_retry_rejections() {
        let mut calls = 0;
        let result: Result<i32> = with_retry(5, || {
            calls += 1;
            Err(RejectionReason::DateConflict.into())
        });
        assert!(result.unwrap_err().is_rejection());
        assert_eq!(calls, 1);
    }
}
