//! The reservation request engine: validation, conflict detection, pricing.
//!
//! A request is checked in a fixed order so that callers always see the
//! same rejection for the same input: the item must be published, the start
//! date must not be in the past, the range must span at least one full day,
//! and no pending or confirmed reservation may overlap it. All checks and
//! the insert they guard run in one IMMEDIATE transaction; two concurrent
//! requests for the same dates serialize on the database lock and exactly
//! one of them wins.

use chrono::{DateTime, Utc};
use rusqlite::TransactionBehavior;

use crate::database::{self, Database};
use crate::error::{Error, RejectionReason, Result};
use crate::item::ItemId;
use crate::reservation::{DateRange, Reservation};
use crate::user::Caller;

use super::with_retry;

/// Options for a reservation request.
///
/// # Examples
///
/// ```
/// use flota::operations::RequestOptions;
///
/// let options = RequestOptions::default()
///     .with_project_location(Some("Mina Norte".to_string()));
/// assert!(options.project_location.is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Optional free-form site where the unit will be used. Mainly used for
    /// machinery bookings.
    pub project_location: Option<String>,
}

impl RequestOptions {
    /// Sets the project location.
    #[must_use]
    pub fn with_project_location(mut self, location: Option<String>) -> Self {
        self.project_location = location;
        self
    }
}

/// Requests a reservation for the caller on the given item and dates.
///
/// On success the reservation is persisted in `pending` status with its
/// total price fixed at `days * price_per_day` (whole days, truncating).
///
/// # Errors
///
/// The checks run in this order, each short-circuiting:
/// - [`Error::NotFound`] if the item does not exist
/// - [`RejectionReason::ItemUnavailable`] if the item is delisted,
///   whatever the dates look like
/// - [`RejectionReason::StartInPast`] if the start date is before today
/// - [`RejectionReason::InvalidRange`] if the range spans less than one
///   full day
/// - [`RejectionReason::DateConflict`] if a pending or confirmed
///   reservation overlaps the requested range
///
/// [`Error::LockTimeout`] is returned if the database lock could not be
/// obtained, and a database or validation error if persistence fails.
pub fn request_reservation(
    db: &mut Database,
    caller: &Caller,
    item_id: ItemId,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    options: &RequestOptions,
) -> Result<Reservation> {
    let lock_wait = db.busy_timeout_secs();
    with_retry(lock_wait, || {
        let tx = db
            .connection_mut()
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let item = database::get_item(&tx, item_id)?.ok_or_else(|| Error::NotFound {
            resource: format!("item {item_id}"),
        })?;

        if !item.available() {
            return Err(RejectionReason::ItemUnavailable.into());
        }

        // Date-only comparison: a booking starting later today is fine.
        if start.date_naive() < Utc::now().date_naive() {
            return Err(RejectionReason::StartInPast.into());
        }

        let range = DateRange::new(start, end)?;

        if database::conflict_exists(&tx, item_id, &range)? {
            return Err(RejectionReason::DateConflict.into());
        }

        let total_price = range.days() * item.price_per_day();
        let reservation = Reservation::builder(caller.user_id, item_id, range, total_price)
            .project_location(options.project_location.clone())
            .build()?;

        let id = database::insert_reservation(&tx, &reservation)?;
        let saved = database::get_reservation(&tx, id)?.ok_or_else(|| Error::NotFound {
            resource: format!("reservation {id}"),
        })?;
        tx.commit()?;

        log::info!(
            "reservation {id} created for user {} on item {item_id} ({} days, {total_price} pesos)",
            caller.user_id,
            range.days(),
        );
        Ok(saved)
    })
}
