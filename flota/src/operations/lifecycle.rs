//! Reservation lifecycle transitions and their notifications.
//!
//! Each transition loads the reservation, applies the state machine rule,
//! writes the updated row, and inserts the notification that tells the
//! owner what happened. The write and the notification share one IMMEDIATE
//! transaction: there is no path on which a status changes silently, and no
//! path on which a notification describes a change that was rolled back.

use chrono::{DateTime, Utc};
use rusqlite::TransactionBehavior;

use crate::database::{self, Database};
use crate::error::{Error, RejectionReason, Result};
use crate::item::Item;
use crate::notification::{Notification, NotificationKind};
use crate::reservation::{Reservation, ReservationId};
use crate::user::Caller;

use super::with_retry;

/// The result of a successful lifecycle transition.
#[derive(Debug, Clone, serde::Serialize)]
pub struct TransitionOutcome {
    /// The reservation after the transition.
    pub reservation: Reservation,
    /// The notification emitted to the reservation's owner.
    pub notification: Notification,
}

/// Confirms a pending reservation. Administrators only.
///
/// Emits a success notification to the owner.
///
/// # Errors
///
/// Returns [`Error::Forbidden`] for non-admin callers, [`Error::NotFound`]
/// if the reservation does not exist, and
/// [`RejectionReason::IllegalTransition`] unless the reservation is pending.
pub fn confirm(db: &mut Database, caller: &Caller, id: ReservationId) -> Result<TransitionOutcome> {
    caller.require_admin("confirm reservations")?;
    transition(
        db,
        id,
        |reservation, _| reservation.confirm(),
        |reservation, item| {
            Notification::new(
                reservation.user_id(),
                "Reservation confirmed",
                format!(
                    "Your reservation of {} from {} to {} has been confirmed.",
                    item.name(),
                    reservation.range().start().format("%d/%m/%Y"),
                    reservation.range().end().format("%d/%m/%Y"),
                ),
                NotificationKind::Success,
            )
        },
    )
}

/// Starts the rental, moving the reservation to `in_progress`.
/// Administrators only.
///
/// Stamps `started_at` and emits an info notification to the owner.
///
/// # Errors
///
/// Returns [`Error::Forbidden`] for non-admin callers, [`Error::NotFound`]
/// if the reservation does not exist, and
/// [`RejectionReason::IllegalTransition`] unless the reservation is pending
/// or confirmed.
pub fn begin(db: &mut Database, caller: &Caller, id: ReservationId) -> Result<TransitionOutcome> {
    caller.require_admin("start rentals")?;
    transition(
        db,
        id,
        Reservation::begin,
        |reservation, item| {
            let started = reservation.started_at().unwrap_or_else(Utc::now);
            Notification::new(
                reservation.user_id(),
                "Rental started",
                format!(
                    "Your rental of {} started on {} and is now in progress.",
                    item.name(),
                    started.format("%d/%m/%Y"),
                ),
                NotificationKind::Info,
            )
        },
    )
}

/// Completes an in-progress rental. Administrators only.
///
/// Stamps `completed_at` and emits a success notification to the owner.
///
/// # Errors
///
/// Returns [`Error::Forbidden`] for non-admin callers, [`Error::NotFound`]
/// if the reservation does not exist, and
/// [`RejectionReason::IllegalTransition`] unless the reservation is in
/// progress.
pub fn complete(
    db: &mut Database,
    caller: &Caller,
    id: ReservationId,
) -> Result<TransitionOutcome> {
    caller.require_admin("complete rentals")?;
    transition(
        db,
        id,
        Reservation::complete,
        |reservation, item| {
            let completed = reservation.completed_at().unwrap_or_else(Utc::now);
            Notification::new(
                reservation.user_id(),
                "Rental completed",
                format!(
                    "Your rental of {} was completed on {}. Thank you for your preference.",
                    item.name(),
                    completed.format("%d/%m/%Y"),
                ),
                NotificationKind::Success,
            )
        },
    )
}

/// Cancels a pending or confirmed reservation, recording the reason.
/// Administrators only.
///
/// The cancellation is stamped as administrative and emits a warning
/// notification to the owner.
///
/// # Errors
///
/// Returns [`Error::Forbidden`] for non-admin callers, [`Error::NotFound`]
/// if the reservation does not exist, and
/// [`RejectionReason::IllegalTransition`] if the rental is already underway
/// or finished.
pub fn cancel(
    db: &mut Database,
    caller: &Caller,
    id: ReservationId,
    reason: impl Into<String>,
) -> Result<TransitionOutcome> {
    caller.require_admin("cancel reservations")?;
    let reason = reason.into();

    transition(
        db,
        id,
        |reservation, now| reservation.cancel(reason.clone(), true, now),
        |reservation, item| {
            Notification::new(
                reservation.user_id(),
                "Reservation cancelled",
                format!(
                    "Your reservation of {} from {} to {} has been cancelled. Reason: {}",
                    item.name(),
                    reservation.range().start().format("%d/%m/%Y"),
                    reservation.range().end().format("%d/%m/%Y"),
                    reason,
                ),
                NotificationKind::Warning,
            )
        },
    )
}

/// Loads, transitions, persists, and notifies in one transaction.
fn transition<A, N>(
    db: &mut Database,
    id: ReservationId,
    apply: A,
    notify: N,
) -> Result<TransitionOutcome>
where
    A: Fn(&mut Reservation, DateTime<Utc>) -> std::result::Result<(), RejectionReason>,
    N: Fn(&Reservation, &Item) -> Notification,
{
    let lock_wait = db.busy_timeout_secs();
    with_retry(lock_wait, || {
        let tx = db
            .connection_mut()
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let mut reservation =
            database::get_reservation(&tx, id)?.ok_or_else(|| Error::NotFound {
                resource: format!("reservation {id}"),
            })?;
        let item = database::get_item(&tx, reservation.item_id())?.ok_or_else(|| {
            Error::NotFound {
                resource: format!("item {}", reservation.item_id()),
            }
        })?;

        apply(&mut reservation, Utc::now())?;
        database::update_reservation(&tx, &reservation)?;

        let notification = notify(&reservation, &item);
        let notification_id = database::insert_notification(&tx, &notification)?;
        tx.commit()?;

        log::info!(
            "reservation {id} moved to {} (notification {notification_id})",
            reservation.status()
        );
        Ok(TransitionOutcome {
            reservation,
            notification: Notification::from_parts(
                notification_id,
                notification.user_id(),
                notification.title().to_string(),
                notification.message().to_string(),
                notification.kind(),
                notification.read(),
                notification.created_at(),
            ),
        })
    })
}
