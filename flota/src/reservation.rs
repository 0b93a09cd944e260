//! Reservation types and the rental lifecycle state machine.
//!
//! This module provides the [`DateRange`] value type (overlap testing and
//! whole-day counting), the [`ReservationStatus`] enumeration with its legal
//! transitions, and the [`Reservation`] record with a validating builder.
//!
//! The lifecycle is:
//!
//! ```text
//! pending -> confirmed -> in_progress -> completed
//!    \           |
//!     +----------+--> cancelled
//! ```
//!
//! `in_progress` and `completed` reservations can no longer be cancelled.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::RejectionReason;
use crate::item::ItemId;
use crate::user::UserId;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

/// A unique identifier for a reservation (database row id).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReservationId(pub i64);

impl std::fmt::Display for ReservationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An inclusive rental period with a validated minimum length.
///
/// Two ranges conflict when their closed intervals touch or overlap; a
/// booking that ends exactly when another begins is treated as a conflict.
/// This is the conservative exclusivity policy of the system, not a bug.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use flota::DateRange;
///
/// let start = Utc.with_ymd_and_hms(2030, 6, 1, 0, 0, 0).unwrap();
/// let end = Utc.with_ymd_and_hms(2030, 6, 4, 0, 0, 0).unwrap();
/// let range = DateRange::new(start, end).unwrap();
/// assert_eq!(range.days(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DateRange {
    /// Creates a new date range.
    ///
    /// # Errors
    ///
    /// Returns [`RejectionReason::InvalidRange`] unless the end is at least
    /// one full day after the start. Sub-24h ranges are rejected outright so
    /// that the whole-day price (`days * price_per_day`) can never be zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{Duration, Utc};
    /// use flota::DateRange;
    ///
    /// let start = Utc::now();
    /// assert!(DateRange::new(start, start + Duration::days(2)).is_ok());
    /// assert!(DateRange::new(start, start).is_err());
    /// assert!(DateRange::new(start, start + Duration::hours(6)).is_err());
    /// ```
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, RejectionReason> {
        if (end - start).num_days() < 1 {
            return Err(RejectionReason::InvalidRange);
        }
        Ok(Self { start, end })
    }

    /// Returns the start of the range.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Returns the end of the range.
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Returns the number of whole days in the range, truncating.
    ///
    /// Guaranteed to be at least 1 by construction.
    #[must_use]
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Inclusive-interval overlap test.
    ///
    /// Returns true when `self.start <= other.end && self.end >= other.start`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{Duration, Utc};
    /// use flota::DateRange;
    ///
    /// let day = Duration::days(1);
    /// let base = Utc::now();
    /// let first = DateRange::new(base, base + day * 3).unwrap();
    /// let back_to_back = DateRange::new(base + day * 3, base + day * 5).unwrap();
    /// // Touching endpoints conflict under the inclusive policy.
    /// assert!(first.overlaps(&back_to_back));
    /// ```
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && self.end >= other.start
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} .. {}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

/// The lifecycle status of a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    /// Awaiting administrator confirmation. Initial state.
    Pending,
    /// Confirmed by an administrator.
    Confirmed,
    /// The rental is underway.
    InProgress,
    /// The rental finished normally. Terminal.
    Completed,
    /// Cancelled by an administrator. Terminal.
    Cancelled,
}

impl ReservationStatus {
    /// Returns the status as its stored string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parses a status from its stored string form.
    ///
    /// # Errors
    ///
    /// Returns an error message if the string is not a known status.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("invalid reservation status: {s}")),
        }
    }

    /// Whether this status blocks the item's dates for other bookings.
    ///
    /// Only pending and confirmed reservations participate in the conflict
    /// check; in-progress and terminal reservations do not.
    #[must_use]
    pub const fn blocks_dates(self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }

    /// Whether this status is terminal.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Cancellation metadata recorded when an administrator cancels a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cancellation {
    /// The administrator's stated reason.
    pub reason: String,
    /// Whether the cancellation was performed by an administrator.
    pub by_admin: bool,
    /// When the cancellation happened.
    pub cancelled_at: DateTime<Utc>,
}

/// A user's claim on an item for a date range.
///
/// Carries the derived total price (immutable once set) and the lifecycle
/// status. Construct via [`Reservation::builder`].
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Utc};
/// use flota::{DateRange, ItemId, Reservation, UserId};
///
/// let range = DateRange::new(Utc::now(), Utc::now() + Duration::days(3)).unwrap();
/// let reservation = Reservation::builder(UserId(1), ItemId(1), range, 150_000)
///     .build()
///     .unwrap();
/// assert_eq!(reservation.total_price(), 150_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    id: Option<ReservationId>,
    user_id: UserId,
    item_id: ItemId,
    range: DateRange,
    total_price: i64,
    status: ReservationStatus,
    project_location: Option<String>,
    cancellation: Option<Cancellation>,
    started_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl Reservation {
    /// Creates a new reservation builder.
    #[must_use]
    pub fn builder(
        user_id: UserId,
        item_id: ItemId,
        range: DateRange,
        total_price: i64,
    ) -> ReservationBuilder {
        ReservationBuilder {
            id: None,
            user_id,
            item_id,
            range,
            total_price,
            status: ReservationStatus::Pending,
            project_location: None,
            cancellation: None,
            started_at: None,
            completed_at: None,
            created_at: None,
        }
    }

    /// Returns the database id, if the reservation has been persisted.
    #[must_use]
    pub const fn id(&self) -> Option<ReservationId> {
        self.id
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the reserved item.
    #[must_use]
    pub const fn item_id(&self) -> ItemId {
        self.item_id
    }

    /// Returns the rental period.
    #[must_use]
    pub const fn range(&self) -> DateRange {
        self.range
    }

    /// Returns the derived total price in whole pesos.
    #[must_use]
    pub const fn total_price(&self) -> i64 {
        self.total_price
    }

    /// Returns the current lifecycle status.
    #[must_use]
    pub const fn status(&self) -> ReservationStatus {
        self.status
    }

    /// Returns the optional project location (machinery bookings).
    #[must_use]
    pub fn project_location(&self) -> Option<&str> {
        self.project_location.as_deref()
    }

    /// Returns the cancellation metadata, if cancelled.
    #[must_use]
    pub const fn cancellation(&self) -> Option<&Cancellation> {
        self.cancellation.as_ref()
    }

    /// Returns when the rental was started, if it has been.
    #[must_use]
    pub const fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    /// Returns when the rental was completed, if it has been.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Confirms a pending reservation.
    ///
    /// # Errors
    ///
    /// Returns [`RejectionReason::IllegalTransition`] unless the reservation
    /// is pending.
    pub fn confirm(&mut self) -> Result<(), RejectionReason> {
        match self.status {
            ReservationStatus::Pending => {
                self.status = ReservationStatus::Confirmed;
                Ok(())
            }
            from => Err(RejectionReason::IllegalTransition {
                from,
                action: "confirm",
            }),
        }
    }

    /// Starts the rental, stamping `started_at`.
    ///
    /// # Errors
    ///
    /// Returns [`RejectionReason::IllegalTransition`] unless the reservation
    /// is pending or confirmed.
    pub fn begin(&mut self, now: DateTime<Utc>) -> Result<(), RejectionReason> {
        match self.status {
            ReservationStatus::Pending | ReservationStatus::Confirmed => {
                self.status = ReservationStatus::InProgress;
                self.started_at = Some(now);
                Ok(())
            }
            from => Err(RejectionReason::IllegalTransition {
                from,
                action: "begin",
            }),
        }
    }

    /// Completes the rental, stamping `completed_at`.
    ///
    /// # Errors
    ///
    /// Returns [`RejectionReason::IllegalTransition`] unless the reservation
    /// is in progress.
    pub fn complete(&mut self, now: DateTime<Utc>) -> Result<(), RejectionReason> {
        match self.status {
            ReservationStatus::InProgress => {
                self.status = ReservationStatus::Completed;
                self.completed_at = Some(now);
                Ok(())
            }
            from => Err(RejectionReason::IllegalTransition {
                from,
                action: "complete",
            }),
        }
    }

    /// Cancels the reservation with a reason, stamping `cancelled_at`.
    ///
    /// Only pending and confirmed reservations can be cancelled; an active
    /// or finished rental cannot be cancelled through this path.
    ///
    /// # Errors
    ///
    /// Returns [`RejectionReason::IllegalTransition`] unless the reservation
    /// is pending or confirmed.
    pub fn cancel(
        &mut self,
        reason: String,
        by_admin: bool,
        now: DateTime<Utc>,
    ) -> Result<(), RejectionReason> {
        match self.status {
            ReservationStatus::Pending | ReservationStatus::Confirmed => {
                self.status = ReservationStatus::Cancelled;
                self.cancellation = Some(Cancellation {
                    reason,
                    by_admin,
                    cancelled_at: now,
                });
                Ok(())
            }
            from => Err(RejectionReason::IllegalTransition {
                from,
                action: "cancel",
            }),
        }
    }
}

/// Builder for creating [`Reservation`] instances.
#[derive(Debug)]
pub struct ReservationBuilder {
    id: Option<ReservationId>,
    user_id: UserId,
    item_id: ItemId,
    range: DateRange,
    total_price: i64,
    status: ReservationStatus,
    project_location: Option<String>,
    cancellation: Option<Cancellation>,
    started_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
    created_at: Option<DateTime<Utc>>,
}

impl ReservationBuilder {
    /// Sets the database id. Used when loading persisted rows.
    #[must_use]
    pub const fn id(mut self, id: ReservationId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the lifecycle status. Used when loading persisted rows.
    #[must_use]
    pub const fn status(mut self, status: ReservationStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the project location. Trimmed of surrounding whitespace.
    #[must_use]
    pub fn project_location(mut self, location: Option<String>) -> Self {
        self.project_location = location.map(|l| l.trim().to_string());
        self
    }

    /// Sets the cancellation metadata. Used when loading persisted rows.
    #[must_use]
    pub fn cancellation(mut self, cancellation: Option<Cancellation>) -> Self {
        self.cancellation = cancellation;
        self
    }

    /// Sets the started-at timestamp. Used when loading persisted rows.
    #[must_use]
    pub const fn started_at(mut self, at: Option<DateTime<Utc>>) -> Self {
        self.started_at = at;
        self
    }

    /// Sets the completed-at timestamp. Used when loading persisted rows.
    #[must_use]
    pub const fn completed_at(mut self, at: Option<DateTime<Utc>>) -> Self {
        self.completed_at = at;
        self
    }

    /// Sets the creation timestamp.
    #[must_use]
    pub const fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = Some(at);
        self
    }

    /// Builds the reservation.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The total price is not positive
    /// - The project location is provided but empty after trimming
    pub fn build(self) -> Result<Reservation, ValidationError> {
        if self.total_price <= 0 {
            return Err(ValidationError {
                field: "total_price".into(),
                message: "total price must be positive".into(),
            });
        }

        if let Some(ref location) = self.project_location {
            if location.is_empty() {
                return Err(ValidationError {
                    field: "project_location".into(),
                    message: "project location must be non-empty after trimming whitespace".into(),
                });
            }
        }

        Ok(Reservation {
            id: self.id,
            user_id: self.user_id,
            item_id: self.item_id,
            range: self.range,
            total_price: self.total_price,
            status: self.status,
            project_location: self.project_location,
            cancellation: self.cancellation,
            started_at: self.started_at,
            completed_at: self.completed_at,
            created_at: self.created_at.unwrap_or_else(Utc::now),
        })
    }
}

/// Error type for validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}
