//! Error types for the flota library.
//!
//! This module provides the error hierarchy for all operations in the
//! flota library, using `thiserror` for ergonomic error handling.
//!
//! Business-rule failures (a date conflict, an illegal lifecycle
//! transition) are expected outcomes, not faults; they are modeled as
//! [`RejectionReason`] values wrapped in [`Error::Rejected`] so callers can
//! match on them and show a specific message for each.

use thiserror::Error;

use crate::reservation::ReservationStatus;

/// Result type alias for operations that may fail with a flota error.
///
/// # Examples
///
/// ```
/// use flota::{Error, Result};
///
/// fn example_operation() -> Result<i64> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the flota library.
#[derive(Debug, Error)]
pub enum Error {
    /// A validation error occurred before anything was persisted.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A business rule rejected the operation. Expected, not a fault.
    #[error("{0}")]
    Rejected(RejectionReason),

    /// The requested resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// The caller lacks the required role or ownership.
    #[error("forbidden: {details}")]
    Forbidden {
        /// Details about the missing permission.
        details: String,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A serialization error occurred while producing output.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A database lock could not be obtained within the timeout.
    ///
    /// Transient: the whole operation is safe to retry from scratch.
    #[error("database lock timeout after {seconds}s; please try again")]
    LockTimeout {
        /// The number of seconds waited before timing out.
        seconds: u64,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: i32,
        /// The schema version found in the database.
        found: i32,
    },
}

/// A named business-rule rejection (spec'd outcome, never a crash).
///
/// Every variant maps to a distinct user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    /// The item is delisted (`available = false`).
    ItemUnavailable,
    /// The start date is before today (date-only comparison).
    StartInPast,
    /// The end date is not at least one full day after the start date.
    InvalidRange,
    /// Another pending or confirmed reservation overlaps the requested dates.
    DateConflict,
    /// The reservation's current status does not permit the transition.
    IllegalTransition {
        /// The status the reservation was in.
        from: ReservationStatus,
        /// The attempted action ("confirm", "begin", "complete", "cancel").
        action: &'static str,
    },
}

impl std::fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ItemUnavailable => write!(f, "this item is not available for rental"),
            Self::StartInPast => write!(f, "the start date cannot be before today"),
            Self::InvalidRange => write!(
                f,
                "the end date must be at least one full day after the start date"
            ),
            Self::DateConflict => {
                write!(f, "this item is already reserved for the selected dates")
            }
            Self::IllegalTransition { from, action } => {
                write!(f, "cannot {action} a reservation that is {from}")
            }
        }
    }
}

impl std::error::Error for RejectionReason {}

impl From<RejectionReason> for Error {
    fn from(reason: RejectionReason) -> Self {
        Self::Rejected(reason)
    }
}

impl From<crate::reservation::ValidationError> for Error {
    fn from(err: crate::reservation::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Check if the error is an expected business-rule rejection.
    ///
    /// # Examples
    ///
    /// ```
    /// use flota::{Error, RejectionReason};
    ///
    /// let err = Error::Rejected(RejectionReason::DateConflict);
    /// assert!(err.is_rejection());
    /// ```
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// Check if the error indicates a missing resource.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if the error is a transient store failure, safe to retry.
    ///
    /// Covers an explicit lock timeout as well as the underlying SQLite
    /// busy/locked failures that surface when a writer loses the race for
    /// the database lock.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::LockTimeout { .. } => true,
            Self::Database(rusqlite::Error::SqliteFailure(e, _)) => matches!(
                e.code,
                rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked
            ),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "price_per_day".to_string(),
            message: "must be a positive amount".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("price_per_day"));
        assert!(display.contains("positive"));
    }

    #[test]
    fn test_rejection_messages_are_distinct() {
        let reasons = [
            RejectionReason::ItemUnavailable,
            RejectionReason::StartInPast,
            RejectionReason::InvalidRange,
            RejectionReason::DateConflict,
            RejectionReason::IllegalTransition {
                from: ReservationStatus::Completed,
                action: "cancel",
            },
        ];
        let messages: Vec<String> = reasons.iter().map(|r| format!("{r}")).collect();
        for (i, a) in messages.iter().enumerate() {
            for (j, b) in messages.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "rejection messages must be distinct");
                }
            }
        }
    }

    #[test]
    fn test_illegal_transition_display() {
        let err = Error::Rejected(RejectionReason::IllegalTransition {
            from: ReservationStatus::InProgress,
            action: "cancel",
        });
        let display = format!("{err}");
        assert!(display.contains("cancel"));
        assert!(display.contains("in_progress"));
    }

    #[test]
    fn test_not_found_error() {
        let err = Error::NotFound {
            resource: "reservation 42".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("not found"));
        assert!(display.contains("reservation 42"));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_forbidden_error() {
        let err = Error::Forbidden {
            details: "administrator role required".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("forbidden"));
        assert!(display.contains("administrator"));
    }

    #[test]
    fn test_lock_timeout_is_transient() {
        let err = Error::LockTimeout { seconds: 5 };
        assert!(err.is_transient());
        assert!(format!("{err}").contains("try again"));
    }

    #[test]
    fn test_rejection_is_not_transient() {
        let err = Error::Rejected(RejectionReason::DateConflict);
        assert!(err.is_rejection());
        assert!(!err.is_transient());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(format!("{err}").contains("I/O error"));
    }

    #[test]
    fn test_unsupported_schema_version_error() {
        let err = Error::UnsupportedSchemaVersion {
            expected: 1,
            found: 2,
        };
        let display = format!("{err}");
        assert!(display.contains("expected 1"));
        assert!(display.contains("found 2"));
    }
}
