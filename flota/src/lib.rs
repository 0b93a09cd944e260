#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # flota
//!
//! A library for managing vehicle and machinery rental reservations.
//!
//! This library provides the core types and operations for a rental fleet:
//! an item catalog, time-bounded reservations with conflict detection and
//! pricing, a reservation lifecycle state machine, and user notifications
//! emitted on every lifecycle transition.
//!
//! ## Core Types
//!
//! - [`Item`] and [`Category`]: Rentable catalog entries with validation
//! - [`Reservation`], [`DateRange`], and [`ReservationStatus`]: Booking state
//! - [`Notification`] and [`NotificationKind`]: User-facing status messages
//! - [`Caller`]: Explicit caller identity passed to every gated operation
//! - [`Error`] and [`Result`]: Error handling types
//!
//! ## Examples
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use flota::DateRange;
//!
//! let start = Utc.with_ymd_and_hms(2030, 3, 1, 0, 0, 0).unwrap();
//! let end = Utc.with_ymd_and_hms(2030, 3, 4, 0, 0, 0).unwrap();
//! let range = DateRange::new(start, end).unwrap();
//! assert_eq!(range.days(), 3);
//! ```

pub mod config;
pub mod database;
pub mod error;
pub mod item;
pub mod logging;
pub mod notification;
pub mod operations;
pub mod output;
pub mod reservation;
pub mod user;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use database::{Database, DatabaseConfig};
pub use error::{Error, RejectionReason, Result};
pub use item::{Category, Item, ItemId};
pub use logging::{init_logger, LogLevel, Logger};
pub use notification::{Notification, NotificationId, NotificationKind};
pub use operations::{
    add_item, begin, cancel, complete, confirm, delete_item, list_available, mark_all_read,
    mark_read, request_reservation, update_item, ItemPatch, NewItem, RequestOptions,
    TransitionOutcome,
};
pub use reservation::{DateRange, Reservation, ReservationId, ReservationStatus};
pub use user::{Caller, User, UserId};
