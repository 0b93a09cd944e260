//! User notification records.
//!
//! Notifications are created exclusively as a side effect of reservation
//! lifecycle transitions. Once created their content is immutable; the only
//! mutation any path may perform is toggling the read flag.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::user::UserId;

/// A unique identifier for a notification (database row id).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotificationId(pub i64);

impl std::fmt::Display for NotificationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The severity/kind of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Informational message.
    Info,
    /// Something the user should pay attention to.
    Warning,
    /// A failure affecting the user.
    Error,
    /// A positive outcome.
    Success,
}

impl NotificationKind {
    /// Returns the kind as its stored string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Success => "success",
        }
    }

    /// Parses a kind from its stored string form.
    ///
    /// # Errors
    ///
    /// Returns an error message if the string is not a known kind.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s {
            "info" => Ok(Self::Info),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "success" => Ok(Self::Success),
            _ => Err(format!("invalid notification kind: {s}")),
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A user-facing notification, unread by default.
///
/// # Examples
///
/// ```
/// use flota::{Notification, NotificationKind, UserId};
///
/// let n = Notification::new(
///     UserId(1),
///     "Reservation Confirmed",
///     "Your reservation has been confirmed.",
///     NotificationKind::Success,
/// );
/// assert!(!n.read());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    id: Option<NotificationId>,
    user_id: UserId,
    title: String,
    message: String,
    kind: NotificationKind,
    read: bool,
    created_at: DateTime<Utc>,
}

impl Notification {
    /// Creates a new unread notification for the given user.
    #[must_use]
    pub fn new(
        user_id: UserId,
        title: impl Into<String>,
        message: impl Into<String>,
        kind: NotificationKind,
    ) -> Self {
        Self {
            id: None,
            user_id,
            title: title.into(),
            message: message.into(),
            kind,
            read: false,
            created_at: Utc::now(),
        }
    }

    /// Reconstructs a notification from persisted fields.
    #[must_use]
    pub fn from_parts(
        id: NotificationId,
        user_id: UserId,
        title: String,
        message: String,
        kind: NotificationKind,
        read: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(id),
            user_id,
            title,
            message,
            kind,
            read,
            created_at,
        }
    }

    /// Returns the database id, if the notification has been persisted.
    #[must_use]
    pub const fn id(&self) -> Option<NotificationId> {
        self.id
    }

    /// Returns the target user.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the message body.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the kind.
    #[must_use]
    pub const fn kind(&self) -> NotificationKind {
        self.kind
    }

    /// Whether the user has read the notification.
    #[must_use]
    pub const fn read(&self) -> bool {
        self.read
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
