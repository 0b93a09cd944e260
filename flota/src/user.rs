//! User records and explicit caller context.
//!
//! Credential storage and hashing are out of scope; the `password_hash`
//! field is an opaque string supplied by the external authentication layer.
//!
//! There is no ambient "current user". Every gated operation takes a
//! [`Caller`] value carrying the resolved identity and admin flag, so the
//! permission check is visible at the call site.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::reservation::ValidationError;

/// A unique identifier for a user (database row id).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub i64);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered user who owns reservations and notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: Option<UserId>,
    username: String,
    email: String,
    password_hash: Option<String>,
    is_admin: bool,
    created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user record.
    ///
    /// # Errors
    ///
    /// Returns an error if the username or email is empty after trimming,
    /// or the email has no `@`.
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        is_admin: bool,
    ) -> Result<Self, ValidationError> {
        let username = username.into().trim().to_string();
        if username.is_empty() {
            return Err(ValidationError {
                field: "username".into(),
                message: "username must be non-empty".into(),
            });
        }

        let email = email.into().trim().to_string();
        if email.is_empty() || !email.contains('@') {
            return Err(ValidationError {
                field: "email".into(),
                message: "email must contain '@'".into(),
            });
        }

        Ok(Self {
            id: None,
            username,
            email,
            password_hash: None,
            is_admin,
            created_at: Utc::now(),
        })
    }

    /// Reconstructs a user from persisted fields. Used by the database layer.
    #[must_use]
    pub fn from_parts(
        id: UserId,
        username: String,
        email: String,
        password_hash: Option<String>,
        is_admin: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(id),
            username,
            email,
            password_hash,
            is_admin,
            created_at,
        }
    }

    /// Returns the database id, if the user has been persisted.
    #[must_use]
    pub const fn id(&self) -> Option<UserId> {
        self.id
    }

    /// Returns the unique username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the unique email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the opaque password hash, if one has been set.
    #[must_use]
    pub fn password_hash(&self) -> Option<&str> {
        self.password_hash.as_deref()
    }

    /// Sets the opaque password hash supplied by the auth layer.
    pub fn set_password_hash(&mut self, hash: Option<String>) {
        self.password_hash = hash;
    }

    /// Whether the user holds the administrator role.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.is_admin
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the caller context for this user.
    ///
    /// # Panics
    ///
    /// Panics if the user has not been persisted (no id).
    #[must_use]
    pub fn caller(&self) -> Caller {
        Caller {
            user_id: self.id.expect("caller requires a persisted user"),
            is_admin: self.is_admin,
        }
    }
}

/// The resolved identity of the current caller.
///
/// # Examples
///
/// ```
/// use flota::{Caller, UserId};
///
/// let admin = Caller::admin(UserId(1));
/// assert!(admin.require_admin("confirm reservations").is_ok());
///
/// let user = Caller::user(UserId(2));
/// assert!(user.require_admin("confirm reservations").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    /// The caller's user id.
    pub user_id: UserId,
    /// Whether the caller holds the administrator role.
    pub is_admin: bool,
}

impl Caller {
    /// Creates an administrator caller context.
    #[must_use]
    pub const fn admin(user_id: UserId) -> Self {
        Self {
            user_id,
            is_admin: true,
        }
    }

    /// Creates a regular (non-admin) caller context.
    #[must_use]
    pub const fn user(user_id: UserId) -> Self {
        Self {
            user_id,
            is_admin: false,
        }
    }

    /// Requires the administrator role for the named action.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Forbidden`] if the caller is not an admin.
    pub fn require_admin(&self, action: &str) -> crate::error::Result<()> {
        if self.is_admin {
            Ok(())
        } else {
            Err(crate::error::Error::Forbidden {
                details: format!("only administrators may {action}"),
            })
        }
    }
}
