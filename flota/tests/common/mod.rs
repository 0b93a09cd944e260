//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the flota library.

use chrono::{DateTime, Duration, Utc};
use tempfile::TempDir;

use flota::{
    Caller, Category, Database, DatabaseConfig, DateRange, Item, User,
};

/// Opens a fresh database in a temporary directory.
///
/// The directory must be kept alive for as long as the database is used.
#[allow(dead_code)]
pub fn open_test_db() -> (Database, TempDir) {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let config = DatabaseConfig::new(dir.path().join("flota.db"));
    let db = Database::open(config).expect("should open database");
    (db, dir)
}

/// Creates a persisted user and returns its caller context.
#[allow(dead_code)]
pub fn seed_user(db: &Database, username: &str) -> Caller {
    let user = User::new(username, format!("{username}@example.com"), false)
        .expect("fixture should build valid user");
    db.create_user(&user)
        .expect("fixture user should persist")
        .caller()
}

/// Creates a persisted administrator and returns its caller context.
#[allow(dead_code)]
pub fn seed_admin(db: &Database, username: &str) -> Caller {
    let user = User::new(username, format!("{username}@example.com"), true)
        .expect("fixture should build valid user");
    db.create_user(&user)
        .expect("fixture admin should persist")
        .caller()
}

/// Creates a date range starting `offset_days` from now, spanning
/// `length_days` whole days.
#[allow(dead_code)]
pub fn days_from_now(offset_days: i64, length_days: i64) -> DateRange {
    let start = Utc::now() + Duration::days(offset_days);
    DateRange::new(start, start + Duration::days(length_days))
        .expect("fixture range should be valid")
}

/// Creates a date range with an explicit start.
#[allow(dead_code)]
pub fn range_from(start: DateTime<Utc>, length_days: i64) -> DateRange {
    DateRange::new(start, start + Duration::days(length_days))
        .expect("fixture range should be valid")
}

/// Builder for creating test catalog items with sensible defaults.
///
/// Defaults to a published 2022 Toyota Hilux at 50 000 pesos per day.
#[allow(dead_code)]
pub struct ItemFixture {
    name: String,
    model: String,
    year: i32,
    category: Category,
    price_per_day: i64,
    available: bool,
}

#[allow(dead_code)]
impl ItemFixture {
    /// Creates a new fixture builder with default values.
    pub fn new() -> Self {
        Self {
            name: "Hilux".to_string(),
            model: "Toyota Hilux SR 4x4".to_string(),
            year: 2022,
            category: Category::Vehicle,
            price_per_day: 50_000,
            available: true,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the catalog category.
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Sets the daily price.
    pub fn with_price_per_day(mut self, price: i64) -> Self {
        self.price_per_day = price;
        self
    }

    /// Sets the publish flag.
    pub fn with_available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    /// Builds and persists the item, returning the stored record.
    ///
    /// # Panics
    ///
    /// Panics if the fixture fails validation or persistence. This is
    /// acceptable in test code where we want to fail fast.
    pub fn create(self, db: &Database) -> Item {
        let item = Item::builder(
            self.name,
            self.model,
            self.year,
            self.category,
            self.price_per_day,
        )
        .fuel_efficiency(11.5)
        .available(self.available)
        .build()
        .expect("fixture should build valid item");
        db.create_item(&item).expect("fixture item should persist")
    }
}

impl Default for ItemFixture {
    fn default() -> Self {
        Self::new()
    }
}
