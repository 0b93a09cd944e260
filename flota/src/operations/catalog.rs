//! Catalog management: adding, editing, delisting, and listing items.
//!
//! All mutations are administrator-gated. Listing the published catalog is
//! open to everyone.

use crate::database::Database;
use crate::error::{Error, Result};
use crate::item::{Category, Item, ItemId};
use crate::user::Caller;

/// The fields of a new catalog item.
///
/// # Examples
///
/// ```
/// use flota::{Category, NewItem};
///
/// let new = NewItem::new("Hilux", "Toyota Hilux SR", 2023, Category::Vehicle, 50_000)
///     .with_fuel_efficiency(11.5)
///     .with_description(Some("double cab, 4x4".to_string()));
/// assert!(new.available);
/// ```
#[derive(Debug, Clone)]
pub struct NewItem {
    /// Display name.
    pub name: String,
    /// Model designation.
    pub model: String,
    /// Model year.
    pub year: i32,
    /// Catalog category.
    pub category: Category,
    /// Rental price per day in whole pesos.
    pub price_per_day: i64,
    /// Fuel efficiency in km per litre.
    pub fuel_efficiency: f64,
    /// Optional description.
    pub description: Option<String>,
    /// Optional image URL.
    pub image_url: Option<String>,
    /// Publish flag. New items default to published.
    pub available: bool,
}

impl NewItem {
    /// Creates a new item description with defaults for the optional fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        category: Category,
        price_per_day: i64,
    ) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
            year,
            category,
            price_per_day,
            fuel_efficiency: 0.0,
            description: None,
            image_url: None,
            available: true,
        }
    }

    /// Sets the fuel efficiency.
    #[must_use]
    pub const fn with_fuel_efficiency(mut self, efficiency: f64) -> Self {
        self.fuel_efficiency = efficiency;
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Sets the image URL.
    #[must_use]
    pub fn with_image_url(mut self, url: Option<String>) -> Self {
        self.image_url = url;
        self
    }

    /// Sets the publish flag.
    #[must_use]
    pub const fn with_available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }
}

/// A partial update to an existing item. `None` fields keep their current
/// value.
#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    /// New display name.
    pub name: Option<String>,
    /// New model designation.
    pub model: Option<String>,
    /// New model year.
    pub year: Option<i32>,
    /// New catalog category.
    pub category: Option<Category>,
    /// New rental price per day in whole pesos. Does not affect the fixed
    /// total of existing reservations.
    pub price_per_day: Option<i64>,
    /// New fuel efficiency.
    pub fuel_efficiency: Option<f64>,
    /// New description.
    pub description: Option<String>,
    /// New image URL.
    pub image_url: Option<String>,
    /// New publish flag.
    pub available: Option<bool>,
}

/// Adds an item to the catalog. Administrators only.
///
/// # Errors
///
/// Returns [`Error::Forbidden`] for non-admin callers, a validation error
/// if any field is rejected, or a database error if the insert fails.
pub fn add_item(db: &Database, caller: &Caller, new: NewItem) -> Result<Item> {
    caller.require_admin("add catalog items")?;

    let item = Item::builder(new.name, new.model, new.year, new.category, new.price_per_day)
        .fuel_efficiency(new.fuel_efficiency)
        .description(new.description)
        .image_url(new.image_url)
        .available(new.available)
        .build()?;
    let item = db.create_item(&item)?;

    log::info!("item {} added to the catalog", item.id().unwrap_or(ItemId(0)));
    Ok(item)
}

/// Applies a partial update to an item. Administrators only.
///
/// The merged result is re-validated as a whole, so a patch cannot push an
/// item into an invalid state.
///
/// # Errors
///
/// Returns [`Error::Forbidden`] for non-admin callers, [`Error::NotFound`]
/// if the item does not exist, a validation error if the merged result is
/// rejected, or a database error if the update fails.
pub fn update_item(db: &Database, caller: &Caller, id: ItemId, patch: ItemPatch) -> Result<Item> {
    caller.require_admin("edit catalog items")?;

    let current = db.get_item(id)?.ok_or_else(|| Error::NotFound {
        resource: format!("item {id}"),
    })?;

    let merged = Item::builder(
        patch.name.unwrap_or_else(|| current.name().to_string()),
        patch.model.unwrap_or_else(|| current.model().to_string()),
        patch.year.unwrap_or(current.year()),
        patch.category.unwrap_or(current.category()),
        patch.price_per_day.unwrap_or(current.price_per_day()),
    )
    .id(id)
    .fuel_efficiency(patch.fuel_efficiency.unwrap_or(current.fuel_efficiency()))
    .description(patch.description.or_else(|| current.description().map(ToString::to_string)))
    .image_url(patch.image_url.or_else(|| current.image_url().map(ToString::to_string)))
    .available(patch.available.unwrap_or(current.available()))
    .created_at(current.created_at())
    .build()?;

    db.update_item(&merged)?;
    Ok(merged)
}

/// Removes an item from the catalog. Administrators only.
///
/// The item's reservations are removed with it.
///
/// # Errors
///
/// Returns [`Error::Forbidden`] for non-admin callers, [`Error::NotFound`]
/// if the item does not exist, or a database error if the delete fails.
pub fn delete_item(db: &Database, caller: &Caller, id: ItemId) -> Result<()> {
    caller.require_admin("delete catalog items")?;
    db.delete_item(id)?;
    log::info!("item {id} removed from the catalog");
    Ok(())
}

/// Lists the published catalog, optionally filtered by category.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub fn list_available(db: &Database, category: Option<Category>) -> Result<Vec<Item>> {
    db.list_items(category, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::{create_test_database, test_item, test_user};
    use crate::user::UserId;

    fn setup() -> (Database, Caller) {
        let db = create_test_database();
        let admin = db.create_user(&test_user("admin", true)).unwrap().caller();
        (db, admin)
    }

    fn new_hilux() -> NewItem {
        NewItem::new("Hilux", "Toyota Hilux SR", 2023, Category::Vehicle, 50_000)
            .with_fuel_efficiency(11.5)
    }

    #[test]
    fn test_add_item() {
        let (db, admin) = setup();
        let item = add_item(&db, &admin, new_hilux()).unwrap();
        assert!(item.id().is_some());
        assert_eq!(item.name(), "Hilux");
        assert!(item.available());
    }

    #[test]
    fn test_add_item_requires_admin() {
        let (db, _) = setup();
        let err = add_item(&db, &Caller::user(UserId(2)), new_hilux()).unwrap_err();
        assert!(matches!(err, Error::Forbidden { .. }));
    }

    #[test]
    fn test_add_item_validates_fields() {
        let (db, admin) = setup();
        let bad = NewItem::new("", "Model", 2023, Category::Vehicle, 100);
        let err = add_item(&db, &admin, bad).unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }

    #[test]
    fn test_update_item_partial() {
        let (db, admin) = setup();
        let item = add_item(&db, &admin, new_hilux()).unwrap();
        let id = item.id().unwrap();

        let patch = ItemPatch {
            price_per_day: Some(60_000),
            available: Some(false),
            ..ItemPatch::default()
        };
        let updated = update_item(&db, &admin, id, patch).unwrap();

        // Patched fields change, the rest survive
        assert_eq!(updated.price_per_day(), 60_000);
        assert!(!updated.available());
        assert_eq!(updated.name(), "Hilux");
        assert_eq!(updated.year(), 2023);

        let reloaded = db.get_item(id).unwrap().unwrap();
        assert_eq!(reloaded.price_per_day(), 60_000);
    }

    #[test]
    fn test_update_item_rejects_invalid_merge() {
        let (db, admin) = setup();
        let item = add_item(&db, &admin, new_hilux()).unwrap();
        let id = item.id().unwrap();

        let patch = ItemPatch {
            price_per_day: Some(-1),
            ..ItemPatch::default()
        };
        let err = update_item(&db, &admin, id, patch).unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));

        // The stored item is untouched
        let reloaded = db.get_item(id).unwrap().unwrap();
        assert_eq!(reloaded.price_per_day(), 50_000);
    }

    #[test]
    fn test_update_missing_item() {
        let (db, admin) = setup();
        let err = update_item(&db, &admin, ItemId(9999), ItemPatch::default()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_delete_item_requires_admin() {
        let (db, admin) = setup();
        let item = add_item(&db, &admin, new_hilux()).unwrap();
        let id = item.id().unwrap();

        let err = delete_item(&db, &Caller::user(UserId(2)), id).unwrap_err();
        assert!(matches!(err, Error::Forbidden { .. }));

        delete_item(&db, &admin, id).unwrap();
        assert!(db.get_item(id).unwrap().is_none());
    }

    #[test]
    fn test_list_available_hides_delisted() {
        let (db, admin) = setup();
        add_item(&db, &admin, new_hilux()).unwrap();
        db.create_item(&test_item(false)).unwrap();

        let listed = list_available(&db, None).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name(), "Hilux");
    }

    #[test]
    fn test_list_available_filters_category() {
        let (db, admin) = setup();
        add_item(&db, &admin, new_hilux()).unwrap();
        add_item(
            &db,
            &admin,
            NewItem::new("CAT 320", "Caterpillar 320", 2021, Category::Machinery, 250_000)
                .with_fuel_efficiency(3.5),
        )
        .unwrap();

        let machinery = list_available(&db, Some(Category::Machinery)).unwrap();
        assert_eq!(machinery.len(), 1);
        assert_eq!(machinery[0].name(), "CAT 320");
    }
}
