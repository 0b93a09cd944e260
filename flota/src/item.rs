//! Catalog item types for rentable vehicles and machinery.
//!
//! Items carry a manual availability flag set by administrators. The flag
//! means "published for rental", not "currently booked"; date-level
//! exclusivity is enforced solely by the reservation engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::reservation::ValidationError;

/// A unique identifier for a catalog item (database row id).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub i64);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The catalog category of a rentable item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// A generic vehicle (car, truck, van).
    Vehicle,
    /// Heavy machinery (excavator, crane, loader).
    Machinery,
}

impl Category {
    /// Returns the category as its stored string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vehicle => "vehicle",
            Self::Machinery => "machinery",
        }
    }

    /// Parses a category from its stored string form.
    ///
    /// # Errors
    ///
    /// Returns an error message if the string is not a known category.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s {
            "vehicle" => Ok(Self::Vehicle),
            "machinery" => Ok(Self::Machinery),
            _ => Err(format!("invalid category: {s}")),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A rentable vehicle or machinery unit in the catalog.
///
/// # Examples
///
/// ```
/// use flota::{Category, Item};
///
/// let item = Item::builder("Hilux", "Toyota Hilux SR", 2023, Category::Vehicle, 50_000)
///     .fuel_efficiency(11.5)
///     .build()
///     .unwrap();
/// assert!(item.available());
/// assert_eq!(item.price_per_day(), 50_000);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    id: Option<ItemId>,
    name: String,
    model: String,
    year: i32,
    fuel_efficiency: f64,
    price_per_day: i64,
    category: Category,
    description: Option<String>,
    image_url: Option<String>,
    available: bool,
    created_at: DateTime<Utc>,
}

impl Item {
    /// Creates a new item builder.
    ///
    /// Items start available (published) with no description or image.
    pub fn builder(
        name: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        category: Category,
        price_per_day: i64,
    ) -> ItemBuilder {
        ItemBuilder {
            id: None,
            name: name.into(),
            model: model.into(),
            year,
            fuel_efficiency: 0.0,
            price_per_day,
            category,
            description: None,
            image_url: None,
            available: true,
            created_at: None,
        }
    }

    /// Returns the database id, if the item has been persisted.
    #[must_use]
    pub const fn id(&self) -> Option<ItemId> {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the model designation.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the model year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the fuel efficiency in km per litre.
    #[must_use]
    pub const fn fuel_efficiency(&self) -> f64 {
        self.fuel_efficiency
    }

    /// Returns the rental price per day in whole pesos.
    #[must_use]
    pub const fn price_per_day(&self) -> i64 {
        self.price_per_day
    }

    /// Returns the catalog category.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Returns the optional description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the optional image URL.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    /// Whether the item is published for rental.
    ///
    /// Independent of reservation state; toggled manually by administrators.
    #[must_use]
    pub const fn available(&self) -> bool {
        self.available
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Builder for creating [`Item`] instances with field validation.
///
/// Numeric fields must be positive; malformed input is rejected before
/// anything reaches the database.
#[derive(Debug)]
pub struct ItemBuilder {
    id: Option<ItemId>,
    name: String,
    model: String,
    year: i32,
    fuel_efficiency: f64,
    price_per_day: i64,
    category: Category,
    description: Option<String>,
    image_url: Option<String>,
    available: bool,
    created_at: Option<DateTime<Utc>>,
}

impl ItemBuilder {
    /// Sets the database id. Used when loading persisted rows.
    #[must_use]
    pub const fn id(mut self, id: ItemId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the fuel efficiency in km per litre.
    #[must_use]
    pub const fn fuel_efficiency(mut self, efficiency: f64) -> Self {
        self.fuel_efficiency = efficiency;
        self
    }

    /// Sets the description. Trimmed of surrounding whitespace.
    #[must_use]
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description.map(|d| d.trim().to_string());
        self
    }

    /// Sets the image URL.
    #[must_use]
    pub fn image_url(mut self, url: Option<String>) -> Self {
        self.image_url = url;
        self
    }

    /// Sets the availability (publish) flag.
    #[must_use]
    pub const fn available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    /// Sets the creation timestamp.
    #[must_use]
    pub const fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = Some(at);
        self
    }

    /// Builds the item.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The name or model is empty after trimming
    /// - The year is not positive
    /// - The price per day is not positive
    /// - The fuel efficiency is negative or not finite
    pub fn build(self) -> Result<Item, ValidationError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError {
                field: "name".into(),
                message: "name must be non-empty".into(),
            });
        }

        let model = self.model.trim().to_string();
        if model.is_empty() {
            return Err(ValidationError {
                field: "model".into(),
                message: "model must be non-empty".into(),
            });
        }

        if self.year <= 0 {
            return Err(ValidationError {
                field: "year".into(),
                message: format!("year must be a positive number, got {}", self.year),
            });
        }

        if self.price_per_day <= 0 {
            return Err(ValidationError {
                field: "price_per_day".into(),
                message: format!(
                    "price per day must be a positive amount, got {}",
                    self.price_per_day
                ),
            });
        }

        if !self.fuel_efficiency.is_finite() || self.fuel_efficiency < 0.0 {
            return Err(ValidationError {
                field: "fuel_efficiency".into(),
                message: "fuel efficiency must be a non-negative number".into(),
            });
        }

        if let Some(ref description) = self.description {
            if description.is_empty() {
                return Err(ValidationError {
                    field: "description".into(),
                    message: "description must be non-empty after trimming whitespace".into(),
                });
            }
        }

        Ok(Item {
            id: self.id,
            name,
            model,
            year: self.year,
            fuel_efficiency: self.fuel_efficiency,
            price_per_day: self.price_per_day,
            category: self.category,
            description: self.description,
            image_url: self.image_url,
            available: self.available,
            created_at: self.created_at.unwrap_or_else(Utc::now),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_builder() -> ItemBuilder {
        Item::builder("Hilux", "Toyota Hilux SR", 2023, Category::Vehicle, 50_000)
            .fuel_efficiency(11.5)
    }

    #[test]
    fn test_item_builder_basic() {
        let item = valid_builder().build().unwrap();
        assert_eq!(item.name(), "Hilux");
        assert_eq!(item.model(), "Toyota Hilux SR");
        assert_eq!(item.year(), 2023);
        assert_eq!(item.category(), Category::Vehicle);
        assert_eq!(item.price_per_day(), 50_000);
        assert!(item.available());
        assert!(item.id().is_none());
    }

    #[test]
    fn test_item_builder_rejects_empty_name() {
        let result = Item::builder("  ", "Model", 2023, Category::Vehicle, 100).build();
        assert_eq!(result.unwrap_err().field, "name");
    }

    #[test]
    fn test_item_builder_rejects_empty_model() {
        let result = Item::builder("Name", "", 2023, Category::Vehicle, 100).build();
        assert_eq!(result.unwrap_err().field, "model");
    }

    #[test]
    fn test_item_builder_rejects_non_positive_year() {
        let result = Item::builder("Name", "Model", 0, Category::Vehicle, 100).build();
        assert_eq!(result.unwrap_err().field, "year");

        let result = Item::builder("Name", "Model", -2023, Category::Vehicle, 100).build();
        assert_eq!(result.unwrap_err().field, "year");
    }

    #[test]
    fn test_item_builder_rejects_non_positive_price() {
        let result = Item::builder("Name", "Model", 2023, Category::Vehicle, 0).build();
        assert_eq!(result.unwrap_err().field, "price_per_day");

        let result = Item::builder("Name", "Model", 2023, Category::Vehicle, -50).build();
        assert_eq!(result.unwrap_err().field, "price_per_day");
    }

    #[test]
    fn test_item_builder_rejects_bad_efficiency() {
        let result = valid_builder().fuel_efficiency(-1.0).build();
        assert_eq!(result.unwrap_err().field, "fuel_efficiency");

        let result = valid_builder().fuel_efficiency(f64::NAN).build();
        assert_eq!(result.unwrap_err().field, "fuel_efficiency");
    }

    #[test]
    fn test_item_builder_trims_description() {
        let item = valid_builder()
            .description(Some("  double cab, 4x4  ".to_string()))
            .build()
            .unwrap();
        assert_eq!(item.description(), Some("double cab, 4x4"));
    }

    #[test]
    fn test_item_builder_rejects_blank_description() {
        let result = valid_builder().description(Some("   ".to_string())).build();
        assert_eq!(result.unwrap_err().field, "description");
    }

    #[test]
    fn test_item_unavailable() {
        let item = valid_builder().available(false).build().unwrap();
        assert!(!item.available());
    }

    #[test]
    fn test_category_round_trip() {
        assert_eq!(Category::parse("vehicle").unwrap(), Category::Vehicle);
        assert_eq!(Category::parse("machinery").unwrap(), Category::Machinery);
        assert!(Category::parse("boat").is_err());
        assert_eq!(Category::Vehicle.as_str(), "vehicle");
        assert_eq!(format!("{}", Category::Machinery), "machinery");
    }

    #[test]
    fn test_item_serde() {
        let item = valid_builder().build().unwrap();
        let json = serde_json::to_string(&item).unwrap();
        let deserialized: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, item);
    }
}
