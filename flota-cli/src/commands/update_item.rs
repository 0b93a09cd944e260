//! Update-item command implementation.
//!
//! Only the given flags change; everything else keeps its stored value.

use clap::Args;

use flota::output::OutputFormat;
use flota::{update_item, Category, ItemId, ItemPatch};

use crate::error::CliError;
use crate::utils::{
    load_configuration, open_database, parse_category, parse_output_format, print_rendered,
    resolve_caller, GlobalOptions,
};

/// Edit a catalog item. Administrators only.
#[derive(Args)]
pub struct UpdateItemCommand {
    /// Item id to edit
    #[arg(value_name = "ID")]
    pub id: i64,

    /// New display name
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// New model designation
    #[arg(long, value_name = "MODEL")]
    pub model: Option<String>,

    /// New model year
    #[arg(long, value_name = "YEAR")]
    pub year: Option<i32>,

    /// New catalog category (vehicle or machinery)
    #[arg(long, value_parser = parse_category)]
    pub category: Option<Category>,

    /// New rental price per day in whole pesos
    #[arg(long, value_name = "PESOS")]
    pub price_per_day: Option<i64>,

    /// New fuel efficiency in km per litre
    #[arg(long, value_name = "KM_PER_LITRE")]
    pub fuel_efficiency: Option<f64>,

    /// New description
    #[arg(long, value_name = "TEXT")]
    pub description: Option<String>,

    /// New image URL
    #[arg(long, value_name = "URL")]
    pub image_url: Option<String>,

    /// Publish the item
    #[arg(long, conflicts_with = "delist")]
    pub publish: bool,

    /// Delist the item (hides it from the catalog, existing reservations stand)
    #[arg(long)]
    pub delist: bool,

    /// Output format
    #[arg(long, value_parser = parse_output_format, default_value = "human")]
    pub format: OutputFormat,
}

impl UpdateItemCommand {
    /// Execute the update-item command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;
        let caller = resolve_caller(&db, global)?;

        let available = if self.publish {
            Some(true)
        } else if self.delist {
            Some(false)
        } else {
            None
        };

        let patch = ItemPatch {
            name: self.name,
            model: self.model,
            year: self.year,
            category: self.category,
            price_per_day: self.price_per_day,
            fuel_efficiency: self.fuel_efficiency,
            description: self.description,
            image_url: self.image_url,
            available,
        };

        let item = update_item(&db, &caller, ItemId(self.id), patch).map_err(CliError::from)?;
        print_rendered(self.format, &item)
    }
}
