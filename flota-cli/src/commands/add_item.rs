//! Add-item command implementation.

use clap::Args;

use flota::output::OutputFormat;
use flota::{add_item, Category, NewItem};

use crate::error::CliError;
use crate::utils::{
    load_configuration, open_database, parse_category, parse_output_format, print_rendered,
    resolve_caller, GlobalOptions,
};

/// Add an item to the rental catalog. Administrators only.
#[derive(Args)]
pub struct AddItemCommand {
    /// Display name
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Model designation
    #[arg(long, value_name = "MODEL")]
    pub model: String,

    /// Model year
    #[arg(long, value_name = "YEAR")]
    pub year: i32,

    /// Catalog category (vehicle or machinery)
    #[arg(long, value_parser = parse_category)]
    pub category: Category,

    /// Rental price per day in whole pesos
    #[arg(long, value_name = "PESOS")]
    pub price_per_day: i64,

    /// Fuel efficiency in km per litre
    #[arg(long, value_name = "KM_PER_LITRE")]
    pub fuel_efficiency: f64,

    /// Optional description
    #[arg(long, value_name = "TEXT")]
    pub description: Option<String>,

    /// Optional image URL
    #[arg(long, value_name = "URL")]
    pub image_url: Option<String>,

    /// Create the item delisted instead of published
    #[arg(long)]
    pub delisted: bool,

    /// Output format
    #[arg(long, value_parser = parse_output_format, default_value = "human")]
    pub format: OutputFormat,
}

impl AddItemCommand {
    /// Execute the add-item command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;
        let caller = resolve_caller(&db, global)?;

        let new = NewItem::new(
            self.name,
            self.model,
            self.year,
            self.category,
            self.price_per_day,
        )
        .with_fuel_efficiency(self.fuel_efficiency)
        .with_description(self.description)
        .with_image_url(self.image_url)
        .with_available(!self.delisted);

        let item = add_item(&db, &caller, new).map_err(CliError::from)?;
        print_rendered(self.format, &item)
    }
}
