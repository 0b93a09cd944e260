//! Output formatting for catalog items, reservations, and notifications.
//!
//! Structured formats (JSON, YAML) serialize the records as-is via serde;
//! the human format renders compact one-line summaries with CLP amounts.

mod formatters;

use serde::Serialize;

use crate::error::Result;

pub use formatters::{format_clp, HumanRender};

/// Available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable one-line summaries.
    Human,
    /// JSON format.
    Json,
    /// YAML format.
    Yaml,
}

impl OutputFormat {
    /// Parses an output format from a string.
    ///
    /// # Errors
    ///
    /// Returns an error message if the string is not a known format.
    pub fn parse(s: &str) -> std::result::Result<Self, String> {
        match s.to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            _ => Err(format!("invalid output format: {s}")),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// Renders a value in the requested format.
///
/// # Errors
///
/// Returns an error if JSON or YAML serialization fails.
///
/// # Examples
///
/// ```
/// use flota::output::{render, OutputFormat};
/// use flota::{Category, Item};
///
/// let item = Item::builder("Hilux", "Toyota Hilux SR", 2023, Category::Vehicle, 50_000)
///     .build()
///     .unwrap();
/// let text = render(OutputFormat::Human, &item).unwrap();
/// assert!(text.contains("Hilux"));
/// ```
pub fn render<T: Serialize + HumanRender>(format: OutputFormat, value: &T) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(value.render_human()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
    }
}
