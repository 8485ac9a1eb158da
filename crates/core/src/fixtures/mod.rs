//! Fixtures

use thiserror::Error;

use crate::menu::ItemId;

pub mod menu;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Item priced in a currency other than USD (item id, item currency)
    #[error("Item {0} is priced in {1}, but the menu is priced in USD")]
    UnsupportedCurrency(ItemId, &'static str),

    /// Two items share an id
    #[error("Duplicate menu item id: {0}")]
    DuplicateItem(ItemId),
}
