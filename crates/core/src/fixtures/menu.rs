//! Menu Fixtures

use std::collections::HashSet;

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::iso::{Currency, EUR, GBP, USD};
use serde::Deserialize;
use tracing::debug;

use crate::{
    fixtures::FixtureError,
    menu::{ItemId, Menu, MenuItem},
};

/// Wrapper for menu items in YAML
#[derive(Debug, Deserialize)]
pub struct MenuFixture {
    /// Menu items in display order
    pub items: Vec<MenuItemFixture>,
}

/// Menu Item Fixture
#[derive(Debug, Deserialize)]
pub struct MenuItemFixture {
    /// Item id
    pub id: u32,

    /// Item name
    pub name: String,

    /// Item price (e.g., "8.99 USD")
    pub price: String,

    /// Category key
    pub category: String,

    /// Description shown on the menu
    #[serde(default)]
    pub description: String,

    /// Unavailable items are left off the menu
    #[serde(default = "available_by_default")]
    pub available: bool,
}

fn available_by_default() -> bool {
    true
}

/// Parse a menu fixture into a [`Menu`]. Every price must be in US dollars.
///
/// # Errors
///
/// Returns an error when the YAML cannot be parsed, a price is malformed,
/// negative or finer than a cent, an item is not priced in USD, or two
/// items share an id.
pub fn load_menu(yaml: &str) -> Result<Menu, FixtureError> {
    let fixture: MenuFixture = serde_norway::from_str(yaml)?;

    let mut seen: HashSet<ItemId> = HashSet::new();
    let mut items: Vec<MenuItem> = Vec::with_capacity(fixture.items.len());

    for item_fixture in fixture.items {
        let id = ItemId(item_fixture.id);

        if !seen.insert(id) {
            return Err(FixtureError::DuplicateItem(id));
        }

        let (price_minor, item_currency) = parse_price(&item_fixture.price)?;

        if item_currency != USD {
            return Err(FixtureError::UnsupportedCurrency(
                id,
                item_currency.iso_alpha_code,
            ));
        }

        if !item_fixture.available {
            debug!(item = %id, "skipping unavailable menu item");
            continue;
        }

        items.push(MenuItem {
            id,
            name: item_fixture.name,
            description: item_fixture.description,
            price_minor,
            category: item_fixture.category,
        });
    }

    Ok(Menu::from_items(items))
}

/// Parse price string (e.g., "2.99 USD") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount is not a non-negative decimal with at most two places, or
/// if the currency code is not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), FixtureError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    if parts.len() != 2 {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    }

    let amount = parts
        .first()
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    if amount.is_sign_negative() {
        return Err(FixtureError::InvalidPrice(format!(
            "Price must not be negative, got: {s}"
        )));
    }

    let minor_amount = amount
        .checked_mul(Decimal::new(100, 0))
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    if !minor_amount.fract().is_zero() {
        return Err(FixtureError::InvalidPrice(format!(
            "Price has fractions of a cent: {s}"
        )));
    }

    let minor_units = minor_amount
        .to_i64()
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency_code = parts
        .get(1)
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency = match *currency_code {
        "GBP" => GBP,
        "USD" => USD,
        "EUR" => EUR,
        other => return Err(FixtureError::UnknownCurrency(other.to_string())),
    };

    Ok((minor_units, currency))
}
