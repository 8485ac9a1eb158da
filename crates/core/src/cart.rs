//! Cart

use indexmap::IndexMap;
use thiserror::Error;
use tracing::debug;

use crate::{menu::ItemId, pricing::line_total};

/// Errors raised by cart updates.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// A positive quantity was set for an item that is not in the cart.
    #[error("Item {0} is not in the cart")]
    UnknownItem(ItemId),
}

/// A line in the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    /// Item name.
    pub name: String,

    /// Unit price in minor units.
    pub unit_price_minor: i64,

    /// Quantity, always at least 1.
    pub quantity: u32,
}

impl CartItem {
    /// Unit price multiplied by quantity.
    pub fn line_total(&self) -> i64 {
        line_total(self.unit_price_minor, self.quantity)
    }
}

/// What a quantity update did to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// The item now has the given quantity.
    Updated(u32),

    /// The item was removed.
    Removed,

    /// The item was already absent and the requested quantity removes it.
    Unchanged,
}

/// Items keyed by id, in insertion order, with a cached total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: IndexMap<ItemId, CartItem>,
    total_minor: i64,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Add one unit of an item, inserting it with quantity 1 if absent.
    ///
    /// Returns the new quantity.
    pub fn add_item(&mut self, id: ItemId, name: &str, unit_price_minor: i64) -> u32 {
        let item = self.items.entry(id).or_insert_with(|| CartItem {
            name: name.to_string(),
            unit_price_minor,
            quantity: 0,
        });

        item.quantity = item.quantity.saturating_add(1);

        let quantity = item.quantity;

        debug!(item = %id, quantity, "added item to cart");

        self.recalculate();

        quantity
    }

    /// Set the quantity of an item. Zero or below removes it.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::UnknownItem`] when a positive quantity is set for
    /// an item that is not in the cart. The cart is left unchanged.
    pub fn set_quantity(
        &mut self,
        id: ItemId,
        new_quantity: i64,
    ) -> Result<QuantityChange, CartError> {
        if new_quantity <= 0 {
            let change = if self.items.shift_remove(&id).is_some() {
                debug!(item = %id, "removed item from cart");
                QuantityChange::Removed
            } else {
                QuantityChange::Unchanged
            };

            self.recalculate();

            return Ok(change);
        }

        let item = self.items.get_mut(&id).ok_or(CartError::UnknownItem(id))?;

        item.quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);

        let quantity = item.quantity;

        self.recalculate();

        Ok(QuantityChange::Updated(quantity))
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.items.clear();
        self.recalculate();
    }

    /// Look up an item.
    pub fn get(&self, id: ItemId) -> Option<&CartItem> {
        self.items.get(&id)
    }

    /// Iterate items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &CartItem)> {
        self.items.iter().map(|(id, item)| (*id, item))
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all line totals in minor units.
    pub fn total_minor(&self) -> i64 {
        self.total_minor
    }

    fn recalculate(&mut self) {
        self.total_minor = self
            .items
            .values()
            .map(CartItem::line_total)
            .fold(0_i64, i64::saturating_add);
    }
}
