//! Cart summary render model

use crate::{cart::Cart, menu::ItemId, pricing::format_price};

/// Copy shown in place of the item list when the cart is empty.
pub const EMPTY_CART_LINES: [&str; 2] = [
    "Your order is empty",
    "Add items from the menu to get started",
];

/// Render model for an item line in the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineView {
    /// Item id, target of the quantity controls.
    pub id: ItemId,

    /// Item name.
    pub name: String,

    /// Unit price times quantity.
    pub line_total: String,

    /// Current quantity.
    pub quantity: u32,

    /// Quantity the decrement control sets.
    pub decrement_to: i64,

    /// Quantity the increment control sets.
    pub increment_to: i64,
}

/// Render model for the whole cart region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSummary {
    /// Lines in insertion order; empty means the placeholder is shown.
    pub lines: Vec<CartLineView>,

    /// Grand total.
    pub total: String,

    /// Whether the place-order control is visible.
    pub show_place_order: bool,
}

impl CartSummary {
    /// Build the render model from the current cart.
    pub fn from_cart(cart: &Cart) -> Self {
        let lines = cart
            .iter()
            .map(|(id, item)| CartLineView {
                id,
                name: item.name.clone(),
                line_total: format_price(item.line_total()),
                quantity: item.quantity,
                decrement_to: i64::from(item.quantity) - 1,
                increment_to: i64::from(item.quantity) + 1,
            })
            .collect();

        CartSummary {
            lines,
            total: format_price(cart.total_minor()),
            show_place_order: !cart.is_empty(),
        }
    }

    /// Whether the empty placeholder should be rendered.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
