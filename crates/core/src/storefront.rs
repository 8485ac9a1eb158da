//! Storefront
//!
//! Ties the cart, its notifications and order submission together. Every
//! user action goes through here so the UI only has to redraw.

use std::time::Duration;

use tracing::{debug, error, info, warn};

use crate::{
    cart::{Cart, CartError, QuantityChange},
    menu::ItemId,
    notifications::{NotificationId, Notifications},
    order::{OrderClient, OrderError, OrderPayload, OrderResponse},
    summary::CartSummary,
};

/// Shown when the place-order control is used with an empty cart.
pub const EMPTY_ORDER_MESSAGE: &str = "Please add items to your order first.";

/// Shown when an order could not be placed.
pub const ORDER_FAILED_MESSAGE: &str = "There was an error placing your order. Please try again.";

/// Cart plus the notifications it raises.
#[derive(Debug, Clone, Default)]
pub struct Storefront {
    cart: Cart,
    notifications: Notifications,
    submitting: bool,
}

impl Storefront {
    /// Create an empty storefront.
    pub fn new() -> Self {
        Storefront::default()
    }

    /// Current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Notifications on screen.
    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    /// Render model of the cart.
    pub fn summary(&self) -> CartSummary {
        CartSummary::from_cart(&self.cart)
    }

    /// Whether an order request is outstanding.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Add one unit of an item and announce it.
    pub fn add_item(
        &mut self,
        id: ItemId,
        name: &str,
        unit_price_minor: i64,
        now: Duration,
    ) -> NotificationId {
        self.cart.add_item(id, name, unit_price_minor);

        self.notify(format!("Added {name} to your order!"), now)
    }

    /// Set an item's quantity; zero or below removes it.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::UnknownItem`] for a positive quantity on an item
    /// that is not in the cart.
    pub fn set_quantity(
        &mut self,
        id: ItemId,
        new_quantity: i64,
    ) -> Result<QuantityChange, CartError> {
        self.cart
            .set_quantity(id, new_quantity)
            .inspect_err(|error| warn!(%error, quantity = new_quantity, "ignoring quantity update"))
    }

    /// Empty the cart.
    pub fn reset(&mut self) {
        self.cart.clear();
    }

    /// Show a transient message.
    pub fn notify(&mut self, message: impl Into<String>, now: Duration) -> NotificationId {
        self.notifications.notify(message, now)
    }

    /// Remove a notification whose timer fired.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.notifications.dismiss(id)
    }

    /// Drop notifications whose deadline has passed.
    pub fn expire_notifications(&mut self, now: Duration) -> usize {
        self.notifications.expire(now)
    }

    /// Start placing an order and return the request body.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::EmptyCart`] (after notifying the user) when the
    /// cart is empty, and [`OrderError::InFlight`] while a previous request
    /// has not finished.
    pub fn begin_order(&mut self, now: Duration) -> Result<OrderPayload, OrderError> {
        if self.cart.is_empty() {
            self.notify(EMPTY_ORDER_MESSAGE, now);

            return Err(OrderError::EmptyCart);
        }

        if self.submitting {
            debug!("order already in flight");

            return Err(OrderError::InFlight);
        }

        self.submitting = true;

        let payload = OrderPayload::from_cart(&self.cart);

        info!(lines = payload.len(), "placing order");

        Ok(payload)
    }

    /// Apply the outcome of an order request.
    ///
    /// On success the server message is shown and the cart cleared; on
    /// failure a generic message is shown and the cart is kept for a retry.
    ///
    /// # Errors
    ///
    /// Returns the request error unchanged.
    pub fn finish_order(
        &mut self,
        result: Result<OrderResponse, OrderError>,
        now: Duration,
    ) -> Result<OrderResponse, OrderError> {
        self.submitting = false;

        match result {
            Ok(response) => {
                self.notify(response.message.clone(), now);
                self.cart.clear();

                Ok(response)
            }
            Err(order_error) => {
                error!(error = %order_error, "failed to place order");

                self.notify(ORDER_FAILED_MESSAGE, now);

                Err(order_error)
            }
        }
    }

    /// Place an order with `client` from start to finish.
    ///
    /// # Errors
    ///
    /// Returns an error when the cart is empty, an order is in flight or the
    /// request fails.
    pub async fn place_order<C>(
        &mut self,
        client: &C,
        now: Duration,
    ) -> Result<OrderResponse, OrderError>
    where
        C: OrderClient + ?Sized,
    {
        let payload = self.begin_order(now)?;

        let result = client.place_order(&payload).await;

        self.finish_order(result, now)
    }
}
