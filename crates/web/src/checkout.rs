use std::sync::Arc;

use bistro::{
    order::{HttpOrderClient, OrderClient, OrderError, OrderPayload, OrderResponse},
    settings::Settings,
    storefront::Storefront,
};
use leptos::{prelude::*, task};
use tracing::debug;

use crate::timers::{now, schedule_expiry};

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Result<String, String> {
    let window = web_sys::window().ok_or_else(|| "Window is unavailable".to_string())?;

    window
        .location()
        .origin()
        .map_err(|error| error.as_string().unwrap_or_else(|| "Page origin is unavailable".to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Result<String, String> {
    Err("Page origin is only available in the browser".to_string())
}

fn order_client(settings: &Settings) -> Result<HttpOrderClient, OrderError> {
    let origin = page_origin().map_err(OrderError::InvalidEndpoint)?;

    HttpOrderClient::new(&origin, &settings.order_endpoint)
}

fn apply_outcome(storefront: RwSignal<Storefront>, result: Result<OrderResponse, OrderError>) {
    let outcome = storefront.try_update(|storefront| storefront.finish_order(result, now()));

    if let Some(Err(error)) = outcome {
        debug!(%error, "order not placed");
    }
}

/// Begin an order and build its client.
///
/// Returns `None` when no request should be sent; the storefront has then
/// already been told why.
fn start_order(
    storefront: RwSignal<Storefront>,
    settings: &Settings,
) -> Option<(HttpOrderClient, OrderPayload)> {
    let payload = match storefront.try_update(|storefront| storefront.begin_order(now()))? {
        Ok(payload) => payload,
        Err(error) => {
            debug!(%error, "order not started");
            return None;
        }
    };

    match order_client(settings) {
        Ok(client) => Some((client, payload)),
        Err(error) => {
            apply_outcome(storefront, Err(error));
            None
        }
    }
}

/// Place-order click handler.
///
/// Starts the request on the event loop; the cart is only touched again once
/// the response arrives.
pub fn submit_order(storefront: RwSignal<Storefront>, settings: Arc<Settings>) {
    let Some((client, payload)) = start_order(storefront, &settings) else {
        schedule_expiry(storefront);
        return;
    };

    task::spawn_local(async move {
        let result = client.place_order(&payload).await;

        apply_outcome(storefront, result);
        schedule_expiry(storefront);
    });
}

#[cfg(test)]
mod tests {
    use bistro::{
        menu::ItemId,
        storefront::{EMPTY_ORDER_MESSAGE, ORDER_FAILED_MESSAGE},
    };

    use super::*;

    #[test]
    fn empty_cart_only_notifies() {
        let storefront = RwSignal::new(Storefront::default());

        let started = start_order(storefront, &Settings::default());

        assert!(started.is_none());

        let latest = storefront.with_untracked(|storefront| {
            storefront.notifications().latest().map(str::to_string)
        });

        assert_eq!(latest.as_deref(), Some(EMPTY_ORDER_MESSAGE));
        assert!(!storefront.with_untracked(Storefront::is_submitting));
    }

    #[test]
    fn missing_origin_fails_without_clearing_cart() {
        let storefront = RwSignal::new(Storefront::default());

        storefront.update(|storefront| {
            storefront.add_item(ItemId(1), "Burger", 1099, now());
        });

        let started = start_order(storefront, &Settings::default());

        assert!(started.is_none());

        let (latest, items, submitting) = storefront.with_untracked(|storefront| {
            (
                storefront.notifications().latest().map(str::to_string),
                storefront.cart().len(),
                storefront.is_submitting(),
            )
        });

        assert_eq!(latest.as_deref(), Some(ORDER_FAILED_MESSAGE));
        assert_eq!(items, 1);
        assert!(!submitting);
    }
}
