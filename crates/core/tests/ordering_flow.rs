//! End-to-end ordering flow against a recording client

use std::{cell::RefCell, time::Duration};

use async_trait::async_trait;
use bistro::prelude::*;
use testresult::TestResult;

/// Records every payload and answers with a canned result.
#[derive(Debug)]
struct RecordingClient {
    requests: RefCell<Vec<String>>,
    fail: bool,
}

impl RecordingClient {
    fn answering() -> Self {
        RecordingClient {
            requests: RefCell::new(Vec::new()),
            fail: false,
        }
    }

    fn failing() -> Self {
        RecordingClient {
            requests: RefCell::new(Vec::new()),
            fail: true,
        }
    }
}

#[async_trait(?Send)]
impl OrderClient for RecordingClient {
    async fn place_order(&self, payload: &OrderPayload) -> Result<OrderResponse, OrderError> {
        let body = serde_json::to_string(payload)
            .map_err(|error| OrderError::MalformedResponse(error.to_string()))?;

        self.requests.borrow_mut().push(body);

        if self.fail {
            return Err(OrderError::Status(503));
        }

        OrderResponse::from_json(r#"{"status": "success", "message": "Order placed successfully!"}"#)
    }
}

#[tokio::test]
async fn order_body_matches_cart_at_call_time() -> TestResult {
    let mut storefront = Storefront::default();
    let client = RecordingClient::answering();

    storefront.add_item(ItemId(1), "Burger", 1099, Duration::ZERO);
    storefront.add_item(ItemId(1), "Burger", 1099, Duration::ZERO);
    storefront.add_item(ItemId(2), "Fries", 499, Duration::ZERO);

    let expected = serde_json::to_value(OrderPayload::from_cart(storefront.cart()))?;

    storefront.place_order(&client, Duration::from_millis(10)).await?;

    let requests = client.requests.borrow();

    assert_eq!(requests.len(), 1);

    let sent: serde_json::Value = serde_json::from_str(requests.first().ok_or("no request")?)?;

    assert_eq!(sent, expected);
    assert_eq!(sent["1"]["quantity"], 2);
    assert_eq!(sent["2"]["name"], "Fries");
    assert!(storefront.cart().is_empty());
    assert!(storefront.summary().is_empty());

    Ok(())
}

#[tokio::test]
async fn empty_order_is_not_sent() {
    let mut storefront = Storefront::default();
    let client = RecordingClient::answering();

    let result = storefront.place_order(&client, Duration::ZERO).await;

    assert!(matches!(result, Err(OrderError::EmptyCart)));
    assert!(client.requests.borrow().is_empty());
    assert_eq!(storefront.notifications().latest(), Some(EMPTY_ORDER_MESSAGE));
}

#[tokio::test]
async fn failed_order_can_be_retried() -> TestResult {
    let mut storefront = Storefront::default();
    storefront.add_item(ItemId(1), "Burger", 1099, Duration::ZERO);

    let result = storefront
        .place_order(&RecordingClient::failing(), Duration::ZERO)
        .await;

    assert!(matches!(result, Err(OrderError::Status(503))));
    assert_eq!(storefront.notifications().latest(), Some(ORDER_FAILED_MESSAGE));
    assert_eq!(storefront.cart().len(), 1);

    let retry = RecordingClient::answering();

    storefront.place_order(&retry, Duration::ZERO).await?;

    assert_eq!(retry.requests.borrow().len(), 1);
    assert!(storefront.cart().is_empty());

    Ok(())
}

#[test]
fn quantity_controls_drive_the_summary() -> TestResult {
    let mut storefront = Storefront::default();
    storefront.add_item(ItemId(1), "Burger", 1099, Duration::ZERO);
    storefront.add_item(ItemId(2), "Fries", 499, Duration::ZERO);

    assert_eq!(storefront.summary().total, "$15.98");

    let fries = storefront
        .summary()
        .lines
        .into_iter()
        .find(|line| line.id == ItemId(2))
        .ok_or("missing fries line")?;

    storefront.set_quantity(fries.id, fries.increment_to)?;

    assert_eq!(storefront.summary().total, "$20.97");

    storefront.set_quantity(ItemId(1), 0)?;
    storefront.set_quantity(ItemId(2), 0)?;

    let summary = storefront.summary();

    assert!(summary.is_empty());
    assert_eq!(summary.total, "$0.00");
    assert!(!summary.show_place_order);

    Ok(())
}

#[test]
fn notifications_disappear_after_three_seconds() {
    let mut storefront = Storefront::default();

    storefront.add_item(ItemId(1), "Burger", 1099, Duration::from_millis(500));

    assert_eq!(
        storefront.notifications().latest(),
        Some("Added Burger to your order!")
    );

    storefront.expire_notifications(Duration::from_millis(3_499));

    assert!(!storefront.notifications().is_empty());

    storefront.expire_notifications(Duration::from_millis(3_500));

    assert!(storefront.notifications().is_empty());
}
