//! Order submission

use async_trait::async_trait;
use indexmap::IndexMap;
#[cfg(test)]
use mockall::automock;
use reqwest::{Client, Url, header::CONTENT_TYPE};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{cart::Cart, menu::ItemId, pricing::to_major_units};

/// Errors that can occur when placing an order.
#[derive(Debug, Error)]
pub enum OrderError {
    /// There is nothing in the cart to order.
    #[error("cart is empty")]
    EmptyCart,

    /// Another order request has not finished yet.
    #[error("an order is already being placed")]
    InFlight,

    /// The endpoint could not be resolved against the page origin.
    #[error("invalid order endpoint: {0}")]
    InvalidEndpoint(String),

    /// An HTTP transport error occurred.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("order request failed with status {0}")]
    Status(u16),

    /// The response body was not the expected JSON.
    #[error("unexpected order response: {0}")]
    MalformedResponse(String),
}

/// An item as sent to the order endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Item name.
    pub name: String,

    /// Unit price in major units, serialized as a JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// Quantity ordered.
    pub quantity: u32,
}

/// Request body: item id to line, in cart order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderPayload(IndexMap<ItemId, OrderLine>);

impl OrderPayload {
    /// Snapshot the cart.
    pub fn from_cart(cart: &Cart) -> Self {
        OrderPayload(
            cart.iter()
                .map(|(id, item)| {
                    (
                        id,
                        OrderLine {
                            name: item.name.clone(),
                            price: to_major_units(item.unit_price_minor),
                            quantity: item.quantity,
                        },
                    )
                })
                .collect(),
        )
    }

    /// Look up a line.
    pub fn get(&self, id: ItemId) -> Option<&OrderLine> {
        self.0.get(&id)
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no lines.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Response from the order endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderResponse {
    /// Message shown to the customer.
    pub message: String,

    /// Status reported by the server (`success`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl OrderResponse {
    /// Decode and validate a response body.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::MalformedResponse`] when the body is not JSON,
    /// lacks a `message` string, or the message is blank.
    pub fn from_json(body: &str) -> Result<Self, OrderError> {
        let response: OrderResponse = serde_json::from_str(body)
            .map_err(|error| OrderError::MalformedResponse(error.to_string()))?;

        if response.message.trim().is_empty() {
            return Err(OrderError::MalformedResponse(
                "message is empty".to_string(),
            ));
        }

        Ok(response)
    }
}

/// Sends orders to the backend.
#[cfg_attr(test, automock)]
#[async_trait(?Send)]
pub trait OrderClient {
    /// Submit the payload and return the server's response.
    async fn place_order(&self, payload: &OrderPayload) -> Result<OrderResponse, OrderError>;
}

/// HTTP client posting JSON orders to a fixed endpoint.
#[derive(Debug, Clone)]
pub struct HttpOrderClient {
    url: Url,
    http: Client,
}

impl HttpOrderClient {
    /// Create a client for `endpoint` resolved against `origin`
    /// (e.g. `http://localhost:5000` and `/order`).
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::InvalidEndpoint`] if the URL cannot be built.
    pub fn new(origin: &str, endpoint: &str) -> Result<Self, OrderError> {
        let url = Url::parse(origin)
            .and_then(|base| base.join(endpoint))
            .map_err(|error| OrderError::InvalidEndpoint(format!("{origin}{endpoint}: {error}")))?;

        Ok(Self {
            url,
            http: Client::new(),
        })
    }

    /// Resolved endpoint URL.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait(?Send)]
impl OrderClient for HttpOrderClient {
    async fn place_order(&self, payload: &OrderPayload) -> Result<OrderResponse, OrderError> {
        let response = self
            .http
            .post(self.url.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            return Err(OrderError::Status(status.as_u16()));
        }

        let body = response.text().await?;

        OrderResponse::from_json(&body)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    fn burger_and_fries() -> Cart {
        let mut cart = Cart::new();
        cart.add_item(ItemId(1), "Burger", 1099);
        cart.add_item(ItemId(2), "Fries", 499);
        cart.add_item(ItemId(2), "Fries", 499);
        cart
    }

    #[test]
    fn payload_serializes_as_id_keyed_object() -> TestResult {
        let payload = OrderPayload::from_cart(&burger_and_fries());

        let value = serde_json::to_value(&payload)?;

        assert_eq!(
            value,
            json!({
                "1": { "name": "Burger", "price": 10.99, "quantity": 1 },
                "2": { "name": "Fries", "price": 4.99, "quantity": 2 },
            })
        );

        Ok(())
    }

    #[test]
    fn payload_keeps_cart_order() -> TestResult {
        let mut cart = Cart::new();
        cart.add_item(ItemId(9), "Water", 100);
        cart.add_item(ItemId(3), "Cola", 199);

        let body = serde_json::to_string(&OrderPayload::from_cart(&cart))?;

        let water = body.find(r#""9":"#).ok_or("missing water")?;
        let cola = body.find(r#""3":"#).ok_or("missing cola")?;

        assert!(water < cola, "expected insertion order in {body}");

        Ok(())
    }

    #[test]
    fn payload_of_empty_cart_is_empty() {
        assert!(OrderPayload::from_cart(&Cart::new()).is_empty());
    }

    #[test]
    fn response_with_message_is_accepted() -> TestResult {
        let response =
            OrderResponse::from_json(r#"{"status": "success", "message": "Order placed successfully!"}"#)?;

        assert_eq!(response.message, "Order placed successfully!");
        assert_eq!(response.status.as_deref(), Some("success"));

        Ok(())
    }

    #[test]
    fn response_without_message_is_rejected() {
        let result = OrderResponse::from_json(r#"{"status": "success"}"#);

        assert!(matches!(result, Err(OrderError::MalformedResponse(_))));
    }

    #[test]
    fn response_with_blank_message_is_rejected() {
        let result = OrderResponse::from_json(r#"{"message": "  "}"#);

        assert!(matches!(result, Err(OrderError::MalformedResponse(_))));
    }

    #[test]
    fn response_that_is_not_json_is_rejected() {
        let result = OrderResponse::from_json("<html>Please log in</html>");

        assert!(matches!(result, Err(OrderError::MalformedResponse(_))));
    }

    #[test]
    fn http_client_resolves_relative_endpoint() -> TestResult {
        let client = HttpOrderClient::new("http://localhost:5000", "/order")?;

        assert_eq!(client.url().as_str(), "http://localhost:5000/order");

        Ok(())
    }

    #[test]
    fn http_client_rejects_invalid_origin() {
        let result = HttpOrderClient::new("not a url", "/order");

        assert!(matches!(result, Err(OrderError::InvalidEndpoint(_))));
    }
}
